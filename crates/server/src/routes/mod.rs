mod cases;
mod health;

use axum::{
    Json, Router,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::json;

use crate::AppState;
use crate::notion::RecordWriter;

/// Build case intake routes
pub fn case_routes<W: RecordWriter>() -> Router<AppState<W>> {
    Router::new()
        .route("/cases", post(cases::create::<W>))
        .route("/health", get(health::check::<W>))
}

/// Any verb other than POST (or a CORS preflight) on /cases lands here.
pub async fn method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({"success": false, "error": "Method not allowed"})),
    )
}
