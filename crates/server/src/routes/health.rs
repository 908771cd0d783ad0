//! Health check endpoint

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use intake_core::normalize_database_id;
use serde::Serialize;

use crate::AppState;
use crate::notion::RecordWriter;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
}

/// GET /health - Report whether the Notion settings are usable
///
/// No outbound call is made; this checks configuration only, since the
/// service holds no other state.
pub async fn check<W: RecordWriter>(State(state): State<AppState<W>>) -> impl IntoResponse {
    let reason = if state.writer.is_none() {
        Some("NOTION_API_TOKEN is not configured".to_string())
    } else {
        match state.config.notion_database_id.as_deref() {
            None => Some("NOTION_DATABASE_ID is not configured".to_string()),
            Some(raw) => match normalize_database_id(raw) {
                Ok(_) => None,
                Err(e) => Some(format!("NOTION_DATABASE_ID is invalid: {}", e)),
            },
        }
    };

    match reason {
        None => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "healthy".to_string(),
                reason: None,
            }),
        ),
        Some(reason) => {
            tracing::error!(reason = %reason, "Health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "unhealthy".to_string(),
                    reason: Some(reason),
                }),
            )
        }
    }
}
