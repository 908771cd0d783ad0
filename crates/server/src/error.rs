//! Application error handling
//!
//! Every failure becomes a structured JSON body with a `success:false`
//! flag. Upstream diagnostics are passed through unchanged.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use intake_core::ValidationError;
use serde_json::json;

use crate::notion::WriteError;

/// Application error type
#[derive(Debug)]
pub enum AppError {
    /// Required fields absent from the request body.
    Validation(ValidationError),
    /// A required process setting was never configured.
    MissingSetting(&'static str),
    /// The configured database id holds no usable 32-hex token. Echoes
    /// the raw value for operator debugging.
    InvalidDatabaseId { raw: String },
    /// The external create call failed.
    Upstream(WriteError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Validation(err) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "success": false,
                    "error": err.to_string(),
                    "missingFields": err.missing,
                    "providedFields": err.provided,
                }),
            ),
            AppError::MissingSetting(name) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({
                    "success": false,
                    "error": format!("{} is not configured", name),
                }),
            ),
            AppError::InvalidDatabaseId { raw } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({
                    "success": false,
                    "error": "NOTION_DATABASE_ID is not a valid Notion database id",
                    "databaseId": raw,
                }),
            ),
            AppError::Upstream(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({
                    "success": false,
                    "error": err.message,
                    "code": err.code,
                    "status": err.status,
                    "body": err.body,
                }),
            ),
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Validation(err)
    }
}

impl From<WriteError> for AppError {
    fn from(err: WriteError) -> Self {
        AppError::Upstream(err)
    }
}
