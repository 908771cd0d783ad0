//! Case intake HTTP handler

use axum::{Json, extract::State, response::IntoResponse};
use chrono::Utc;
use intake_core::{CaseSubmission, build_properties, normalize_database_id, validate};
use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::AppState;
use crate::error::AppError;
use crate::notion::RecordWriter;

/// Success body for a created case
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCaseResponse {
    success: bool,
    notion_page_id: String,
    case_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<String>,
}

/// POST /cases - Translate a referral submission and create one record
///
/// Linear pipeline: normalize, validate, resolve configuration, build the
/// property set, create the page. Validation failures never reach the
/// external service.
pub async fn create<W: RecordWriter>(
    State(state): State<AppState<W>>,
    Json(body): Json<JsonValue>,
) -> Result<impl IntoResponse, AppError> {
    let submission = CaseSubmission::from_value(&body);
    validate(&submission, &state.config.extra_required_fields)?;

    let writer = state
        .writer
        .as_ref()
        .ok_or(AppError::MissingSetting("NOTION_API_TOKEN"))?;
    let raw = state
        .config
        .notion_database_id
        .as_deref()
        .ok_or(AppError::MissingSetting("NOTION_DATABASE_ID"))?;
    let database_id = normalize_database_id(raw).map_err(|e| AppError::InvalidDatabaseId {
        raw: e.raw,
    })?;

    let properties = build_properties(&submission, Utc::now());
    let record = writer.create_record(&database_id, properties).await?;

    tracing::info!(
        case_id = %submission.case_id,
        page_id = %record.id,
        "Created referral case record"
    );

    Ok(Json(CreateCaseResponse {
        success: true,
        notion_page_id: record.id,
        case_id: submission.case_id,
        url: record.url,
    }))
}
