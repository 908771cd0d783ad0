//! Notion API client for page creation.

use std::future::Future;

use intake_core::PropertySet;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use thiserror::Error;

const API_URL: &str = "https://api.notion.com/v1/pages";
const API_VERSION: &str = "2022-06-28";

/// Handle to a created record: its opaque page id and, when the API
/// returns one, a browsable URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordRef {
    pub id: String,
    pub url: Option<String>,
}

/// Failure from the external record store, passed through to the caller
/// verbatim. Never retried.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("{message}")]
pub struct WriteError {
    pub message: String,
    pub code: Option<String>,
    pub status: Option<u16>,
    pub body: Option<JsonValue>,
}

impl WriteError {
    /// An error with no upstream diagnostics, e.g. a transport failure.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
            status: None,
            body: None,
        }
    }
}

/// The one capability the translator needs from the outside world:
/// create exactly one record in a collection.
pub trait RecordWriter: Clone + Send + Sync + 'static {
    fn create_record(
        &self,
        database_id: &str,
        properties: PropertySet,
    ) -> impl Future<Output = Result<RecordRef, WriteError>> + Send;
}

/// Client for the Notion pages API
#[derive(Clone)]
pub struct NotionClient {
    http: reqwest::Client,
    token: String,
}

/// Request body for page creation
#[derive(Serialize)]
struct CreatePageRequest<'a> {
    parent: Parent<'a>,
    properties: &'a PropertySet,
}

#[derive(Serialize)]
struct Parent<'a> {
    database_id: &'a str,
}

/// Response from page creation
#[derive(Debug, Deserialize)]
struct CreatePageResponse {
    id: String,
    url: Option<String>,
}

/// Error body returned by the Notion API
#[derive(Debug, Deserialize)]
struct ApiError {
    code: Option<String>,
    message: Option<String>,
}

impl NotionClient {
    /// Create a new client with the given integration token
    pub fn new(token: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            token,
        }
    }
}

impl RecordWriter for NotionClient {
    async fn create_record(
        &self,
        database_id: &str,
        properties: PropertySet,
    ) -> Result<RecordRef, WriteError> {
        let request = CreatePageRequest {
            parent: Parent { database_id },
            properties: &properties,
        };

        let response = self
            .http
            .post(API_URL)
            .bearer_auth(&self.token)
            .header("Notion-Version", API_VERSION)
            .json(&request)
            .send()
            .await
            .map_err(|e| WriteError::message(format!("HTTP request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let text = response.text().await.unwrap_or_default();
            let body: Option<JsonValue> = serde_json::from_str(&text).ok();

            if let Some(api_err) = body
                .as_ref()
                .and_then(|b| serde_json::from_value::<ApiError>(b.clone()).ok())
            {
                return Err(WriteError {
                    message: api_err
                        .message
                        .unwrap_or_else(|| format!("Notion API error ({})", status)),
                    code: api_err.code,
                    status: Some(status),
                    body,
                });
            }
            return Err(WriteError {
                message: format!("Notion API error ({}): {}", status, text),
                code: None,
                status: Some(status),
                body,
            });
        }

        let page = response
            .json::<CreatePageResponse>()
            .await
            .map_err(|e| WriteError::message(format!("Failed to parse response: {}", e)))?;

        Ok(RecordRef {
            id: page.id,
            url: page.url,
        })
    }
}
