//! intake-server library crate
//!
//! Exposes `build_app`, `config`, and the `notion` writer boundary for
//! integration tests. The actual binary entrypoint is in `main.rs`.

pub mod config;
mod error;
mod middleware;
pub mod notion;
mod routes;

use std::sync::Arc;

use axum::{Router, http::Method, http::header, middleware as axum_mw};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use config::Config;
use notion::RecordWriter;

/// Shared request state: the record writer (absent when no credential is
/// configured) and the read-only process configuration.
#[derive(Clone)]
pub struct AppState<W: RecordWriter> {
    pub writer: Option<W>,
    pub config: Arc<Config>,
}

/// Build the full application router with all routes and middleware.
///
/// Extracted from `main()` so integration tests can construct the app
/// with a fake writer and without binding to a TCP port.
pub fn build_app<W: RecordWriter>(writer: Option<W>, config: Config) -> Router {
    // Build CORS layer: permissive POST/OPTIONS with the JSON headers
    let methods = [Method::GET, Method::POST, Method::OPTIONS];
    let headers = [header::CONTENT_TYPE, header::ACCEPT];
    let cors = if config.cors_origins.iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(methods)
            .allow_headers(headers)
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(methods)
            .allow_headers(headers)
    };

    let state = AppState {
        writer,
        config: Arc::new(config),
    };

    routes::case_routes::<W>()
        .method_not_allowed_fallback(routes::method_not_allowed)
        .with_state(state)
        .layer(axum_mw::from_fn(middleware::audit_middleware))
        .layer(axum_mw::from_fn(middleware::request_id_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
