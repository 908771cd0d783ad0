//! intake-server: Referral case intake HTTP binary entrypoint.

use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use intake_server::config::Config;
use intake_server::notion::NotionClient;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    // Load configuration
    let config = Config::from_env();

    // Create the Notion client (None if NOTION_API_TOKEN not set)
    let writer: Option<NotionClient> = config.notion_token.clone().map(NotionClient::new);

    // Log startup info
    if writer.is_some() {
        tracing::info!("Notion credential configured");
    } else {
        tracing::warn!("NOTION_API_TOKEN not set, submissions will fail with 500");
    }
    match config.notion_database_id.as_deref() {
        Some(raw) => match intake_core::normalize_database_id(raw) {
            Ok(id) => tracing::info!(database_id = %id, "Target database configured"),
            Err(e) => tracing::warn!(error = %e, "NOTION_DATABASE_ID is malformed"),
        },
        None => tracing::warn!("NOTION_DATABASE_ID not set, submissions will fail with 500"),
    }
    if !config.extra_required_fields.is_empty() {
        tracing::info!(
            fields = ?config.extra_required_fields,
            "Extra required fields enabled"
        );
    }

    // Build application
    let addr: SocketAddr = config.bind_address.parse().expect("Invalid bind address");
    let app = intake_server::build_app(writer, config);

    // Start server
    tracing::info!("Starting intake server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    tracing::info!("Server shutdown complete");
}

/// Wait for shutdown signal (SIGTERM or SIGINT)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
