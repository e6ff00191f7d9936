//! MEMi content service API server entry point.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use memi_api::error::AppError;
use memi_api::state::AppState;
use memi_backend::BackendClient;
use memi_content::ContentStore;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting MEMi content service");

    // Read configuration from environment.
    let backend_url = std::env::var("BACKEND_URL")
        .map_err(|_| AppError::Config("BACKEND_URL environment variable must be set".into()))?;
    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse()
        .map_err(|e| AppError::Config(format!("PORT must be a valid u16: {e}")))?;
    let upstream_timeout: u64 = std::env::var("UPSTREAM_TIMEOUT_SECS")
        .unwrap_or_else(|_| "30".to_string())
        .parse()
        .map_err(|e| AppError::Config(format!("UPSTREAM_TIMEOUT_SECS must be an integer: {e}")))?;

    // Build application state.
    let backend = BackendClient::new(backend_url, Duration::from_secs(upstream_timeout))?;
    let app_state = AppState::new(Arc::new(ContentStore::new()), Arc::new(backend));

    // Build router.
    let app = memi_api::app(app_state);

    // Start server.
    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .map_err(|e| AppError::Config(format!("invalid HOST:PORT combination: {e}")))?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
