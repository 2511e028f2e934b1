//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use relay_common::{AppConfig, AppError};
use relay_monday::{MondayClient, MondayClientConfig};
use relay_service::ServiceContext;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let router = create_router();
    let router = apply_middleware(router);
    router.with_state(state)
}

/// Initialize all dependencies and create AppState
pub fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    let client = MondayClient::new(MondayClientConfig::from(&config.monday))
        .map_err(|e| AppError::Config(format!("Failed to build monday.com client: {e}")))?;
    info!(api_url = %config.monday.api_url, "monday.com client ready");

    let service_context = ServiceContext::from_config(&config, Arc::new(client));

    Ok(AppState::new(service_context))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| AppError::Bind {
            addr: addr.to_string(),
            source,
        })?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(AppError::Server)?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config
        .server
        .address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid listen address: {e}")))?;

    // Create app state
    let state = create_app_state(config)?;

    // Build application
    let app = create_app(state);

    // Run server
    run_server(app, addr).await
}
