//! Events server setup
//!
//! Provides the router, middleware and server runner.

mod handler;
mod state;

pub use handler::{health_check, slack_events_handler, RUNNING};
pub use state::RelayState;

use std::any::Any;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    body::Body,
    http::{header::HeaderName, Request, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use relay_common::{AppConfig, AppError};
use relay_monday::{MondayClient, MondayClientConfig};
use relay_service::ServiceContext;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

/// Path Slack delivers events to
pub const EVENTS_PATH: &str = "/slack/events";

/// Header name for request ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Create the events router
pub fn create_router() -> Router<RelayState> {
    Router::new()
        .route("/", get(health_check))
        .route(EVENTS_PATH, post(slack_events_handler))
}

/// Build the complete application
///
/// No timeout layer: the handler acknowledges before any monday.com call.
pub fn create_app(state: RelayState) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    create_router()
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(request_id.clone(), MakeRequestUuid))
                .layer(PropagateRequestIdLayer::new(request_id))
                .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                    let request_id = request
                        .headers()
                        .get(REQUEST_ID_HEADER)
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or("unknown");

                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = %request_id,
                    )
                }))
                .layer(CatchPanicLayer::custom(panic_response)),
        )
        .with_state(state)
}

fn panic_response(_: Box<dyn Any + Send + 'static>) -> Response {
    tracing::error!("Events handler panicked");
    StatusCode::INTERNAL_SERVER_ERROR.into_response()
}

/// Initialize all dependencies and create `RelayState`
pub fn create_relay_state(config: AppConfig) -> Result<RelayState, AppError> {
    let client = MondayClient::new(MondayClientConfig::from(&config.monday))
        .map_err(|e| AppError::Config(format!("Failed to build monday.com client: {e}")))?;
    tracing::info!(api_url = %config.monday.api_url, "monday.com client ready");

    let service_context = ServiceContext::from_config(&config, Arc::new(client));

    Ok(RelayState::new(service_context, &config.slack.signing_secret))
}

/// Run the events server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    tracing::info!("Starting Slack events server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| AppError::Bind {
            addr: addr.to_string(),
            source,
        })?;

    tracing::info!("Listening on http://{}{}", addr, EVENTS_PATH);

    axum::serve(listener, app)
        .await
        .map_err(AppError::Server)?;

    Ok(())
}

/// Run the complete events server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config
        .server
        .address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid listen address: {e}")))?;

    // Create relay state
    let state = create_relay_state(config)?;

    // Build application
    let app = create_app(state);

    // Run server
    run_server(app, addr).await
}
