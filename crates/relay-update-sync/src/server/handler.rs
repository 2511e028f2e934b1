//! Slack Events API handler

use axum::{
    body::Bytes,
    extract::State,
    http::HeaderMap,
    response::{IntoResponse, Response},
    Json,
};
use relay_service::dto::{ChallengeResponse, SlackEnvelope, SlackEvent};
use tracing::{debug, info};

use super::state::RelayState;
use crate::handlers::error::{HandlerError, HandlerResult};
use crate::handlers::message::spawn_message;
use crate::signature::{SIGNATURE_HEADER, TIMESTAMP_HEADER};

/// Plain-text liveness message
pub const RUNNING: &str = "slack-sync-update, server is running!";

/// GET /
pub async fn health_check() -> &'static str {
    RUNNING
}

/// POST /slack/events
///
/// The signature is checked over the raw body before anything is parsed.
/// Message events are acknowledged immediately and processed in the
/// background so Slack's three-second delivery deadline is never at risk.
pub async fn slack_events_handler(
    State(state): State<RelayState>,
    headers: HeaderMap,
    body: Bytes,
) -> HandlerResult<Response> {
    let header = |name: &'static str| headers.get(name).and_then(|v| v.to_str().ok());
    state
        .verifier()
        .verify(header(TIMESTAMP_HEADER), header(SIGNATURE_HEADER), &body)?;

    if let Some(retry) = header("x-slack-retry-num") {
        debug!(retry, reason = ?header("x-slack-retry-reason"), "Slack redelivery");
    }

    let envelope: SlackEnvelope = serde_json::from_slice(&body)
        .map_err(|e| HandlerError::InvalidPayload(e.to_string()))?;

    match envelope {
        SlackEnvelope::UrlVerification { challenge } => {
            info!("Answering Slack url_verification");
            Ok(Json(ChallengeResponse::new(challenge)).into_response())
        }
        SlackEnvelope::EventCallback {
            event: SlackEvent::Message(message),
        } => {
            spawn_message(state, message);
            Ok(().into_response())
        }
        SlackEnvelope::EventCallback {
            event: SlackEvent::Other,
        }
        | SlackEnvelope::Other => {
            debug!("Ignoring non-message delivery");
            Ok(().into_response())
        }
    }
}
