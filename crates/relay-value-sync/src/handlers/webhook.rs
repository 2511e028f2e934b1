//! monday.com webhook handler

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use relay_service::dto::{ChallengeResponse, MondayWebhookRequest};
use relay_service::{SyncOutcome, ValueSyncService};
use tracing::info;
use validator::Validate;

use crate::extractors::WebhookJson;
use crate::response::{ApiError, ApiResult, SUCCESS};
use crate::state::AppState;

/// POST /monday-webhook
///
/// Answers the verification challenge, otherwise mirrors the changed column.
/// Resolution misses are acknowledged with a 200 so monday.com does not
/// retry a delivery that can never succeed.
pub async fn monday_webhook(
    State(state): State<AppState>,
    WebhookJson(request): WebhookJson<MondayWebhookRequest>,
) -> ApiResult<Response> {
    if let Some(challenge) = request.challenge {
        info!("Answering monday.com challenge");
        return Ok(Json(ChallengeResponse::new(challenge)).into_response());
    }

    let event = request.event.ok_or(ApiError::MissingEvent)?;
    event
        .validate()
        .map_err(|e| ApiError::MissingFields(e.to_string()))?;
    let notification = event
        .to_notification()
        .ok_or_else(|| ApiError::MissingFields("event".to_string()))?;

    info!(
        board_id = %notification.board_id,
        item_id = %notification.item_id,
        column_id = %notification.column_id,
        "Received column change"
    );

    let outcome = ValueSyncService::new(state.service_context())
        .sync_column_change(&notification)
        .await?;

    Ok(match outcome {
        SyncOutcome::Applied { .. } => SUCCESS.into_response(),
        SyncOutcome::Skipped { reason } => format!("Skipped: {reason}").into_response(),
    })
}
