//! Background processing of Slack message events

use relay_service::dto::SlackMessageEvent;
use relay_service::{UpdateOutcome, UpdateSyncService};
use tokio::task::JoinHandle;
use tracing::{debug, error, info, info_span, Instrument};

use crate::server::RelayState;

/// Process a message event on its own task
///
/// The task outlives the HTTP request; failures are logged, never retried.
pub fn spawn_message(state: RelayState, message: SlackMessageEvent) -> JoinHandle<()> {
    let span = info_span!("slack_message", ts = ?message.ts, bot_id = ?message.bot_id);

    tokio::spawn(
        async move {
            let service = UpdateSyncService::new(state.service_context());
            match service.handle_message(&message).await {
                Ok(UpdateOutcome::Posted { item_id, update_id }) => {
                    info!(%item_id, %update_id, "Slack message synced");
                }
                Ok(outcome) => debug!(?outcome, "Slack message not synced"),
                Err(e) => error!(error = %e, code = e.error_code(), "Failed to sync Slack message"),
            }
        }
        .instrument(span),
    )
}
