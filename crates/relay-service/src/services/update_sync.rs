//! Update sync service
//!
//! Turns a notification posted to Slack by the monday.com integration bot
//! into an update on the item with the same name on the target board.
//! Update and reply notifications read the same, so replies are posted as
//! top-level updates.

use relay_core::{extract_comment, DomainError, ItemId};
use tracing::{debug, info, instrument, warn};

use crate::dto::SlackMessageEvent;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Result of handling one Slack message
#[derive(Debug)]
pub enum UpdateOutcome {
    /// An update was created on the target item
    Posted { item_id: ItemId, update_id: String },
    /// Message has no `bot_id`
    IgnoredHumanMessage,
    /// Message was posted by a different bot
    IgnoredOtherBot { bot_id: String },
    /// Extraction failed or the item name did not resolve
    Discarded { reason: DomainError },
}

impl UpdateOutcome {
    pub fn is_posted(&self) -> bool {
        matches!(self, Self::Posted { .. })
    }
}

/// Update sync service
pub struct UpdateSyncService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UpdateSyncService<'a> {
    /// Create a new UpdateSyncService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Mirror one Slack message as an update
    ///
    /// Only upstream failures are errors; every other reason not to post is
    /// an `UpdateOutcome`.
    #[instrument(
        skip(self, message),
        fields(channel = ?message.channel, channel_type = ?message.channel_type, ts = ?message.ts)
    )]
    pub async fn handle_message(&self, message: &SlackMessageEvent) -> ServiceResult<UpdateOutcome> {
        let Some(bot_id) = message.bot_id.as_deref() else {
            debug!("Ignoring message without bot_id");
            return Ok(UpdateOutcome::IgnoredHumanMessage);
        };

        if bot_id != self.ctx.slack_bot_id() {
            debug!(bot_id, "Ignoring message from another bot");
            return Ok(UpdateOutcome::IgnoredOtherBot {
                bot_id: bot_id.to_string(),
            });
        }

        let expected_channel = self.ctx.slack_channel_id();
        if message.channel.as_deref() != Some(expected_channel) {
            warn!(
                expected_channel,
                channel = ?message.channel,
                "Bot message arrived outside the configured channel"
            );
        }

        match message.channel_type.as_deref() {
            Some("channel") => debug!("Message from public channel"),
            Some("group") => debug!("Message from private channel"),
            other => debug!(channel_type = ?other, "Message from other conversation type"),
        }

        let comment = match extract_comment(&message.text, message.attachment_text()) {
            Ok(comment) => comment,
            Err(reason) => return Ok(discarded(reason)),
        };

        let target_board_id = self.ctx.target_board_id();
        let board = self
            .ctx
            .board_api()
            .fetch_target_board(target_board_id, false)
            .await?;

        let Some(record) = board.resolve_record(&comment.record_name) else {
            return Ok(discarded(DomainError::ItemNotFound {
                board_id: target_board_id,
                name: comment.record_name,
            }));
        };

        let update_id = self
            .ctx
            .board_api()
            .create_update(record.id, &comment.body)
            .await?;

        info!(
            target_item_id = %record.id,
            update_id = %update_id,
            board_name = %comment.board_name,
            record_name = %comment.record_name,
            "Update mirrored"
        );

        Ok(UpdateOutcome::Posted {
            item_id: record.id,
            update_id,
        })
    }
}

fn discarded(reason: DomainError) -> UpdateOutcome {
    warn!(code = reason.code(), reason = %reason, "Slack message discarded");
    UpdateOutcome::Discarded { reason }
}
