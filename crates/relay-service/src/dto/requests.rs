//! Request DTOs for webhook endpoints
//!
//! Payloads are deserialized leniently: unknown fields are ignored and the
//! fields a relay needs are optional, so a missing field is reported as a
//! validation error rather than a generic JSON rejection.

use relay_core::{BoardId, ChangeNotification, ColumnId, ItemId};
use serde::Deserialize;
use serde_json::Value;
use validator::{Validate, ValidationError};

// ============================================================================
// monday.com Webhooks
// ============================================================================

/// Body of a monday.com webhook delivery
///
/// Either a one-time `challenge` handshake or an `event`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MondayWebhookRequest {
    /// Echoed back verbatim during endpoint verification
    pub challenge: Option<Value>,

    pub event: Option<MondayEvent>,
}

/// "Column value changed" event
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MondayEvent {
    #[validate(required(message = "boardId is required"))]
    pub board_id: Option<BoardId>,

    /// Item id, named `pulseId` on the wire
    #[validate(required(message = "pulseId is required"))]
    pub pulse_id: Option<ItemId>,

    #[validate(
        required(message = "columnId is required"),
        custom(function = "validate_column_id")
    )]
    pub column_id: Option<ColumnId>,

    /// Informational, the title is always re-read from the source item
    pub column_title: Option<String>,

    pub pulse_name: Option<String>,
}

impl MondayEvent {
    /// Convert a validated event into a change notification
    pub fn to_notification(&self) -> Option<ChangeNotification> {
        Some(ChangeNotification::new(
            self.board_id?,
            self.pulse_id?,
            self.column_id.clone()?,
        ))
    }
}

fn validate_column_id(column_id: &ColumnId) -> Result<(), ValidationError> {
    if column_id.is_empty() {
        return Err(ValidationError::new("column_id_empty"));
    }
    Ok(())
}

// ============================================================================
// Slack Events API
// ============================================================================

/// Outer envelope of a Slack Events API delivery
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SlackEnvelope {
    UrlVerification { challenge: Value },
    EventCallback { event: SlackEvent },
    #[serde(other)]
    Other,
}

/// Inner event of an `event_callback`
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SlackEvent {
    Message(SlackMessageEvent),
    #[serde(other)]
    Other,
}

/// A `message` event
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SlackMessageEvent {
    pub subtype: Option<String>,
    /// Present only on messages posted by bots and integrations
    pub bot_id: Option<String>,
    pub channel: Option<String>,
    pub channel_type: Option<String>,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub attachments: Vec<SlackAttachment>,
    pub ts: Option<String>,
}

impl SlackMessageEvent {
    /// Text of the first attachment
    pub fn attachment_text(&self) -> Option<&str> {
        self.attachments.first().and_then(|a| a.text.as_deref())
    }
}

/// Message attachment
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SlackAttachment {
    pub text: Option<String>,
    pub fallback: Option<String>,
}
