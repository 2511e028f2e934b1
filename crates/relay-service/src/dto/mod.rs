//! Data transfer objects for inbound webhooks and their responses
//!
//! This module provides:
//! - monday.com webhook payloads with validation
//! - Slack Events API envelopes
//! - Response DTOs shared by both relays

pub mod requests;
pub mod responses;

pub use requests::{
    MondayEvent, MondayWebhookRequest, SlackAttachment, SlackEnvelope, SlackEvent,
    SlackMessageEvent,
};
pub use responses::ChallengeResponse;
