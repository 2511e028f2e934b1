//! Service context - dependency container for services
//!
//! Holds the board API client and the settings both relays read on every
//! request. Built once at startup and never mutated.

use std::sync::Arc;

use relay_common::AppConfig;
use relay_core::{BoardApi, BoardId, CompositeClearColumns};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    board_api: Arc<dyn BoardApi>,
    target_board_id: BoardId,
    composite_clear_columns: CompositeClearColumns,
    slack_bot_id: String,
    slack_channel_id: String,
}

impl ServiceContext {
    /// Create a context from loaded configuration
    pub fn from_config(config: &AppConfig, board_api: Arc<dyn BoardApi>) -> Self {
        Self {
            board_api,
            target_board_id: config.monday.target_board_id,
            composite_clear_columns: config.monday.composite_clear_columns.clone(),
            slack_bot_id: config.slack.bot_id.clone(),
            slack_channel_id: config.slack.channel_id.clone(),
        }
    }

    /// Get the board API client
    pub fn board_api(&self) -> &dyn BoardApi {
        self.board_api.as_ref()
    }

    /// Board that receives mirrored values and updates
    pub fn target_board_id(&self) -> BoardId {
        self.target_board_id
    }

    pub fn composite_clear_columns(&self) -> &CompositeClearColumns {
        &self.composite_clear_columns
    }

    /// Bot whose Slack messages are mirrored
    pub fn slack_bot_id(&self) -> &str {
        &self.slack_bot_id
    }

    /// Channel the bot is expected to post in
    pub fn slack_channel_id(&self) -> &str {
        &self.slack_channel_id
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("board_api", &"dyn BoardApi")
            .field("target_board_id", &self.target_board_id)
            .field("composite_clear_columns", &self.composite_clear_columns)
            .field("slack_bot_id", &self.slack_bot_id)
            .field("slack_channel_id", &self.slack_channel_id)
            .finish()
    }
}

/// Builder for creating ServiceContext piece by piece
#[derive(Default)]
pub struct ServiceContextBuilder {
    board_api: Option<Arc<dyn BoardApi>>,
    target_board_id: Option<BoardId>,
    composite_clear_columns: Option<CompositeClearColumns>,
    slack_bot_id: Option<String>,
    slack_channel_id: Option<String>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn board_api(mut self, api: Arc<dyn BoardApi>) -> Self {
        self.board_api = Some(api);
        self
    }

    pub fn target_board_id(mut self, id: BoardId) -> Self {
        self.target_board_id = Some(id);
        self
    }

    pub fn composite_clear_columns(mut self, columns: CompositeClearColumns) -> Self {
        self.composite_clear_columns = Some(columns);
        self
    }

    pub fn slack_bot_id(mut self, bot_id: impl Into<String>) -> Self {
        self.slack_bot_id = Some(bot_id.into());
        self
    }

    pub fn slack_channel_id(mut self, channel_id: impl Into<String>) -> Self {
        self.slack_channel_id = Some(channel_id.into());
        self
    }

    /// Build the ServiceContext
    ///
    /// The board API and target board are required. Composite-clear titles
    /// fall back to the default set, Slack ids to empty strings.
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext {
            board_api: self
                .board_api
                .ok_or_else(|| ServiceError::internal("board_api is required"))?,
            target_board_id: self
                .target_board_id
                .ok_or_else(|| ServiceError::internal("target_board_id is required"))?,
            composite_clear_columns: self.composite_clear_columns.unwrap_or_default(),
            slack_bot_id: self.slack_bot_id.unwrap_or_default(),
            slack_channel_id: self.slack_channel_id.unwrap_or_default(),
        })
    }
}
