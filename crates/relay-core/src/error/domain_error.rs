//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::BoardId;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Resolution Errors
    // =========================================================================
    #[error("No item named {name:?} on board {board_id}")]
    ItemNotFound { board_id: BoardId, name: String },

    #[error("No column titled {title:?} on board {board_id}")]
    ColumnNotFound { board_id: BoardId, title: String },

    #[error("Source item not found")]
    SourceItemNotFound,

    #[error("Source column not found")]
    SourceColumnNotFound,

    // =========================================================================
    // Value Errors
    // =========================================================================
    #[error("Failed to parse column value {raw:?}: {source}")]
    ValueDecode {
        raw: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode column value: {0}")]
    ValueEncode(#[source] serde_json::Error),

    // =========================================================================
    // Extraction Errors
    // =========================================================================
    #[error("Failed to parse board or item name from text: {0:?}")]
    ExtractionFailed(String),

    #[error("Message has no attachment text")]
    MissingAttachmentText,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Upstream API error: {0}")]
    Upstream(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Resolution
            Self::ItemNotFound { .. } => "UNKNOWN_TARGET_ITEM",
            Self::ColumnNotFound { .. } => "UNKNOWN_TARGET_COLUMN",
            Self::SourceItemNotFound => "UNKNOWN_SOURCE_ITEM",
            Self::SourceColumnNotFound => "UNKNOWN_SOURCE_COLUMN",

            // Values
            Self::ValueDecode { .. } => "VALUE_DECODE_FAILED",
            Self::ValueEncode(_) => "VALUE_ENCODE_FAILED",

            // Extraction
            Self::ExtractionFailed(_) => "EXTRACTION_FAILED",
            Self::MissingAttachmentText => "MISSING_ATTACHMENT_TEXT",

            // Infrastructure
            Self::Upstream(_) => "UPSTREAM_ERROR",
        }
    }

    /// Check if this is a resolution miss on either board
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ItemNotFound { .. }
                | Self::ColumnNotFound { .. }
                | Self::SourceItemNotFound
                | Self::SourceColumnNotFound
        )
    }

    /// Check if the upstream API call failed
    pub fn is_upstream(&self) -> bool {
        matches!(self, Self::Upstream(_))
    }
}
