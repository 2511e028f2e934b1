//! Comment message extracted from a Slack notification

/// An update to mirror onto the target board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentMessage {
    /// Board name as written in the notification text
    pub board_name: String,
    /// Item name used to resolve the target item
    pub record_name: String,
    /// Update body, taken from the first attachment
    pub body: String,
}
