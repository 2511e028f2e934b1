//! Item name and update body extraction from Slack notifications
//!
//! The monday.com Slack integration posts plain-text notifications such as
//! `Jane updated *Widget A* on board *Project X*`, with the update body in the
//! first attachment. There is no structured payload, so the board and item
//! names are recovered with two independent patterns. A message that does not
//! match either is discarded by the caller.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use crate::entities::CommentMessage;
use crate::error::DomainError;

/// `on board Project X` or `on Project X board`
const BOARD_PATTERN: &str =
    r"(?im)\bon\s+(?:board\s+(?P<after>.+?)|(?P<before>.+?)\s+board)\s*(?:$|[.,:;!?])";

/// `updated Widget A on board`
const ITEM_PATTERN: &str = r"(?im)\bupdated\s+(?P<item>.+?)\s+on\s+board\b";

static LINK_WITH_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^|>]+\|(?P<label>[^>]+)>").expect("valid link pattern"));

static BARE_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<(?P<target>[^|>]+)>").expect("valid link pattern"));

static DEFAULT_EXTRACTOR: LazyLock<MessageExtractor> = LazyLock::new(MessageExtractor::new);

/// Compiled extraction patterns
#[derive(Debug, Clone)]
pub struct MessageExtractor {
    board: Regex,
    item: Regex,
}

impl MessageExtractor {
    pub fn new() -> Self {
        Self {
            board: Regex::new(BOARD_PATTERN).expect("valid board pattern"),
            item: Regex::new(ITEM_PATTERN).expect("valid item pattern"),
        }
    }

    /// Board name referenced by the notification, if any
    pub fn board_name(&self, text: &str) -> Option<String> {
        let text = normalize_markup(text);
        let captures = self.board.captures(&text)?;
        captures
            .name("after")
            .or_else(|| captures.name("before"))
            .map(|m| m.as_str().trim().to_string())
    }

    /// Item name referenced by the notification, if any
    pub fn record_name(&self, text: &str) -> Option<String> {
        let text = normalize_markup(text);
        self.item
            .captures(&text)
            .and_then(|captures| captures.name("item"))
            .map(|m| m.as_str().trim().to_string())
    }

    /// Extract the comment to mirror
    ///
    /// Fails when either pattern does not match or the attachment text is
    /// missing or blank.
    pub fn extract(
        &self,
        text: &str,
        attachment_text: Option<&str>,
    ) -> Result<CommentMessage, DomainError> {
        let (Some(board_name), Some(record_name)) = (self.board_name(text), self.record_name(text))
        else {
            return Err(DomainError::ExtractionFailed(text.to_string()));
        };

        let body = attachment_text
            .filter(|body| !body.trim().is_empty())
            .ok_or(DomainError::MissingAttachmentText)?;

        Ok(CommentMessage {
            board_name,
            record_name,
            body: body.to_string(),
        })
    }
}

impl Default for MessageExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract with the default patterns
pub fn extract_comment(
    text: &str,
    attachment_text: Option<&str>,
) -> Result<CommentMessage, DomainError> {
    DEFAULT_EXTRACTOR.extract(text, attachment_text)
}

/// Strip Slack mrkdwn from notification text
///
/// Links collapse to their label, bold markers are removed and the three
/// HTML entities Slack escapes are decoded.
pub fn normalize_markup(text: &str) -> Cow<'_, str> {
    if !text.contains(['<', '*', '&']) {
        return Cow::Borrowed(text);
    }

    let text = LINK_WITH_LABEL.replace_all(text, "$label");
    let text = BARE_LINK.replace_all(&text, "$target");
    let text = text
        .replace('*', "")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&");
    Cow::Owned(text)
}
