//! Column value as read back from the source item

use serde_json::Value;

use crate::error::DomainError;

/// Current value of a column on an item
///
/// `raw_value` is the API's serialized encoding (JSON text whose shape
/// depends on the column type). `None` means the column is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnValue {
    pub column_title: String,
    pub raw_value: Option<String>,
}

impl ColumnValue {
    pub fn new(column_title: impl Into<String>, raw_value: Option<String>) -> Self {
        Self {
            column_title: column_title.into(),
            raw_value,
        }
    }

    /// Decode the raw value
    ///
    /// Returns `Ok(None)` only when the column was cleared (no raw value).
    /// Anything else must be valid JSON; an empty string is an error.
    pub fn parsed_value(&self) -> Result<Option<Value>, DomainError> {
        let Some(raw) = self.raw_value.as_deref() else {
            return Ok(None);
        };

        serde_json::from_str(raw)
            .map(Some)
            .map_err(|source| DomainError::ValueDecode {
                raw: raw.to_string(),
                source,
            })
    }
}

/// Item name plus the changed column, fetched from the source board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSnapshot {
    pub item_name: String,
    pub column: ColumnValue,
}
