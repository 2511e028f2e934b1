//! Value normalization and clearing decision
//!
//! monday.com has no single "clear" operation that works for every column
//! type. Scalar-backed columns are cleared with `change_simple_column_value`
//! and an empty string, structured ones (e.g. timelines) need
//! `change_column_value` with an empty JSON object.

use crate::entities::ColumnValue;
use crate::error::DomainError;

/// Column title that needs the structured clear by default
pub const DEFAULT_COMPOSITE_CLEAR_TITLE: &str = "Timeline";

/// Titles of target columns cleared with an empty JSON object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositeClearColumns(Vec<String>);

impl CompositeClearColumns {
    pub fn new<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(titles.into_iter().map(Into::into).collect())
    }

    /// Parse a comma-separated list, dropping blank entries
    pub fn parse_list(list: &str) -> Self {
        Self::new(
            list.split(',')
                .map(str::trim)
                .filter(|title| !title.is_empty()),
        )
    }

    /// Exact, case-sensitive title match
    pub fn contains(&self, title: &str) -> bool {
        self.0.iter().any(|t| t == title)
    }

    pub fn titles(&self) -> &[String] {
        &self.0
    }
}

impl Default for CompositeClearColumns {
    fn default() -> Self {
        Self::new([DEFAULT_COMPOSITE_CLEAR_TITLE])
    }
}

/// The single mutation used to mirror a column value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnWrite {
    /// `change_column_value` with the re-encoded source value
    Set { value: String },
    /// `change_simple_column_value` with `""`
    ClearSimple,
    /// `change_column_value` with `"{}"`
    ClearComposite,
}

impl ColumnWrite {
    pub const CLEAR_SIMPLE_VALUE: &'static str = "";
    pub const CLEAR_COMPOSITE_VALUE: &'static str = "{}";

    /// Value string sent with the mutation
    pub fn mutation_value(&self) -> &str {
        match self {
            Self::Set { value } => value,
            Self::ClearSimple => Self::CLEAR_SIMPLE_VALUE,
            Self::ClearComposite => Self::CLEAR_COMPOSITE_VALUE,
        }
    }

    /// Whether this write uses `change_simple_column_value`
    pub fn is_simple(&self) -> bool {
        matches!(self, Self::ClearSimple)
    }

    pub fn is_clear(&self) -> bool {
        !matches!(self, Self::Set { .. })
    }

    /// Short label for logs and responses
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Set { .. } => "set",
            Self::ClearSimple => "clear_simple",
            Self::ClearComposite => "clear_composite",
        }
    }
}

/// Decide how to mirror `value` onto the target column titled
/// `target_column_title`
///
/// A value that fails to decode is an error; no default is guessed. The
/// value is re-encoded from a `serde_json::Value`, so numbers outside the
/// 64-bit integer range and exponent forms come back as `f64` text.
pub fn plan_column_write(
    value: &ColumnValue,
    target_column_title: &str,
    composite: &CompositeClearColumns,
) -> Result<ColumnWrite, DomainError> {
    match value.parsed_value()? {
        Some(parsed) => serde_json::to_string(&parsed)
            .map(|value| ColumnWrite::Set { value })
            .map_err(DomainError::ValueEncode),
        None if composite.contains(target_column_title) => Ok(ColumnWrite::ClearComposite),
        None => Ok(ColumnWrite::ClearSimple),
    }
}
