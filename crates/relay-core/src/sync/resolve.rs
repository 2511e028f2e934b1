//! Cross-board entity resolution
//!
//! Exact, case-sensitive, first match wins over the order the API returned.

use crate::entities::{TargetBoard, TargetColumn, TargetRecord};

/// Find the first item whose name equals `name`
pub fn resolve_record<'a>(items: &'a [TargetRecord], name: &str) -> Option<&'a TargetRecord> {
    items.iter().find(|item| item.name == name)
}

/// Find the first column whose title equals `title`
pub fn resolve_column<'a>(columns: &'a [TargetColumn], title: &str) -> Option<&'a TargetColumn> {
    columns.iter().find(|column| column.title == title)
}

impl TargetBoard {
    pub fn resolve_record(&self, name: &str) -> Option<&TargetRecord> {
        resolve_record(&self.items, name)
    }

    pub fn resolve_column(&self, title: &str) -> Option<&TargetColumn> {
        resolve_column(&self.columns, title)
    }
}
