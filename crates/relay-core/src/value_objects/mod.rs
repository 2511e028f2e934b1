//! Value objects - immutable identifiers used across both relays

mod ids;

pub use ids::{BoardId, ColumnId, IdParseError, ItemId};
