//! Sync rules shared by both relays
//!
//! - [`normalize`]: decide which mutation mirrors a source column value
//! - [`resolve`]: map names and titles onto target board ids
//! - [`extract`]: pull the item name and update body out of a Slack message

pub mod extract;
pub mod normalize;
pub mod resolve;

pub use extract::{extract_comment, normalize_markup, MessageExtractor};
pub use normalize::{plan_column_write, ColumnWrite, CompositeClearColumns};
pub use resolve::{resolve_column, resolve_record};
