//! Domain entities - ephemeral views of monday.com boards and Slack messages

mod board;
mod column;
mod comment;
mod notification;

pub use board::{TargetBoard, TargetColumn, TargetRecord};
pub use column::{ColumnValue, SourceSnapshot};
pub use comment::CommentMessage;
pub use notification::ChangeNotification;
