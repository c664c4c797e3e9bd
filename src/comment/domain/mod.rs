//! Domain model for task comments.

mod comment;
mod ids;

pub use comment::{Comment, NewComment, PersistedCommentData};
pub use ids::CommentId;
