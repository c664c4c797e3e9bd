//! Diesel row models for comment persistence.

use super::schema::task_comments;
use crate::comment::domain::{Comment, CommentId, NewComment, PersistedCommentData};
use crate::identity::UserId;
use crate::task::domain::TaskId;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for comment records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = task_comments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CommentRow {
    /// Store-assigned comment identifier.
    pub id: i32,
    /// Owning task identifier.
    pub task_item_id: i32,
    /// Comment text.
    pub text: String,
    /// Attribution identity.
    pub created_by_user_id: i32,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl CommentRow {
    /// Converts a persisted row into the domain record.
    pub(crate) fn into_domain(self) -> Comment {
        Comment::from_persisted(PersistedCommentData {
            id: CommentId::new(self.id),
            task_id: TaskId::new(self.task_item_id),
            text: self.text,
            created_by: UserId::new(self.created_by_user_id),
            created_at: self.created_at,
        })
    }
}

/// Insert model for comment records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = task_comments)]
pub struct NewCommentRow {
    /// Owning task identifier.
    pub task_item_id: i32,
    /// Comment text.
    pub text: String,
    /// Attribution identity.
    pub created_by_user_id: i32,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl NewCommentRow {
    /// Builds an insert row from a pending domain comment.
    pub(crate) fn from_domain(comment: &NewComment) -> Self {
        Self {
            task_item_id: comment.task_id().value(),
            text: comment.text().to_owned(),
            created_by_user_id: comment.created_by().value(),
            created_at: comment.created_at(),
        }
    }
}
