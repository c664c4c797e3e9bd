//! Comment types: pending comments and persisted records.

use super::CommentId;
use crate::identity::UserId;
use crate::task::domain::TaskId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A comment awaiting persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    task_id: TaskId,
    text: String,
    created_by: UserId,
    created_at: DateTime<Utc>,
}

impl NewComment {
    /// Creates a comment against a task at the current clock time.
    #[must_use]
    pub fn compose(
        task_id: TaskId,
        text: impl Into<String>,
        created_by: UserId,
        clock: &impl Clock,
    ) -> Self {
        Self {
            task_id,
            text: text.into(),
            created_by,
            created_at: clock.utc(),
        }
    }

    /// Returns the owning task identifier.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Returns the comment text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the attribution identity.
    #[must_use]
    pub const fn created_by(&self) -> UserId {
        self.created_by
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Parameter object for reconstructing a persisted comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedCommentData {
    /// Store-assigned comment identifier.
    pub id: CommentId,
    /// Owning task identifier.
    pub task_id: TaskId,
    /// Persisted comment text.
    pub text: String,
    /// Persisted attribution identity.
    pub created_by: UserId,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// A persisted comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    id: CommentId,
    task_id: TaskId,
    text: String,
    created_by: UserId,
    created_at: DateTime<Utc>,
}

impl Comment {
    /// Reconstructs a comment from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedCommentData) -> Self {
        Self {
            id: data.id,
            task_id: data.task_id,
            text: data.text,
            created_by: data.created_by,
            created_at: data.created_at,
        }
    }

    /// Returns the comment identifier.
    #[must_use]
    pub const fn id(&self) -> CommentId {
        self.id
    }

    /// Returns the owning task identifier.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Returns the comment text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replaces the comment text.
    ///
    /// Comment edits record no history; only creation does.
    pub fn edit_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Returns the attribution identity.
    #[must_use]
    pub const fn created_by(&self) -> UserId {
        self.created_by
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
