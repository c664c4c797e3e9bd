//! Service layer for authoring comments on tasks.

use crate::comment::{
    domain::{Comment, CommentId, NewComment},
    ports::{CommentRepository, CommentRepositoryError},
};
use crate::history::domain::{HistoryField, NewHistoryEntry};
use crate::identity::Caller;
use crate::task::domain::TaskId;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Service-level errors for comment authoring operations.
#[derive(Debug, Error)]
pub enum CommentAuthoringError {
    /// The owning task does not exist.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(CommentRepositoryError),
}

impl From<CommentRepositoryError> for CommentAuthoringError {
    fn from(err: CommentRepositoryError) -> Self {
        match err {
            CommentRepositoryError::TaskNotFound(id) => Self::TaskNotFound(id),
            other => Self::Repository(other),
        }
    }
}

/// Result type for comment authoring operations.
pub type CommentAuthoringResult<T> = Result<T, CommentAuthoringError>;

/// Comment authoring orchestration service.
#[derive(Clone)]
pub struct CommentService<R, C>
where
    R: CommentRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> CommentService<R, C>
where
    R: CommentRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new comment authoring service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates a comment on a task together with its paired history row.
    ///
    /// Nothing is persisted when the task is missing.
    ///
    /// # Errors
    ///
    /// Returns [`CommentAuthoringError::TaskNotFound`] when the task does
    /// not exist.
    pub async fn create(
        &self,
        task_id: TaskId,
        text: impl Into<String> + Send,
        caller: &Caller,
    ) -> CommentAuthoringResult<Comment> {
        let body = text.into();
        let comment = NewComment::compose(task_id, body.clone(), caller.user_id(), &*self.clock);
        let history = NewHistoryEntry::record(
            task_id,
            HistoryField::Comment,
            "",
            body,
            caller.user_id(),
            &*self.clock,
        );
        let created = self.repository.create(&comment, &history).await?;
        info!(comment_id = %created.id(), task_id = %task_id, "created comment");
        Ok(created)
    }

    /// Overwrites a comment's text.
    ///
    /// Returns `None` when the comment does not exist. Comment edits record
    /// no history.
    ///
    /// # Errors
    ///
    /// Returns [`CommentAuthoringError::Repository`] when persistence
    /// fails.
    pub async fn update(
        &self,
        id: CommentId,
        text: impl Into<String> + Send,
    ) -> CommentAuthoringResult<Option<Comment>> {
        Ok(self.repository.update_text(id, &text.into()).await?)
    }

    /// Deletes a comment, reporting whether it existed.
    ///
    /// # Errors
    ///
    /// Returns [`CommentAuthoringError::Repository`] when persistence
    /// fails.
    pub async fn delete(&self, id: CommentId) -> CommentAuthoringResult<bool> {
        Ok(self.repository.delete(id).await?)
    }
}
