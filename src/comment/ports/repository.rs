//! Repository port for comment persistence.

use crate::comment::domain::{Comment, CommentId, NewComment};
use crate::history::domain::NewHistoryEntry;
use crate::task::domain::TaskId;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for comment repository operations.
pub type CommentRepositoryResult<T> = Result<T, CommentRepositoryError>;

/// Comment persistence contract.
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Stores a comment and its paired history row in one unit of work.
    ///
    /// Nothing is persisted when the owning task is missing.
    ///
    /// # Errors
    ///
    /// Returns [`CommentRepositoryError::TaskNotFound`] when the owning
    /// task does not exist.
    async fn create(
        &self,
        comment: &NewComment,
        history: &NewHistoryEntry,
    ) -> CommentRepositoryResult<Comment>;

    /// Overwrites a comment's text.
    ///
    /// Returns the updated comment, or `None` when it does not exist.
    /// Comment edits record no history.
    ///
    /// # Errors
    ///
    /// Returns [`CommentRepositoryError::Persistence`] when the write fails.
    async fn update_text(
        &self,
        id: CommentId,
        text: &str,
    ) -> CommentRepositoryResult<Option<Comment>>;

    /// Deletes a comment.
    ///
    /// Returns `false` when the comment did not exist, `true` when it was
    /// removed.
    ///
    /// # Errors
    ///
    /// Returns [`CommentRepositoryError::Persistence`] when the delete
    /// fails.
    async fn delete(&self, id: CommentId) -> CommentRepositoryResult<bool>;
}

/// Errors returned by comment repository implementations.
#[derive(Debug, Clone, Error)]
pub enum CommentRepositoryError {
    /// The owning task was not found.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl CommentRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
