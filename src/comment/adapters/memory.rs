//! In-memory repository for task comments.

use crate::comment::{
    domain::{Comment, CommentId, NewComment, PersistedCommentData},
    ports::{CommentRepository, CommentRepositoryError, CommentRepositoryResult},
};
use crate::history::domain::NewHistoryEntry;
use crate::storage::InMemoryStore;
use async_trait::async_trait;

/// In-memory comment repository over a shared [`InMemoryStore`].
#[derive(Debug, Clone)]
pub struct InMemoryCommentRepository {
    store: InMemoryStore,
}

impl InMemoryCommentRepository {
    /// Creates a repository over the given store handle.
    #[must_use]
    pub const fn new(store: InMemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn create(
        &self,
        comment: &NewComment,
        history: &NewHistoryEntry,
    ) -> CommentRepositoryResult<Comment> {
        let mut state = self
            .store
            .write()
            .map_err(CommentRepositoryError::persistence)?;
        if !state.tasks.contains_key(&comment.task_id().value()) {
            return Err(CommentRepositoryError::TaskNotFound(comment.task_id()));
        }

        let id = state.next_comment_id();
        let persisted = Comment::from_persisted(PersistedCommentData {
            id: CommentId::new(id),
            task_id: comment.task_id(),
            text: comment.text().to_owned(),
            created_by: comment.created_by(),
            created_at: comment.created_at(),
        });
        state.comments.insert(id, persisted.clone());
        state.append_history(history);
        Ok(persisted)
    }

    async fn update_text(
        &self,
        id: CommentId,
        text: &str,
    ) -> CommentRepositoryResult<Option<Comment>> {
        let mut state = self
            .store
            .write()
            .map_err(CommentRepositoryError::persistence)?;
        let updated = state.comments.get_mut(&id.value()).map(|comment| {
            comment.edit_text(text);
            comment.clone()
        });
        Ok(updated)
    }

    async fn delete(&self, id: CommentId) -> CommentRepositoryResult<bool> {
        let mut state = self
            .store
            .write()
            .map_err(CommentRepositoryError::persistence)?;
        Ok(state.comments.remove(&id.value()).is_some())
    }
}
