//! Service layer over the history audit trail.

use crate::history::{
    domain::HistoryEntry,
    ports::{HistoryRepository, HistoryRepositoryError},
};
use crate::task::domain::TaskId;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for history queries.
#[derive(Debug, Error)]
pub enum HistoryAuditError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] HistoryRepositoryError),
}

/// Result type for history query operations.
pub type HistoryAuditResult<T> = Result<T, HistoryAuditError>;

/// History audit trail query service.
#[derive(Clone)]
pub struct HistoryService<R>
where
    R: HistoryRepository,
{
    repository: Arc<R>,
}

impl<R> HistoryService<R>
where
    R: HistoryRepository,
{
    /// Creates a new history query service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns every recorded change, most recent first.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryAuditError::Repository`] when the query fails.
    pub async fn list_all(&self) -> HistoryAuditResult<Vec<HistoryEntry>> {
        Ok(self.repository.list_all().await?)
    }

    /// Returns one task's recorded changes, most recent first.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryAuditError::Repository`] when the query fails.
    pub async fn list_by_task(&self, task_id: TaskId) -> HistoryAuditResult<Vec<HistoryEntry>> {
        Ok(self.repository.list_by_task(task_id).await?)
    }
}
