//! Read-only repository port over history rows.
//!
//! History rows are written by the task and comment repositories as part of
//! their own transactions; this port only reads them back.

use crate::history::domain::HistoryEntry;
use crate::task::domain::TaskId;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for history repository operations.
pub type HistoryRepositoryResult<T> = Result<T, HistoryRepositoryError>;

/// History query contract.
#[async_trait]
pub trait HistoryRepository: Send + Sync {
    /// Returns every history row, most recent change first.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryRepositoryError::Persistence`] when the query fails.
    async fn list_all(&self) -> HistoryRepositoryResult<Vec<HistoryEntry>>;

    /// Returns one task's history rows, most recent change first.
    ///
    /// A task with no history (or an unknown task identifier) yields an
    /// empty vector, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryRepositoryError::Persistence`] when the query fails.
    async fn list_by_task(&self, task_id: TaskId) -> HistoryRepositoryResult<Vec<HistoryEntry>>;
}

/// Errors returned by history repository implementations.
#[derive(Debug, Clone, Error)]
pub enum HistoryRepositoryError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl HistoryRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
