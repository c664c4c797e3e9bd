//! In-memory read adapter over history rows.

use crate::history::{
    domain::HistoryEntry,
    ports::{HistoryRepository, HistoryRepositoryError, HistoryRepositoryResult},
};
use crate::storage::InMemoryStore;
use crate::task::domain::TaskId;
use async_trait::async_trait;

/// In-memory history repository over a shared [`InMemoryStore`].
#[derive(Debug, Clone)]
pub struct InMemoryHistoryRepository {
    store: InMemoryStore,
}

impl InMemoryHistoryRepository {
    /// Creates a repository over the given store handle.
    #[must_use]
    pub const fn new(store: InMemoryStore) -> Self {
        Self { store }
    }

    fn collect_sorted(
        &self,
        filter: impl Fn(&HistoryEntry) -> bool,
    ) -> HistoryRepositoryResult<Vec<HistoryEntry>> {
        let state = self
            .store
            .read()
            .map_err(HistoryRepositoryError::persistence)?;
        let mut rows: Vec<HistoryEntry> = state
            .history
            .values()
            .filter(|entry| filter(entry))
            .cloned()
            .collect();
        // Most recent change first; row id breaks ties for rows written in
        // the same unit of work.
        rows.sort_by(|a, b| {
            b.changed_at()
                .cmp(&a.changed_at())
                .then_with(|| b.id().cmp(&a.id()))
        });
        Ok(rows)
    }
}

#[async_trait]
impl HistoryRepository for InMemoryHistoryRepository {
    async fn list_all(&self) -> HistoryRepositoryResult<Vec<HistoryEntry>> {
        self.collect_sorted(|_| true)
    }

    async fn list_by_task(&self, task_id: TaskId) -> HistoryRepositoryResult<Vec<HistoryEntry>> {
        self.collect_sorted(|entry| entry.task_id() == task_id)
    }
}
