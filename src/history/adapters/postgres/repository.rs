//! `PostgreSQL` read adapter over history rows.

use super::{models::HistoryRow, schema::task_histories};
use crate::history::{
    domain::HistoryEntry,
    ports::{HistoryRepository, HistoryRepositoryError, HistoryRepositoryResult},
};
use crate::storage::postgres::{PgPool, get_conn, run_blocking};
use crate::task::domain::TaskId;
use async_trait::async_trait;
use diesel::prelude::*;

/// `PostgreSQL`-backed history repository.
#[derive(Debug, Clone)]
pub struct PostgresHistoryRepository {
    pool: PgPool,
}

impl PostgresHistoryRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HistoryRepository for PostgresHistoryRepository {
    async fn list_all(&self) -> HistoryRepositoryResult<Vec<HistoryEntry>> {
        let pool = self.pool.clone();
        run_blocking(
            move || {
                let mut conn = get_conn(&pool, HistoryRepositoryError::persistence)?;
                let rows = task_histories::table
                    .order((
                        task_histories::changed_at.desc(),
                        task_histories::id.desc(),
                    ))
                    .select(HistoryRow::as_select())
                    .load::<HistoryRow>(&mut conn)
                    .map_err(HistoryRepositoryError::persistence)?;
                Ok(rows.into_iter().map(HistoryRow::into_domain).collect())
            },
            HistoryRepositoryError::persistence,
        )
        .await
    }

    async fn list_by_task(&self, task_id: TaskId) -> HistoryRepositoryResult<Vec<HistoryEntry>> {
        let pool = self.pool.clone();
        run_blocking(
            move || {
                let mut conn = get_conn(&pool, HistoryRepositoryError::persistence)?;
                let rows = task_histories::table
                    .filter(task_histories::task_item_id.eq(task_id.value()))
                    .order((
                        task_histories::changed_at.desc(),
                        task_histories::id.desc(),
                    ))
                    .select(HistoryRow::as_select())
                    .load::<HistoryRow>(&mut conn)
                    .map_err(HistoryRepositoryError::persistence)?;
                Ok(rows.into_iter().map(HistoryRow::into_domain).collect())
            },
            HistoryRepositoryError::persistence,
        )
        .await
    }
}
