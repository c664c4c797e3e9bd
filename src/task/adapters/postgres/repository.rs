//! `PostgreSQL` repository implementation for task persistence.
//!
//! Task creation locks the owning project row `FOR UPDATE` so the cap count
//! and the insert form one serialising unit of work; task updates persist
//! the mutated fields and their history rows in the same transaction.

use super::{
    models::{NewTaskRow, TaskRow},
    schema::tasks,
};
use crate::history::adapters::postgres::{models::NewHistoryRow, schema::task_histories};
use crate::history::domain::NewHistoryEntry;
use crate::project::adapters::postgres::schema::projects;
use crate::project::domain::ProjectId;
use crate::storage::postgres::{PgPool, PooledConn, get_conn, run_blocking};
use crate::task::{
    domain::{NewTask, PROJECT_TASK_CAP, Task, TaskId, TaskStatus},
    ports::{ProjectCompletionCount, TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// `PostgreSQL`-backed task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: PgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl From<diesel::result::Error> for TaskRepositoryError {
    fn from(err: diesel::result::Error) -> Self {
        Self::persistence(err)
    }
}

/// Checks project existence without taking a lock.
fn project_exists(conn: &mut PooledConn, project_id: ProjectId) -> TaskRepositoryResult<bool> {
    let found = projects::table
        .find(project_id.value())
        .select(projects::id)
        .first::<i32>(conn)
        .optional()
        .map_err(TaskRepositoryError::persistence)?;
    Ok(found.is_some())
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn list_by_project(&self, project_id: ProjectId) -> TaskRepositoryResult<Vec<Task>> {
        let pool = self.pool.clone();
        run_blocking(
            move || {
                let mut conn = get_conn(&pool, TaskRepositoryError::persistence)?;
                if !project_exists(&mut conn, project_id)? {
                    return Err(TaskRepositoryError::ProjectNotFound(project_id));
                }
                let rows = tasks::table
                    .filter(tasks::project_id.eq(project_id.value()))
                    .order(tasks::id.asc())
                    .select(TaskRow::as_select())
                    .load::<TaskRow>(&mut conn)
                    .map_err(TaskRepositoryError::persistence)?;
                rows.into_iter().map(TaskRow::into_domain).collect()
            },
            TaskRepositoryError::persistence,
        )
        .await
    }

    async fn create(&self, new_task: &NewTask) -> TaskRepositoryResult<Task> {
        let pool = self.pool.clone();
        let project_id = new_task.project_id;
        let new_row = NewTaskRow::from_domain(new_task);
        run_blocking(
            move || {
                let mut conn = get_conn(&pool, TaskRepositoryError::persistence)?;
                conn.transaction::<_, TaskRepositoryError, _>(|tx| {
                    // Locking the project row serialises concurrent creates
                    // for the same project, making count-then-insert safe.
                    let locked = projects::table
                        .find(project_id.value())
                        .select(projects::id)
                        .for_update()
                        .first::<i32>(tx)
                        .optional()?;
                    if locked.is_none() {
                        return Err(TaskRepositoryError::ProjectNotFound(project_id));
                    }

                    let cap = i64::try_from(PROJECT_TASK_CAP).unwrap_or(i64::MAX);
                    let owned: i64 = tasks::table
                        .filter(tasks::project_id.eq(project_id.value()))
                        .count()
                        .get_result(tx)?;
                    if owned >= cap {
                        return Err(TaskRepositoryError::CapExceeded(project_id));
                    }

                    let row = diesel::insert_into(tasks::table)
                        .values(&new_row)
                        .returning(TaskRow::as_returning())
                        .get_result::<TaskRow>(tx)?;
                    row.into_domain()
                })
            },
            TaskRepositoryError::persistence,
        )
        .await
    }

    async fn find_in_project(
        &self,
        project_id: ProjectId,
        task_id: TaskId,
    ) -> TaskRepositoryResult<Option<Task>> {
        let pool = self.pool.clone();
        run_blocking(
            move || {
                let mut conn = get_conn(&pool, TaskRepositoryError::persistence)?;
                if !project_exists(&mut conn, project_id)? {
                    return Err(TaskRepositoryError::ProjectNotFound(project_id));
                }
                let row = tasks::table
                    .find(task_id.value())
                    .filter(tasks::project_id.eq(project_id.value()))
                    .select(TaskRow::as_select())
                    .first::<TaskRow>(&mut conn)
                    .optional()
                    .map_err(TaskRepositoryError::persistence)?;
                row.map(TaskRow::into_domain).transpose()
            },
            TaskRepositoryError::persistence,
        )
        .await
    }

    async fn update(&self, task: &Task, history: &[NewHistoryEntry]) -> TaskRepositoryResult<()> {
        let pool = self.pool.clone();
        let task_id = task.id();
        let title = task.title().to_owned();
        let description = task.description().map(ToOwned::to_owned);
        let due_date = task.due_date();
        let status = task.status().as_str().to_owned();
        let history_rows: Vec<NewHistoryRow> =
            history.iter().map(NewHistoryRow::from_domain).collect();
        run_blocking(
            move || {
                let mut conn = get_conn(&pool, TaskRepositoryError::persistence)?;
                conn.transaction::<_, TaskRepositoryError, _>(|tx| {
                    let updated = diesel::update(tasks::table.find(task_id.value()))
                        .set((
                            tasks::title.eq(title),
                            tasks::description.eq(description),
                            tasks::due_date.eq(due_date),
                            tasks::status.eq(status),
                        ))
                        .execute(tx)?;
                    if updated == 0 {
                        return Err(TaskRepositoryError::NotFound(task_id));
                    }

                    if !history_rows.is_empty() {
                        diesel::insert_into(task_histories::table)
                            .values(&history_rows)
                            .execute(tx)?;
                    }
                    Ok(())
                })
            },
            TaskRepositoryError::persistence,
        )
        .await
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        let pool = self.pool.clone();
        run_blocking(
            move || {
                let mut conn = get_conn(&pool, TaskRepositoryError::persistence)?;
                // Foreign keys cascade to comments and history.
                let removed = diesel::delete(tasks::table.find(id.value()))
                    .execute(&mut conn)
                    .map_err(TaskRepositoryError::persistence)?;
                if removed == 0 {
                    return Err(TaskRepositoryError::NotFound(id));
                }
                Ok(())
            },
            TaskRepositoryError::persistence,
        )
        .await
    }

    async fn completed_counts_since(
        &self,
        cutoff: DateTime<Utc>,
    ) -> TaskRepositoryResult<Vec<ProjectCompletionCount>> {
        let pool = self.pool.clone();
        run_blocking(
            move || {
                let mut conn = get_conn(&pool, TaskRepositoryError::persistence)?;
                let groups = tasks::table
                    .filter(tasks::status.eq(TaskStatus::Done.as_str()))
                    .filter(tasks::due_date.ge(Some(cutoff)))
                    .group_by(tasks::project_id)
                    .select((tasks::project_id, diesel::dsl::count_star()))
                    .order(tasks::project_id.asc())
                    .load::<(i32, i64)>(&mut conn)
                    .map_err(TaskRepositoryError::persistence)?;
                Ok(groups
                    .into_iter()
                    .map(|(project_id, completed)| ProjectCompletionCount {
                        project_id: ProjectId::new(project_id),
                        completed: u64::try_from(completed).unwrap_or_default(),
                    })
                    .collect())
            },
            TaskRepositoryError::persistence,
        )
        .await
    }
}
