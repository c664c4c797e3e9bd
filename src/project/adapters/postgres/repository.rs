//! `PostgreSQL` repository implementation for project persistence.
//!
//! The deletion guard runs in one transaction with the project row locked
//! `FOR UPDATE`, so a task created concurrently can never slip past the
//! pending-task check.

use super::{
    models::{NewProjectRow, ProjectRow},
    schema::projects,
};
use crate::project::{
    domain::{NewProject, Project, ProjectId, ProjectWithTasks},
    ports::{ProjectRepository, ProjectRepositoryError, ProjectRepositoryResult},
};
use crate::storage::postgres::{PgPool, get_conn, run_blocking};
use crate::task::adapters::postgres::{models::TaskRow, schema::tasks};
use crate::task::domain::TaskStatus;
use async_trait::async_trait;
use diesel::prelude::*;

/// `PostgreSQL`-backed project repository.
#[derive(Debug, Clone)]
pub struct PostgresProjectRepository {
    pool: PgPool,
}

impl PostgresProjectRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl From<diesel::result::Error> for ProjectRepositoryError {
    fn from(err: diesel::result::Error) -> Self {
        Self::persistence(err)
    }
}

#[async_trait]
impl ProjectRepository for PostgresProjectRepository {
    async fn list_all(&self) -> ProjectRepositoryResult<Vec<Project>> {
        let pool = self.pool.clone();
        run_blocking(
            move || {
                let mut conn = get_conn(&pool, ProjectRepositoryError::persistence)?;
                let rows = projects::table
                    .order(projects::id.asc())
                    .select(ProjectRow::as_select())
                    .load::<ProjectRow>(&mut conn)
                    .map_err(ProjectRepositoryError::persistence)?;
                rows.into_iter().map(ProjectRow::into_domain).collect()
            },
            ProjectRepositoryError::persistence,
        )
        .await
    }

    async fn find_with_tasks(
        &self,
        id: ProjectId,
    ) -> ProjectRepositoryResult<Option<ProjectWithTasks>> {
        let pool = self.pool.clone();
        run_blocking(
            move || {
                let mut conn = get_conn(&pool, ProjectRepositoryError::persistence)?;
                let row = projects::table
                    .find(id.value())
                    .select(ProjectRow::as_select())
                    .first::<ProjectRow>(&mut conn)
                    .optional()
                    .map_err(ProjectRepositoryError::persistence)?;
                let Some(project_row) = row else {
                    return Ok(None);
                };

                let task_rows = tasks::table
                    .filter(tasks::project_id.eq(id.value()))
                    .order(tasks::id.asc())
                    .select(TaskRow::as_select())
                    .load::<TaskRow>(&mut conn)
                    .map_err(ProjectRepositoryError::persistence)?;
                let owned_tasks = task_rows
                    .into_iter()
                    .map(|task_row| {
                        task_row
                            .into_domain()
                            .map_err(ProjectRepositoryError::persistence)
                    })
                    .collect::<ProjectRepositoryResult<Vec<_>>>()?;

                Ok(Some(ProjectWithTasks {
                    project: project_row.into_domain()?,
                    tasks: owned_tasks,
                }))
            },
            ProjectRepositoryError::persistence,
        )
        .await
    }

    async fn create(&self, new_project: &NewProject) -> ProjectRepositoryResult<Project> {
        let pool = self.pool.clone();
        let new_row = NewProjectRow {
            name: new_project.name.as_str().to_owned(),
            description: new_project.description.clone(),
        };
        run_blocking(
            move || {
                let mut conn = get_conn(&pool, ProjectRepositoryError::persistence)?;
                let row = diesel::insert_into(projects::table)
                    .values(&new_row)
                    .returning(ProjectRow::as_returning())
                    .get_result::<ProjectRow>(&mut conn)
                    .map_err(ProjectRepositoryError::persistence)?;
                row.into_domain()
            },
            ProjectRepositoryError::persistence,
        )
        .await
    }

    async fn update(
        &self,
        id: ProjectId,
        changes: &NewProject,
    ) -> ProjectRepositoryResult<Option<Project>> {
        let pool = self.pool.clone();
        let name = changes.name.as_str().to_owned();
        let description = changes.description.clone();
        run_blocking(
            move || {
                let mut conn = get_conn(&pool, ProjectRepositoryError::persistence)?;
                let row = diesel::update(projects::table.find(id.value()))
                    .set((
                        projects::name.eq(name),
                        projects::description.eq(description),
                    ))
                    .returning(ProjectRow::as_returning())
                    .get_result::<ProjectRow>(&mut conn)
                    .optional()
                    .map_err(ProjectRepositoryError::persistence)?;
                row.map(ProjectRow::into_domain).transpose()
            },
            ProjectRepositoryError::persistence,
        )
        .await
    }

    async fn delete(&self, id: ProjectId) -> ProjectRepositoryResult<()> {
        let pool = self.pool.clone();
        run_blocking(
            move || {
                let mut conn = get_conn(&pool, ProjectRepositoryError::persistence)?;
                conn.transaction::<_, ProjectRepositoryError, _>(|tx| {
                    let locked = projects::table
                        .find(id.value())
                        .select(projects::id)
                        .for_update()
                        .first::<i32>(tx)
                        .optional()?;
                    if locked.is_none() {
                        return Err(ProjectRepositoryError::NotFound(id));
                    }

                    let pending: i64 = tasks::table
                        .filter(tasks::project_id.eq(id.value()))
                        .filter(tasks::status.ne(TaskStatus::Done.as_str()))
                        .count()
                        .get_result(tx)?;
                    if pending > 0 {
                        return Err(ProjectRepositoryError::PendingTasks(id));
                    }

                    // Foreign keys cascade to tasks, comments, and history.
                    diesel::delete(projects::table.find(id.value())).execute(tx)?;
                    Ok(())
                })
            },
            ProjectRepositoryError::persistence,
        )
        .await
    }
}
