//! Repository port for project persistence and the deletion guard.

use crate::project::domain::{NewProject, Project, ProjectId, ProjectWithTasks};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for project repository operations.
pub type ProjectRepositoryResult<T> = Result<T, ProjectRepositoryError>;

/// Project persistence contract.
///
/// Implementations must make `delete` atomic: the pending-task check and the
/// removal happen under one serialising unit of work (a transaction with the
/// project row locked, or an equivalent store-wide lock), so a concurrently
/// created task can never slip past the guard.
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Returns every project.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectRepositoryError::Persistence`] when the query fails.
    async fn list_all(&self) -> ProjectRepositoryResult<Vec<Project>>;

    /// Finds a project together with its owned tasks.
    ///
    /// Returns `None` when the project does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectRepositoryError::Persistence`] when the query fails.
    async fn find_with_tasks(
        &self,
        id: ProjectId,
    ) -> ProjectRepositoryResult<Option<ProjectWithTasks>>;

    /// Stores a new project and returns it with its assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectRepositoryError::Persistence`] when the insert fails.
    async fn create(&self, new_project: &NewProject) -> ProjectRepositoryResult<Project>;

    /// Overwrites name and description unconditionally.
    ///
    /// Returns the updated record, or `None` when the project does not
    /// exist. Project edits record no history.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectRepositoryError::Persistence`] when the write fails.
    async fn update(
        &self,
        id: ProjectId,
        changes: &NewProject,
    ) -> ProjectRepositoryResult<Option<Project>>;

    /// Deletes a project, cascading to its tasks, comments, and history.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectRepositoryError::NotFound`] when the project does
    /// not exist and [`ProjectRepositoryError::PendingTasks`] when any owned
    /// task is not in the terminal status; in both cases nothing is removed.
    async fn delete(&self, id: ProjectId) -> ProjectRepositoryResult<()>;
}

/// Errors returned by project repository implementations.
#[derive(Debug, Clone, Error)]
pub enum ProjectRepositoryError {
    /// The project was not found.
    #[error("project not found: {0}")]
    NotFound(ProjectId),

    /// Deletion refused: the project still owns non-terminal tasks.
    #[error("project {0} has pending tasks and cannot be deleted")]
    PendingTasks(ProjectId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ProjectRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
