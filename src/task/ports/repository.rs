//! Repository port for task persistence, scoped lookup, and the cap guard.

use crate::history::domain::NewHistoryEntry;
use crate::project::domain::ProjectId;
use crate::task::domain::{NewTask, PROJECT_TASK_CAP, Task, TaskId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Completed-task count for one project, used by the performance report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectCompletionCount {
    /// The grouping project.
    pub project_id: ProjectId,
    /// Tasks in the terminal status with a due date inside the window.
    pub completed: u64,
}

/// Task persistence contract.
///
/// Implementations must make `create` atomic: the project existence check,
/// the cap count, and the insert happen under one serialising unit of work
/// (the project row locked `FOR UPDATE`, or an equivalent store-wide lock),
/// so two concurrent creates can never push a project past the cap.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Returns every task owned by the given project.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::ProjectNotFound`] when the project
    /// does not exist; a project without tasks yields an empty vector, a
    /// missing project never does.
    async fn list_by_project(&self, project_id: ProjectId) -> TaskRepositoryResult<Vec<Task>>;

    /// Stores a new task and returns it with its assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::ProjectNotFound`] when the owning
    /// project is missing and [`TaskRepositoryError::CapExceeded`] when the
    /// project already holds [`PROJECT_TASK_CAP`] tasks.
    async fn create(&self, new_task: &NewTask) -> TaskRepositoryResult<Task>;

    /// Finds a task within the given project.
    ///
    /// Returns `None` when the task does not exist **or** belongs to a
    /// different project; task identifiers are only honoured under their
    /// owning project.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::ProjectNotFound`] when the project
    /// itself is missing.
    async fn find_in_project(
        &self,
        project_id: ProjectId,
        task_id: TaskId,
    ) -> TaskRepositoryResult<Option<Task>>;

    /// Persists the mutable fields of an updated task together with its
    /// history rows, in one unit of work.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task no longer
    /// exists.
    async fn update(&self, task: &Task, history: &[NewHistoryEntry]) -> TaskRepositoryResult<()>;

    /// Deletes a task, cascading to its comments and history.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not
    /// exist.
    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()>;

    /// Counts terminal-status tasks per project with a due date at or after
    /// the cutoff, ordered by project identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the query fails.
    async fn completed_counts_since(
        &self,
        cutoff: DateTime<Utc>,
    ) -> TaskRepositoryResult<Vec<ProjectCompletionCount>>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// The owning project was not found.
    #[error("project not found: {0}")]
    ProjectNotFound(ProjectId),

    /// The project already holds the maximum number of tasks.
    #[error("project {0} already holds the maximum of {PROJECT_TASK_CAP} tasks")]
    CapExceeded(ProjectId),

    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
