//! Service layer for task creation, update with history, and deletion.

use crate::history::domain::NewHistoryEntry;
use crate::identity::Caller;
use crate::project::domain::ProjectId;
use crate::task::{
    domain::{NewTask, Task, TaskDomainError, TaskId, TaskPriority, TaskStatus, TaskUpdate},
    ports::{TaskRepository, TaskRepositoryError},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Request payload for creating a task under a project.
///
/// Status and priority arrive as free text from the boundary and are parsed
/// against the canonical label sets; the due date is mandatory on this path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: Option<String>,
    due_date: DateTime<Utc>,
    status: String,
    priority: String,
}

impl CreateTaskRequest {
    /// Creates a request with the required fields.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        due_date: DateTime<Utc>,
        status: impl Into<String>,
        priority: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: None,
            due_date,
            status: status.into(),
            priority: priority.into(),
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Request payload for updating a task's mutable fields.
///
/// Priority is deliberately absent: it is immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    title: String,
    description: Option<String>,
    due_date: DateTime<Utc>,
    status: String,
}

impl UpdateTaskRequest {
    /// Creates a request with the required fields.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        due_date: DateTime<Utc>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: None,
            due_date,
            status: status.into(),
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Service-level errors for task workflow operations.
#[derive(Debug, Error)]
pub enum TaskWorkflowError {
    /// Status or priority parsing failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),

    /// The owning project does not exist.
    #[error("project not found: {0}")]
    ProjectNotFound(ProjectId),

    /// The task does not exist under the addressed project.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// The project already holds the maximum number of tasks.
    #[error(transparent)]
    CapExceeded(TaskRepositoryError),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(TaskRepositoryError),
}

impl From<TaskRepositoryError> for TaskWorkflowError {
    fn from(err: TaskRepositoryError) -> Self {
        match err {
            TaskRepositoryError::ProjectNotFound(id) => Self::ProjectNotFound(id),
            TaskRepositoryError::NotFound(id) => Self::NotFound(id),
            TaskRepositoryError::CapExceeded(_) => Self::CapExceeded(err),
            other => Self::Repository(other),
        }
    }
}

/// Result type for task workflow operations.
pub type TaskWorkflowResult<T> = Result<T, TaskWorkflowError>;

/// Task workflow orchestration service.
#[derive(Clone)]
pub struct TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task workflow service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Returns every task owned by the given project.
    ///
    /// A project without tasks yields an empty vector; a missing project is
    /// an error, never an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`TaskWorkflowError::ProjectNotFound`] when the project does
    /// not exist.
    pub async fn list_by_project(&self, project_id: ProjectId) -> TaskWorkflowResult<Vec<Task>> {
        Ok(self.repository.list_by_project(project_id).await?)
    }

    /// Creates a task under a project.
    ///
    /// # Errors
    ///
    /// Returns [`TaskWorkflowError::Domain`] when the status or priority
    /// label is unknown, [`TaskWorkflowError::ProjectNotFound`] when the
    /// project is missing, and [`TaskWorkflowError::CapExceeded`] when the
    /// project already holds the maximum number of tasks.
    pub async fn create(
        &self,
        project_id: ProjectId,
        request: CreateTaskRequest,
    ) -> TaskWorkflowResult<Task> {
        let status = TaskStatus::try_from(request.status.as_str())?;
        let priority = TaskPriority::try_from(request.priority.as_str())?;
        let new_task = NewTask {
            project_id,
            title: request.title,
            description: request.description,
            due_date: request.due_date,
            status,
            priority,
        };
        let task = self.repository.create(&new_task).await?;
        info!(task_id = %task.id(), project_id = %project_id, "created task");
        Ok(task)
    }

    /// Updates a task's mutable fields, recording one history row per field
    /// whose value changed.
    ///
    /// The task must belong to the addressed project; a task id that exists
    /// under a different project is treated as missing.
    ///
    /// # Errors
    ///
    /// Returns [`TaskWorkflowError::Domain`] when the status label is
    /// unknown, [`TaskWorkflowError::ProjectNotFound`] when the project is
    /// missing, and [`TaskWorkflowError::NotFound`] when the task is not
    /// owned by that project.
    pub async fn update(
        &self,
        project_id: ProjectId,
        task_id: TaskId,
        request: UpdateTaskRequest,
        caller: &Caller,
    ) -> TaskWorkflowResult<Task> {
        let status = TaskStatus::try_from(request.status.as_str())?;
        let mut task = self
            .repository
            .find_in_project(project_id, task_id)
            .await?
            .ok_or(TaskWorkflowError::NotFound(task_id))?;

        let changes = task.apply_update(TaskUpdate {
            title: request.title,
            description: request.description,
            due_date: request.due_date,
            status,
        });
        let history: Vec<NewHistoryEntry> = changes
            .into_iter()
            .map(|change| {
                NewHistoryEntry::record(
                    task.id(),
                    change.field,
                    change.old_value,
                    change.new_value,
                    caller.user_id(),
                    &*self.clock,
                )
            })
            .collect();

        self.repository.update(&task, &history).await?;
        debug!(
            task_id = %task.id(),
            changed_fields = history.len(),
            "updated task"
        );
        Ok(task)
    }

    /// Deletes a task, cascading to its comments and history.
    ///
    /// # Errors
    ///
    /// Returns [`TaskWorkflowError::NotFound`] when the task does not
    /// exist.
    pub async fn delete(&self, id: TaskId) -> TaskWorkflowResult<()> {
        self.repository.delete(id).await?;
        info!(task_id = %id, "deleted task");
        Ok(())
    }
}
