//! Service layer for project CRUD and the deletion guard.

use crate::project::{
    domain::{NewProject, Project, ProjectDomainError, ProjectId, ProjectName, ProjectWithTasks},
    ports::{ProjectRepository, ProjectRepositoryError},
};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Request payload for creating or overwriting a project.
///
/// The same shape serves both paths: updates overwrite name and description
/// unconditionally, so there is no partial-update variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateProjectRequest {
    name: String,
    description: Option<String>,
}

impl CreateProjectRequest {
    /// Creates a request with the required name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    /// Sets the project description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    fn into_validated(self) -> Result<NewProject, ProjectDomainError> {
        Ok(NewProject {
            name: ProjectName::new(self.name)?,
            description: self.description,
        })
    }
}

/// Service-level errors for project management operations.
#[derive(Debug, Error)]
pub enum ProjectManagementError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] ProjectDomainError),

    /// The project does not exist.
    #[error("project not found: {0}")]
    NotFound(ProjectId),

    /// Deletion refused: the project still owns non-terminal tasks.
    #[error("project {0} has pending tasks and cannot be deleted")]
    PendingTasks(ProjectId),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(ProjectRepositoryError),
}

impl From<ProjectRepositoryError> for ProjectManagementError {
    fn from(err: ProjectRepositoryError) -> Self {
        match err {
            ProjectRepositoryError::NotFound(id) => Self::NotFound(id),
            ProjectRepositoryError::PendingTasks(id) => Self::PendingTasks(id),
            other => Self::Repository(other),
        }
    }
}

/// Result type for project management operations.
pub type ProjectManagementResult<T> = Result<T, ProjectManagementError>;

/// Project management orchestration service.
#[derive(Clone)]
pub struct ProjectService<R>
where
    R: ProjectRepository,
{
    repository: Arc<R>,
}

impl<R> ProjectService<R>
where
    R: ProjectRepository,
{
    /// Creates a new project management service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns every project.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectManagementError::Repository`] when the lookup fails.
    pub async fn list(&self) -> ProjectManagementResult<Vec<Project>> {
        Ok(self.repository.list_all().await?)
    }

    /// Retrieves a project together with its owned tasks.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectManagementError::NotFound`] when the project does
    /// not exist.
    pub async fn get(&self, id: ProjectId) -> ProjectManagementResult<ProjectWithTasks> {
        self.repository
            .find_with_tasks(id)
            .await?
            .ok_or(ProjectManagementError::NotFound(id))
    }

    /// Creates a new project.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectManagementError::Domain`] when the name fails
    /// validation and [`ProjectManagementError::Repository`] when
    /// persistence fails.
    pub async fn create(&self, request: CreateProjectRequest) -> ProjectManagementResult<Project> {
        let new_project = request.into_validated()?;
        let project = self.repository.create(&new_project).await?;
        info!(project_id = %project.id(), "created project");
        Ok(project)
    }

    /// Overwrites a project's name and description.
    ///
    /// Project edits record no history.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectManagementError::Domain`] when the name fails
    /// validation and [`ProjectManagementError::NotFound`] when the project
    /// does not exist.
    pub async fn update(
        &self,
        id: ProjectId,
        request: CreateProjectRequest,
    ) -> ProjectManagementResult<Project> {
        let changes = request.into_validated()?;
        let updated = self.repository.update(id, &changes).await?;
        updated.ok_or(ProjectManagementError::NotFound(id))
    }

    /// Deletes a project and everything it owns.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectManagementError::NotFound`] when the project does
    /// not exist and [`ProjectManagementError::PendingTasks`] when any
    /// owned task has not reached the terminal status.
    pub async fn delete(&self, id: ProjectId) -> ProjectManagementResult<()> {
        self.repository.delete(id).await?;
        info!(project_id = %id, "deleted project");
        Ok(())
    }
}
