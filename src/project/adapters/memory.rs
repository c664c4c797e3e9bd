//! In-memory repository for project management.

use crate::project::{
    domain::{NewProject, Project, ProjectId, ProjectWithTasks},
    ports::{ProjectRepository, ProjectRepositoryError, ProjectRepositoryResult},
};
use crate::storage::InMemoryStore;
use async_trait::async_trait;

/// In-memory project repository over a shared [`InMemoryStore`].
#[derive(Debug, Clone)]
pub struct InMemoryProjectRepository {
    store: InMemoryStore,
}

impl InMemoryProjectRepository {
    /// Creates a repository over the given store handle.
    #[must_use]
    pub const fn new(store: InMemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn list_all(&self) -> ProjectRepositoryResult<Vec<Project>> {
        let state = self
            .store
            .read()
            .map_err(ProjectRepositoryError::persistence)?;
        Ok(state.projects.values().cloned().collect())
    }

    async fn find_with_tasks(
        &self,
        id: ProjectId,
    ) -> ProjectRepositoryResult<Option<ProjectWithTasks>> {
        let state = self
            .store
            .read()
            .map_err(ProjectRepositoryError::persistence)?;
        let loaded = state.projects.get(&id.value()).map(|project| {
            let tasks = state
                .tasks
                .values()
                .filter(|task| task.project_id() == id)
                .cloned()
                .collect();
            ProjectWithTasks {
                project: project.clone(),
                tasks,
            }
        });
        Ok(loaded)
    }

    async fn create(&self, new_project: &NewProject) -> ProjectRepositoryResult<Project> {
        let mut state = self
            .store
            .write()
            .map_err(ProjectRepositoryError::persistence)?;
        let id = state.next_project_id();
        let project = Project::from_persisted(
            ProjectId::new(id),
            new_project.name.clone(),
            new_project.description.clone(),
        );
        state.projects.insert(id, project.clone());
        Ok(project)
    }

    async fn update(
        &self,
        id: ProjectId,
        changes: &NewProject,
    ) -> ProjectRepositoryResult<Option<Project>> {
        let mut state = self
            .store
            .write()
            .map_err(ProjectRepositoryError::persistence)?;
        if !state.projects.contains_key(&id.value()) {
            return Ok(None);
        }
        let project =
            Project::from_persisted(id, changes.name.clone(), changes.description.clone());
        state.projects.insert(id.value(), project.clone());
        Ok(Some(project))
    }

    async fn delete(&self, id: ProjectId) -> ProjectRepositoryResult<()> {
        // The write lock spans the guard check and the removal, mirroring
        // the row-locking transaction in the PostgreSQL adapter.
        let mut state = self
            .store
            .write()
            .map_err(ProjectRepositoryError::persistence)?;
        if !state.projects.contains_key(&id.value()) {
            return Err(ProjectRepositoryError::NotFound(id));
        }
        let has_pending = state
            .tasks
            .values()
            .any(|task| task.project_id() == id && !task.status().is_terminal());
        if has_pending {
            return Err(ProjectRepositoryError::PendingTasks(id));
        }
        state.remove_project_cascading(id.value());
        Ok(())
    }
}
