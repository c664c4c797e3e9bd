//! In-memory repository for project-scoped tasks.

use crate::history::domain::NewHistoryEntry;
use crate::project::domain::ProjectId;
use crate::storage::InMemoryStore;
use crate::task::{
    domain::{NewTask, PROJECT_TASK_CAP, PersistedTaskData, Task, TaskId},
    ports::{ProjectCompletionCount, TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// In-memory task repository over a shared [`InMemoryStore`].
#[derive(Debug, Clone)]
pub struct InMemoryTaskRepository {
    store: InMemoryStore,
}

impl InMemoryTaskRepository {
    /// Creates a repository over the given store handle.
    #[must_use]
    pub const fn new(store: InMemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn list_by_project(&self, project_id: ProjectId) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.store.read().map_err(TaskRepositoryError::persistence)?;
        if !state.projects.contains_key(&project_id.value()) {
            return Err(TaskRepositoryError::ProjectNotFound(project_id));
        }
        Ok(state
            .tasks
            .values()
            .filter(|task| task.project_id() == project_id)
            .cloned()
            .collect())
    }

    async fn create(&self, new_task: &NewTask) -> TaskRepositoryResult<Task> {
        // The write lock spans the existence check, the cap count, and the
        // insert, mirroring the row-locking transaction in the PostgreSQL
        // adapter.
        let mut state = self
            .store
            .write()
            .map_err(TaskRepositoryError::persistence)?;
        if !state.projects.contains_key(&new_task.project_id.value()) {
            return Err(TaskRepositoryError::ProjectNotFound(new_task.project_id));
        }
        let owned = state
            .tasks
            .values()
            .filter(|task| task.project_id() == new_task.project_id)
            .count();
        if owned >= PROJECT_TASK_CAP {
            return Err(TaskRepositoryError::CapExceeded(new_task.project_id));
        }

        let id = state.next_task_id();
        let task = Task::from_persisted(PersistedTaskData {
            id: TaskId::new(id),
            project_id: new_task.project_id,
            title: new_task.title.clone(),
            description: new_task.description.clone(),
            due_date: Some(new_task.due_date),
            status: new_task.status,
            priority: new_task.priority,
        });
        state.tasks.insert(id, task.clone());
        Ok(task)
    }

    async fn find_in_project(
        &self,
        project_id: ProjectId,
        task_id: TaskId,
    ) -> TaskRepositoryResult<Option<Task>> {
        let state = self.store.read().map_err(TaskRepositoryError::persistence)?;
        if !state.projects.contains_key(&project_id.value()) {
            return Err(TaskRepositoryError::ProjectNotFound(project_id));
        }
        let task = state
            .tasks
            .get(&task_id.value())
            .filter(|candidate| candidate.project_id() == project_id)
            .cloned();
        Ok(task)
    }

    async fn update(&self, task: &Task, history: &[NewHistoryEntry]) -> TaskRepositoryResult<()> {
        let mut state = self
            .store
            .write()
            .map_err(TaskRepositoryError::persistence)?;
        if !state.tasks.contains_key(&task.id().value()) {
            return Err(TaskRepositoryError::NotFound(task.id()));
        }
        state.tasks.insert(task.id().value(), task.clone());
        for entry in history {
            state.append_history(entry);
        }
        Ok(())
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        let mut state = self
            .store
            .write()
            .map_err(TaskRepositoryError::persistence)?;
        if !state.tasks.contains_key(&id.value()) {
            return Err(TaskRepositoryError::NotFound(id));
        }
        state.remove_task_cascading(id.value());
        Ok(())
    }

    async fn completed_counts_since(
        &self,
        cutoff: DateTime<Utc>,
    ) -> TaskRepositoryResult<Vec<ProjectCompletionCount>> {
        let state = self.store.read().map_err(TaskRepositoryError::persistence)?;
        let mut groups: BTreeMap<ProjectId, u64> = BTreeMap::new();
        let completed_in_window = state.tasks.values().filter(|task| {
            task.status().is_terminal() && task.due_date().is_some_and(|due| due >= cutoff)
        });
        for task in completed_in_window {
            *groups.entry(task.project_id()).or_insert(0) += 1;
        }
        Ok(groups
            .into_iter()
            .map(|(project_id, completed)| ProjectCompletionCount {
                project_id,
                completed,
            })
            .collect())
    }
}
