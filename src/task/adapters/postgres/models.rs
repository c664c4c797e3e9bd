//! Diesel row models for task persistence.

use super::schema::tasks;
use crate::project::domain::ProjectId;
use crate::task::{
    domain::{NewTask, PersistedTaskData, Task, TaskId, TaskPriority, TaskStatus},
    ports::{TaskRepositoryError, TaskRepositoryResult},
};
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Store-assigned task identifier.
    pub id: i32,
    /// Owning project identifier.
    pub project_id: i32,
    /// Task title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Optional due date.
    pub due_date: Option<DateTime<Utc>>,
    /// Persisted status label.
    pub status: String,
    /// Persisted priority label.
    pub priority: String,
}

impl TaskRow {
    /// Converts a persisted row into the domain aggregate.
    ///
    /// Fails as a persistence error when a stored enum label falls outside
    /// the canonical set.
    pub(crate) fn into_domain(self) -> TaskRepositoryResult<Task> {
        let status = TaskStatus::try_from(self.status.as_str())
            .map_err(TaskRepositoryError::persistence)?;
        let priority = TaskPriority::try_from(self.priority.as_str())
            .map_err(TaskRepositoryError::persistence)?;
        Ok(Task::from_persisted(PersistedTaskData {
            id: TaskId::new(self.id),
            project_id: ProjectId::new(self.project_id),
            title: self.title,
            description: self.description,
            due_date: self.due_date,
            status,
            priority,
        }))
    }
}

/// Insert model for task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Owning project identifier.
    pub project_id: i32,
    /// Task title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Due date (always set on the create path).
    pub due_date: Option<DateTime<Utc>>,
    /// Canonical status label.
    pub status: String,
    /// Canonical priority label.
    pub priority: String,
}

impl NewTaskRow {
    /// Builds an insert row from a pending domain task.
    pub(crate) fn from_domain(new_task: &NewTask) -> Self {
        Self {
            project_id: new_task.project_id.value(),
            title: new_task.title.clone(),
            description: new_task.description.clone(),
            due_date: Some(new_task.due_date),
            status: new_task.status.as_str().to_owned(),
            priority: new_task.priority.as_str().to_owned(),
        }
    }
}
