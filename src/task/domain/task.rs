//! Task aggregate root and field-diff logic for history recording.

use super::{TaskId, TaskPriority, TaskStatus};
use crate::history::domain::HistoryField;
use crate::project::domain::ProjectId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Calendar form used when diffing and recording due dates.
const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Hard limit on tasks per project, enforced atomically by repositories.
pub const PROJECT_TASK_CAP: usize = 20;

/// Parameter object for a task awaiting persistence.
///
/// The due date is mandatory on the create path even though storage keeps
/// the column nullable for rows written by earlier deployments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    /// Owning project identifier.
    pub project_id: ProjectId,
    /// Task title.
    pub title: String,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Due date.
    pub due_date: DateTime<Utc>,
    /// Initial lifecycle status.
    pub status: TaskStatus,
    /// Priority, immutable after creation.
    pub priority: TaskPriority,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted owning project identifier.
    pub project_id: ProjectId,
    /// Persisted title.
    pub title: String,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted due date, if any.
    pub due_date: Option<DateTime<Utc>>,
    /// Persisted lifecycle status.
    pub status: TaskStatus,
    /// Persisted priority.
    pub priority: TaskPriority,
}

/// Replacement values for the four mutable task fields.
///
/// Priority is deliberately absent: it cannot be changed after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskUpdate {
    /// Replacement title.
    pub title: String,
    /// Replacement description.
    pub description: Option<String>,
    /// Replacement due date.
    pub due_date: DateTime<Utc>,
    /// Replacement lifecycle status.
    pub status: TaskStatus,
}

/// One tracked field whose value changed during an update.
///
/// Old and new values are the string forms that end up on the history row;
/// an absent prior value is recorded as the empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldChange {
    /// The tracked field.
    pub field: HistoryField,
    /// String form of the prior value.
    pub old_value: String,
    /// String form of the new value.
    pub new_value: String,
}

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    project_id: ProjectId,
    title: String,
    description: Option<String>,
    due_date: Option<DateTime<Utc>>,
    status: TaskStatus,
    priority: TaskPriority,
}

impl Task {
    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            project_id: data.project_id,
            title: data.title,
            description: data.description,
            due_date: data.due_date,
            status: data.status,
            priority: data.priority,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owning project identifier.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Overwrites the four mutable fields and returns one [`FieldChange`]
    /// per field whose string form differs from the previous value.
    ///
    /// Comparison happens on the same string forms that history rows
    /// record: the due date in `%Y-%m-%d` calendar form, the status as its
    /// canonical storage label, and absent descriptions as the empty
    /// string. An update that changes nothing yields an empty vector.
    pub fn apply_update(&mut self, update: TaskUpdate) -> Vec<FieldChange> {
        let mut changes = Vec::new();

        let new_description = update.description.clone().unwrap_or_default();
        let new_due = format_due_date(Some(update.due_date));

        push_if_changed(&mut changes, HistoryField::Title, &self.title, &update.title);
        push_if_changed(
            &mut changes,
            HistoryField::Description,
            &self.description.clone().unwrap_or_default(),
            &new_description,
        );
        push_if_changed(
            &mut changes,
            HistoryField::DueDate,
            &format_due_date(self.due_date),
            &new_due,
        );
        push_if_changed(
            &mut changes,
            HistoryField::Status,
            self.status.as_str(),
            update.status.as_str(),
        );

        self.title = update.title;
        self.description = update.description;
        self.due_date = Some(update.due_date);
        self.status = update.status;

        changes
    }
}

/// Appends a change record when the two string forms differ.
fn push_if_changed(changes: &mut Vec<FieldChange>, field: HistoryField, old: &str, new: &str) {
    if old != new {
        changes.push(FieldChange {
            field,
            old_value: old.to_owned(),
            new_value: new.to_owned(),
        });
    }
}

/// Formats an optional due date the way history rows record it.
fn format_due_date(due_date: Option<DateTime<Utc>>) -> String {
    due_date.map_or_else(String::new, |date| date.format(DUE_DATE_FORMAT).to_string())
}
