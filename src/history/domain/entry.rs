//! History row types: pending entries and persisted records.

use super::{HistoryField, HistoryId};
use crate::identity::UserId;
use crate::task::domain::TaskId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A change record awaiting persistence.
///
/// Built by the task and comment components when a tracked field changes;
/// the owning repository persists it in the same transaction as the change
/// it describes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewHistoryEntry {
    task_id: TaskId,
    field: HistoryField,
    old_value: String,
    new_value: String,
    changed_by: UserId,
    changed_at: DateTime<Utc>,
}

impl NewHistoryEntry {
    /// Records a field change against a task at the current clock time.
    ///
    /// `old_value` is the empty string when the prior value was absent.
    #[must_use]
    pub fn record(
        task_id: TaskId,
        field: HistoryField,
        old_value: impl Into<String>,
        new_value: impl Into<String>,
        changed_by: UserId,
        clock: &impl Clock,
    ) -> Self {
        Self {
            task_id,
            field,
            old_value: old_value.into(),
            new_value: new_value.into(),
            changed_by,
            changed_at: clock.utc(),
        }
    }

    /// Returns the task the change belongs to.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Returns the tracked field label.
    #[must_use]
    pub const fn field(&self) -> HistoryField {
        self.field
    }

    /// Returns the prior value (empty string when the field was unset).
    #[must_use]
    pub fn old_value(&self) -> &str {
        &self.old_value
    }

    /// Returns the new value.
    #[must_use]
    pub fn new_value(&self) -> &str {
        &self.new_value
    }

    /// Returns the attribution identity.
    #[must_use]
    pub const fn changed_by(&self) -> UserId {
        self.changed_by
    }

    /// Returns the change timestamp.
    #[must_use]
    pub const fn changed_at(&self) -> DateTime<Utc> {
        self.changed_at
    }
}

/// Parameter object for reconstructing a persisted history row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedHistoryData {
    /// Store-assigned row identifier.
    pub id: HistoryId,
    /// Owning task identifier.
    pub task_id: TaskId,
    /// Persisted field label text.
    pub field_name: String,
    /// Persisted prior value.
    pub old_value: String,
    /// Persisted new value.
    pub new_value: String,
    /// Persisted attribution identity.
    pub changed_by: UserId,
    /// Persisted change timestamp.
    pub changed_at: DateTime<Utc>,
}

/// A persisted, immutable change record.
///
/// The field name is kept as plain text on the read side: rows written by
/// older deployments must remain readable even if the tracked label set
/// evolves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    id: HistoryId,
    task_id: TaskId,
    field_name: String,
    old_value: String,
    new_value: String,
    changed_by: UserId,
    changed_at: DateTime<Utc>,
}

impl HistoryEntry {
    /// Reconstructs a history row from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedHistoryData) -> Self {
        Self {
            id: data.id,
            task_id: data.task_id,
            field_name: data.field_name,
            old_value: data.old_value,
            new_value: data.new_value,
            changed_by: data.changed_by,
            changed_at: data.changed_at,
        }
    }

    /// Returns the row identifier.
    #[must_use]
    pub const fn id(&self) -> HistoryId {
        self.id
    }

    /// Returns the owning task identifier.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Returns the persisted field label.
    #[must_use]
    pub fn field_name(&self) -> &str {
        &self.field_name
    }

    /// Returns the prior value.
    #[must_use]
    pub fn old_value(&self) -> &str {
        &self.old_value
    }

    /// Returns the new value.
    #[must_use]
    pub fn new_value(&self) -> &str {
        &self.new_value
    }

    /// Returns the attribution identity.
    #[must_use]
    pub const fn changed_by(&self) -> UserId {
        self.changed_by
    }

    /// Returns the change timestamp.
    #[must_use]
    pub const fn changed_at(&self) -> DateTime<Utc> {
        self.changed_at
    }
}
