//! Diesel row models for history persistence.

use super::schema::task_histories;
use crate::history::domain::{HistoryEntry, HistoryId, NewHistoryEntry, PersistedHistoryData};
use crate::identity::UserId;
use crate::task::domain::TaskId;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for history records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = task_histories)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct HistoryRow {
    /// Store-assigned row identifier.
    pub id: i32,
    /// Owning task identifier.
    pub task_item_id: i32,
    /// Tracked field label.
    pub field_name: String,
    /// Prior value.
    pub old_value: String,
    /// New value.
    pub new_value: String,
    /// Attribution identity.
    pub changed_by_user_id: i32,
    /// Change timestamp.
    pub changed_at: DateTime<Utc>,
}

impl HistoryRow {
    /// Converts a persisted row into the domain record.
    pub(crate) fn into_domain(self) -> HistoryEntry {
        HistoryEntry::from_persisted(PersistedHistoryData {
            id: HistoryId::new(self.id),
            task_id: TaskId::new(self.task_item_id),
            field_name: self.field_name,
            old_value: self.old_value,
            new_value: self.new_value,
            changed_by: UserId::new(self.changed_by_user_id),
            changed_at: self.changed_at,
        })
    }
}

/// Insert model for history records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = task_histories)]
pub struct NewHistoryRow {
    /// Owning task identifier.
    pub task_item_id: i32,
    /// Tracked field label.
    pub field_name: String,
    /// Prior value.
    pub old_value: String,
    /// New value.
    pub new_value: String,
    /// Attribution identity.
    pub changed_by_user_id: i32,
    /// Change timestamp.
    pub changed_at: DateTime<Utc>,
}

impl NewHistoryRow {
    /// Builds an insert row from a pending domain entry.
    pub(crate) fn from_domain(entry: &NewHistoryEntry) -> Self {
        Self {
            task_item_id: entry.task_id().value(),
            field_name: entry.field().as_str().to_owned(),
            old_value: entry.old_value().to_owned(),
            new_value: entry.new_value().to_owned(),
            changed_by_user_id: entry.changed_by().value(),
            changed_at: entry.changed_at(),
        }
    }
}
