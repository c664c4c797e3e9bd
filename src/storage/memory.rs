//! Thread-safe in-memory store shared by the component adapters.
//!
//! One `RwLock` guards the whole store. That is deliberate: the two
//! check-then-act invariants (the per-project task cap and the pending-task
//! deletion guard) need the check and the write to happen under one
//! serialising unit of work, which the single write lock provides the same
//! way a row-locking transaction does in the `PostgreSQL` adapters.

use crate::comment::domain::Comment;
use crate::history::domain::{HistoryEntry, HistoryId, NewHistoryEntry, PersistedHistoryData};
use crate::project::domain::Project;
use crate::task::domain::Task;
use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Mutable table state behind the store lock.
///
/// Keys are the raw identifier values; `BTreeMap` keeps iteration ordered by
/// id, matching the default ordering of sequential primary keys.
#[derive(Debug, Default)]
pub(crate) struct StoreState {
    /// Project records by id.
    pub(crate) projects: BTreeMap<i32, Project>,
    /// Task records by id.
    pub(crate) tasks: BTreeMap<i32, Task>,
    /// Comment records by id.
    pub(crate) comments: BTreeMap<i32, Comment>,
    /// History rows by id.
    pub(crate) history: BTreeMap<i32, HistoryEntry>,
    next_project_id: i32,
    next_task_id: i32,
    next_comment_id: i32,
    next_history_id: i32,
}

impl StoreState {
    /// Assigns the next project identifier.
    pub(crate) const fn next_project_id(&mut self) -> i32 {
        self.next_project_id += 1;
        self.next_project_id
    }

    /// Assigns the next task identifier.
    pub(crate) const fn next_task_id(&mut self) -> i32 {
        self.next_task_id += 1;
        self.next_task_id
    }

    /// Assigns the next comment identifier.
    pub(crate) const fn next_comment_id(&mut self) -> i32 {
        self.next_comment_id += 1;
        self.next_comment_id
    }

    /// Assigns the next history row identifier.
    pub(crate) const fn next_history_id(&mut self) -> i32 {
        self.next_history_id += 1;
        self.next_history_id
    }

    /// Appends a pending history entry as a persisted row.
    ///
    /// Shared by the task and comment adapters, which both write history as
    /// part of their own mutations.
    pub(crate) fn append_history(&mut self, entry: &NewHistoryEntry) {
        let id = self.next_history_id();
        let row = HistoryEntry::from_persisted(PersistedHistoryData {
            id: HistoryId::new(id),
            task_id: entry.task_id(),
            field_name: entry.field().as_str().to_owned(),
            old_value: entry.old_value().to_owned(),
            new_value: entry.new_value().to_owned(),
            changed_by: entry.changed_by(),
            changed_at: entry.changed_at(),
        });
        self.history.insert(id, row);
    }

    /// Removes a project and everything it transitively owns.
    pub(crate) fn remove_project_cascading(&mut self, project_id: i32) {
        let owned_tasks: Vec<i32> = self
            .tasks
            .values()
            .filter(|task| task.project_id().value() == project_id)
            .map(|task| task.id().value())
            .collect();
        for task_id in owned_tasks {
            self.remove_task_cascading(task_id);
        }
        self.projects.remove(&project_id);
    }

    /// Removes a task together with its comments and history rows.
    pub(crate) fn remove_task_cascading(&mut self, task_id: i32) {
        self.comments
            .retain(|_, comment| comment.task_id().value() != task_id);
        self.history
            .retain(|_, entry| entry.task_id().value() != task_id);
        self.tasks.remove(&task_id);
    }
}

/// Shared handle onto the in-memory tables.
///
/// Cloning is cheap and every clone sees the same state, so one store can
/// back a project, task, comment, and history adapter at the same time.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    state: Arc<RwLock<StoreState>>,
}

impl InMemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquires the shared read lock.
    pub(crate) fn read(&self) -> Result<RwLockReadGuard<'_, StoreState>, std::io::Error> {
        self.state.read().map_err(poisoned)
    }

    /// Acquires the exclusive write lock.
    pub(crate) fn write(&self) -> Result<RwLockWriteGuard<'_, StoreState>, std::io::Error> {
        self.state.write().map_err(poisoned)
    }
}

fn poisoned<G>(err: PoisonError<G>) -> std::io::Error {
    std::io::Error::other(err.to_string())
}
