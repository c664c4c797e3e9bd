//! Tracked field names recorded on history rows.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The task attribute a history row refers to.
///
/// The label set is fixed: history rows are only ever appended for the four
/// diff-tracked task fields and for comment creation. Labels are stored as
/// plain text, so renaming a variant is a data migration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HistoryField {
    /// Task title changed.
    Title,
    /// Task description changed.
    Description,
    /// Task due date changed (recorded in `%Y-%m-%d` calendar form).
    DueDate,
    /// Task status changed (recorded with canonical storage labels).
    Status,
    /// A comment was added to the task.
    Comment,
}

impl HistoryField {
    /// Returns the label persisted in the `field_name` column.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Description => "Description",
            Self::DueDate => "DueDate",
            Self::Status => "Status",
            Self::Comment => "Comment",
        }
    }
}

impl fmt::Display for HistoryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
