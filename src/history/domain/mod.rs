//! Domain model for the task change history.

mod entry;
mod field;
mod ids;

pub use entry::{HistoryEntry, NewHistoryEntry, PersistedHistoryData};
pub use field::HistoryField;
pub use ids::HistoryId;
