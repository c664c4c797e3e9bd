//! Application services for history retrieval.

mod audit;

pub use audit::{HistoryAuditError, HistoryAuditResult, HistoryService};
