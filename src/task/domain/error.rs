//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
///
/// Unknown enum labels are business-rule violations at the service boundary:
/// the offending value is carried so the caller sees exactly what was
/// rejected.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The status label does not belong to the canonical set.
    #[error("unknown task status '{0}', expected pending, in_progress, or done")]
    UnknownStatus(String),

    /// The priority label does not belong to the canonical set.
    #[error("unknown task priority '{0}', expected low, medium, or high")]
    UnknownPriority(String),
}
