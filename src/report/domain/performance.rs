//! Per-project completed-task throughput figures.

use crate::identity::UserId;
use crate::project::domain::ProjectId;
use serde::Serialize;

/// Length of the trailing report window in days.
pub const REPORT_WINDOW_DAYS: i64 = 30;

/// Throughput figures for one project group in the report window.
///
/// Grouping is by project today; the owner field carries the injected
/// attribution placeholder until per-user change attribution lands, at which
/// point the report regroups by the user who completed the task.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceReport {
    /// The project whose completed tasks were counted.
    pub project_id: ProjectId,
    /// Attribution placeholder supplied at service construction.
    pub owner: UserId,
    /// Completed tasks with a due date inside the window.
    pub completed_tasks: u64,
    /// `completed_tasks / 30.0`, rounded to two decimal places.
    pub average_per_day: f64,
}

impl PerformanceReport {
    /// Builds the figures for one project group.
    #[must_use]
    pub fn for_group(project_id: ProjectId, owner: UserId, completed_tasks: u64) -> Self {
        Self {
            project_id,
            owner,
            completed_tasks,
            average_per_day: round_two(per_day(completed_tasks)),
        }
    }
}

#[expect(
    clippy::cast_precision_loss,
    clippy::float_arithmetic,
    reason = "report averages are presentational; counts stay far below 2^52"
)]
fn per_day(completed_tasks: u64) -> f64 {
    completed_tasks as f64 / REPORT_WINDOW_DAYS as f64
}

#[expect(
    clippy::float_arithmetic,
    reason = "two-decimal rounding for presentation"
)]
fn round_two(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
