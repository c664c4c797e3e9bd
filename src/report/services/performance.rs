//! Service layer for the 30-day throughput report.

use crate::identity::{Caller, UserId};
use crate::report::{
    domain::{PerformanceReport, REPORT_WINDOW_DAYS},
    ports::{AccessDenied, ReportAccessPolicy},
};
use crate::task::ports::{TaskRepository, TaskRepositoryError};
use chrono::Duration;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Service-level errors for report generation.
#[derive(Debug, Error)]
pub enum PerformanceReportError {
    /// The caller's role claim does not grant report access.
    #[error(transparent)]
    AccessDenied(#[from] AccessDenied),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for report generation.
pub type PerformanceReportResult<T> = Result<T, PerformanceReportError>;

/// Throughput report orchestration service.
#[derive(Clone)]
pub struct ReportService<R, P, C>
where
    R: TaskRepository,
    P: ReportAccessPolicy,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    policy: Arc<P>,
    clock: Arc<C>,
    owner: UserId,
}

impl<R, P, C> ReportService<R, P, C>
where
    R: TaskRepository,
    P: ReportAccessPolicy,
    C: Clock + Send + Sync,
{
    /// Creates a new report service.
    ///
    /// `owner` is the attribution placeholder stamped onto every report
    /// group until per-user change attribution lands.
    #[must_use]
    pub const fn new(repository: Arc<R>, policy: Arc<P>, clock: Arc<C>, owner: UserId) -> Self {
        Self {
            repository,
            policy,
            clock,
            owner,
        }
    }

    /// Builds the per-project throughput report over the trailing window.
    ///
    /// Counts tasks in the terminal status whose due date falls at or after
    /// `now - 30 days`; the cutoff is inclusive. Projects with no completed
    /// tasks in the window are absent from the result.
    ///
    /// # Errors
    ///
    /// Returns [`PerformanceReportError::AccessDenied`] when the caller's
    /// role claim does not grant report access, and
    /// [`PerformanceReportError::Repository`] when the count query fails.
    pub async fn performance(
        &self,
        caller: &Caller,
    ) -> PerformanceReportResult<Vec<PerformanceReport>> {
        self.policy.authorize(caller)?;
        let cutoff = self.clock.utc() - Duration::days(REPORT_WINDOW_DAYS);
        let counts = self.repository.completed_counts_since(cutoff).await?;
        debug!(%cutoff, groups = counts.len(), "built performance report");
        Ok(counts
            .into_iter()
            .map(|count| {
                PerformanceReport::for_group(count.project_id, self.owner, count.completed)
            })
            .collect())
    }
}
