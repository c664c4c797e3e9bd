//! Application services for throughput reporting.

mod performance;

pub use performance::{PerformanceReportError, PerformanceReportResult, ReportService};
