//! Domain model for performance reporting.

mod performance;

pub use performance::{PerformanceReport, REPORT_WINDOW_DAYS};
