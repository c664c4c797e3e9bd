//! Port contracts for report access control.

pub mod access;

pub use access::{AccessDenied, ReportAccessPolicy};
