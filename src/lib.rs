//! Tasktrail: project and task tracking with an audit trail.
//!
//! This crate provides the core functionality for managing projects, their
//! tasks and comments, recording field-level change history, and building
//! manager-only throughput reports.
//!
//! # Architecture
//!
//! Tasktrail follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory, `PostgreSQL`)
//!
//! # Modules
//!
//! - [`project`]: Project lifecycle and the pending-task deletion guard
//! - [`task`]: Task workflow, the per-project cap, and change detection
//! - [`comment`]: Comment authoring with paired history rows
//! - [`history`]: Append-only change history and its query surface
//! - [`report`]: Manager-only 30-day throughput reporting
//! - [`identity`]: Caller identity and role claims
//! - [`storage`]: Shared in-memory store and `PostgreSQL` pool helpers

pub mod comment;
pub mod history;
pub mod identity;
pub mod project;
pub mod report;
pub mod storage;
pub mod task;
