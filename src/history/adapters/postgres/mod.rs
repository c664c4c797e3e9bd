//! `PostgreSQL` adapter for the history query surface.
//!
//! This module owns the canonical `task_histories` schema and row models;
//! the task and comment adapters insert into the same table as part of
//! their own transactions.

pub(crate) mod models;
mod repository;
pub(crate) mod schema;

pub use repository::PostgresHistoryRepository;
