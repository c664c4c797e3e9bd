//! `PostgreSQL` adapter for task persistence.

pub(crate) mod models;
mod repository;
pub(crate) mod schema;

pub use repository::PostgresTaskRepository;
