//! `PostgreSQL` adapter for project persistence.

pub(crate) mod models;
mod repository;
pub(crate) mod schema;

pub use repository::PostgresProjectRepository;
