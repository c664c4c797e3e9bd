//! `PostgreSQL` adapter for comment persistence.

pub(crate) mod models;
mod repository;
pub(crate) mod schema;

pub use repository::PostgresCommentRepository;
