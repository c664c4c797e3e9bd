//! Shared persistence plumbing for the component adapters.
//!
//! The relational schema is one physical store with cross-table cascades,
//! so the per-component adapters share their backing: the in-memory
//! adapters wrap a single [`InMemoryStore`] handle rather than keeping
//! private maps that could drift apart, and the `PostgreSQL` adapters share
//! one [`PgPool`] and the blocking-offload helpers.

pub mod memory;
pub mod postgres;

pub use memory::InMemoryStore;
pub use postgres::PgPool;
