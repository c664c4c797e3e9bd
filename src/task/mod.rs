//! Task management scoped to projects.
//!
//! Tasks are created under a project (capped at twenty per project, enforced
//! atomically by the repository), carry an immutable priority, and record a
//! field-level change history on every update. The module follows hexagonal
//! architecture:
//!
//! - Domain types and diff logic in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
