//! Comments attached to tasks.
//!
//! Creating a comment also appends a paired history row to the owning task
//! in the same transaction; edits and deletions leave no history behind.
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
