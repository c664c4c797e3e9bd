//! Project management and the pending-task deletion guard.
//!
//! Projects are the ownership root of the system: deleting one cascades to
//! its tasks, their comments, and their history. Deletion is refused while
//! any owned task is not in the terminal status, and the guard runs inside
//! a single serialising transaction rather than as a separate read.
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
