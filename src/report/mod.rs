//! Manager-only throughput reporting.
//!
//! Aggregates completed-task counts per project over a trailing 30-day
//! window. Access is decided by an authorization policy port rather than an
//! inline string compare; the shipped adapter grants managers only.
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
