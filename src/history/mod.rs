//! Append-only change history for tasks.
//!
//! History rows are written as a side effect of task updates and comment
//! creation (see the task and comment components); this component only owns
//! the row types and the read-only query surface. Rows are never updated or
//! deleted directly, they only cascade away with their task.
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Query services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
