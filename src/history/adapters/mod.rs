//! Adapter implementations of the history ports.

pub mod memory;
pub mod postgres;
