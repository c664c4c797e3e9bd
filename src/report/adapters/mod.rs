//! Adapter implementations of the report ports.

pub mod role_claim;

pub use role_claim::RoleClaimPolicy;
