//! Authorization policy port for report access.
//!
//! The authorization decision belongs to an external collaborator; the
//! report service only asks whether the caller may proceed. The contract is
//! synchronous because policies decide on claims already present on the
//! caller, there is nothing to await.

use crate::identity::Caller;
use thiserror::Error;

/// Refusal returned when a caller may not view performance reports.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("role '{role}' may not view performance reports")]
pub struct AccessDenied {
    /// The role claim that was rejected.
    pub role: String,
}

/// Decides whether a caller may read performance reports.
pub trait ReportAccessPolicy: Send + Sync {
    /// Grants or refuses report access for the caller.
    ///
    /// # Errors
    ///
    /// Returns [`AccessDenied`] when the caller's claims do not grant
    /// report access.
    fn authorize(&self, caller: &Caller) -> Result<(), AccessDenied>;
}
