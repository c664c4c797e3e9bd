//! Role-claim access policy for performance reports.

use crate::identity::Caller;
use crate::report::ports::{AccessDenied, ReportAccessPolicy};

/// Role claim that grants report access.
const MANAGER_ROLE: &str = "manager";

/// Grants report access to callers whose role claim is `manager`,
/// compared case-insensitively.
///
/// This is the shipped stand-in for a richer authorization collaborator;
/// the authorization outcome (manager-only) is the contract, the mechanism
/// is replaceable behind [`ReportAccessPolicy`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RoleClaimPolicy;

impl RoleClaimPolicy {
    /// Creates the policy.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ReportAccessPolicy for RoleClaimPolicy {
    fn authorize(&self, caller: &Caller) -> Result<(), AccessDenied> {
        if caller.role().eq_ignore_ascii_case(MANAGER_ROLE) {
            return Ok(());
        }
        Err(AccessDenied {
            role: caller.role().to_owned(),
        })
    }
}
