//! Caller identity supplied by the external authentication collaborator.
//!
//! The backend never authenticates anyone itself. Whatever sits in front of
//! it (an HTTP layer, a message consumer, a test harness) resolves the caller
//! and hands the services a [`Caller`] value; comment and history attribution
//! is recorded from it rather than from a hardcoded placeholder.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a user account in the external identity system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i32);

impl UserId {
    /// Wraps a raw user identifier.
    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Authenticated caller of a service operation.
///
/// Carries the attribution identity and the role claim asserted by the
/// authentication collaborator. The role claim is opaque text here; the
/// report access policy decides what it grants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    user_id: UserId,
    role: String,
}

impl Caller {
    /// Creates a caller from an attribution identity and a role claim.
    #[must_use]
    pub fn new(user_id: UserId, role: impl Into<String>) -> Self {
        Self {
            user_id,
            role: role.into(),
        }
    }

    /// Returns the attribution identity.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Returns the asserted role claim.
    #[must_use]
    pub fn role(&self) -> &str {
        &self.role
    }
}
