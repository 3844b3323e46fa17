//! # Roles & Gate Policies
//!
//! The role enumeration and the swappable authorization predicate.
//!
//! ## Flagged Ambiguity (do not "fix" silently)
//!
//! The deployed registry encodes Admin = 1, Manager = 2, Operator = 3 and
//! gates privileged actions with `rank(held) >= rank(threshold)`. Because
//! Admin carries the *lowest* rank, every registered role - including
//! Operator - satisfies the admin threshold. This is very likely inverted
//! from intent, but it is the behavior external callers observe today, so it
//! ships as the default policy. [`strict_privilege_gate`] implements the
//! expected direction (only Admin passes the admin threshold); product
//! owners must resolve the direction before it becomes the default.

use serde::{Deserialize, Serialize};
use shared_types::wire::DecodeError;
use std::fmt;

// =============================================================================
// ROLE
// =============================================================================

/// A registered role. Absence of a registry entry is the None role.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Role {
    /// Full administrative privilege (rank 1).
    Admin,
    /// Mid-tier privilege (rank 2).
    Manager,
    /// Lowest privilege (rank 3).
    Operator,
}

impl Role {
    /// Wire rank as persisted by the registry (Admin = 1 .. Operator = 3).
    #[must_use]
    pub const fn rank(self) -> u64 {
        match self {
            Role::Admin => 1,
            Role::Manager => 2,
            Role::Operator => 3,
        }
    }

    /// Privilege height, inverse of rank (Admin highest).
    #[must_use]
    pub const fn privilege(self) -> u64 {
        match self {
            Role::Admin => 3,
            Role::Manager => 2,
            Role::Operator => 1,
        }
    }

    /// Decodes a wire rank into a role.
    ///
    /// # Errors
    /// Returns `DecodeError::OutOfRange` for any value outside 1..=3.
    pub fn from_rank(field: &'static str, value: u64) -> Result<Self, DecodeError> {
        match value {
            1 => Ok(Role::Admin),
            2 => Ok(Role::Manager),
            3 => Ok(Role::Operator),
            value => Err(DecodeError::OutOfRange { field, value }),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Admin => write!(f, "admin"),
            Role::Manager => write!(f, "manager"),
            Role::Operator => write!(f, "operator"),
        }
    }
}

// =============================================================================
// GATE POLICIES
// =============================================================================

/// Authorization predicate: does `held` satisfy `threshold`?
///
/// `held` is `None` for accounts with no registry entry, which never pass
/// any gate under either policy.
pub type RoleGate = fn(held: Option<Role>, threshold: Role) -> bool;

/// The literal deployed comparison: `rank(held) >= rank(threshold)`.
///
/// Unregistered accounts read as rank 0 and fail every threshold. Every
/// registered role passes the Admin threshold (rank 1). See the module docs
/// for why this quirk is preserved.
#[must_use]
pub fn literal_rank_gate(held: Option<Role>, threshold: Role) -> bool {
    held.map_or(0, Role::rank) >= threshold.rank()
}

/// The corrected direction: `privilege(held) >= privilege(threshold)`.
///
/// Only Admin passes the Admin threshold; Manager passes Manager and
/// Operator thresholds; Operator passes only the Operator threshold.
#[must_use]
pub fn strict_privilege_gate(held: Option<Role>, threshold: Role) -> bool {
    held.map_or(0, Role::privilege) >= threshold.privilege()
}

// =============================================================================
// TESTS
// =============================================================================
