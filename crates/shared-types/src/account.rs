//! # Account & Partner-App Identifiers
//!
//! Immutable identity value objects. Accounts are opaque: the system never
//! creates, derives, or destroys them, it only compares them byte-for-byte.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// ACCOUNT (32 bytes)
// =============================================================================

/// A 32-byte opaque public account identifier.
///
/// Supplied by callers via the authenticated envelope; two accounts are the
/// same account exactly when their bytes are equal.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Account(pub [u8; 32]);

impl Account {
    /// The all-zero account.
    pub const ZERO: Self = Self([0u8; 32]);

    /// Creates an account from a 32-byte array.
    #[must_use]
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Creates an account from a slice. Returns None if the length is wrong.
    #[must_use]
    pub fn from_slice(slice: &[u8]) -> Option<Self> {
        if slice.len() == 32 {
            let mut bytes = [0u8; 32];
            bytes.copy_from_slice(slice);
            Some(Self(bytes))
        } else {
            None
        }
    }

    /// Returns the underlying bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Returns true if this is the all-zero account.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x")?;
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x")?;
        for byte in &self.0[..4] {
            write!(f, "{byte:02x}")?;
        }
        write!(f, "...")?;
        for byte in &self.0[30..] {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl From<[u8; 32]> for Account {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

// =============================================================================
// PARTNER APP ID
// =============================================================================

/// Identifier of a cooperating component instance.
///
/// Stored by the access-control registry and the valuation oracle but never
/// dereferenced at runtime: composition across components is advisory and
/// coordinated off-ledger.
#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default, Serialize, Deserialize,
)]
pub struct AppId(pub u64);

impl AppId {
    /// The "unregistered" sentinel (0).
    pub const UNREGISTERED: Self = Self(0);

    /// Returns true if this id refers to a registered instance.
    #[must_use]
    pub const fn is_registered(&self) -> bool {
        self.0 != 0
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "app#{}", self.0)
    }
}

impl From<u64> for AppId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

// =============================================================================
// TESTS
// =============================================================================
