//! # Error Taxonomy
//!
//! The five rejection outcomes shared by all components. Every variant is
//! recoverable at the call boundary: a rejected invocation leaves component
//! state unchanged and is reported distinctly to the caller.

use crate::account::Account;
use crate::wire::DecodeError;
use thiserror::Error;

/// A rejected state transition.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ContractError {
    /// An authorization gate check failed.
    #[error("unauthorized: caller {caller} does not satisfy the {gate} gate")]
    Unauthorized {
        /// Authenticated caller that failed the gate.
        caller: Account,
        /// Name of the gate that rejected the caller.
        gate: &'static str,
    },

    /// The request failed wire decoding (arity, width, or value range).
    #[error("malformed request: {0}")]
    MalformedRequest(#[from] DecodeError),

    /// The operation targets a record that does not exist.
    #[error("no product record for account {account}")]
    NotFound {
        /// Account whose record was required.
        account: Account,
    },

    /// The cooldown window has not elapsed (rate-limited operations only).
    /// Distinct from `Unauthorized` so callers can tell "too early" from
    /// "not permitted".
    #[error("cooldown window not elapsed: now {now}, due at {due_at}")]
    NotYetDue {
        /// Timestamp supplied with the call.
        now: u64,
        /// Earliest timestamp at which the operation becomes due.
        due_at: u64,
    },

    /// The transition would drive a counter negative or past its bounds.
    #[error("invariant violation: {0}")]
    InvariantViolation(String),
}

impl ContractError {
    /// Stable rejection code for the wire reply.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Unauthorized { .. } => "UNAUTHORIZED",
            Self::MalformedRequest(_) => "MALFORMED_REQUEST",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::NotYetDue { .. } => "NOT_YET_DUE",
            Self::InvariantViolation(_) => "INVARIANT_VIOLATION",
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
