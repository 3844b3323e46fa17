//! # `AuthenticatedCall` Envelope
//!
//! The wrapper attached to every component invocation by the external
//! dispatcher.
//!
//! ## Trust Properties
//!
//! - **Caller Authority**: `caller` comes from the external identity and
//!   authentication provider and is trusted completely; components never
//!   re-verify it.
//! - **Furnished Time**: `timestamp` is the ledger's monotonic current time
//!   for the invocation. Components never read a local clock, so replaying
//!   the same input stream reproduces the same state.
//! - **Correlation**: `correlation_id` ties a request to its tracing span
//!   and reply; it carries no authorization meaning.

use crate::account::Account;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single authenticated invocation context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedCall {
    /// Authenticated caller identity (sole source of truth).
    pub caller: Account,
    /// Externally furnished monotonic timestamp (unix seconds).
    pub timestamp: u64,
    /// Correlation identifier for request/reply pairing and tracing.
    pub correlation_id: Uuid,
}

impl AuthenticatedCall {
    /// Creates a call envelope with a fresh correlation id.
    #[must_use]
    pub fn new(caller: Account, timestamp: u64) -> Self {
        Self {
            caller,
            timestamp,
            correlation_id: Uuid::new_v4(),
        }
    }

    /// Replaces the correlation id (for reply correlation in tests).
    #[must_use]
    pub fn with_correlation(mut self, correlation_id: Uuid) -> Self {
        self.correlation_id = correlation_id;
        self
    }
}
