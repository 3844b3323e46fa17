//! # Product Record
//!
//! The per-account record entity. One record per account; never deleted by
//! any operation in scope.

use serde::{Deserialize, Serialize};

/// A single account's product record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Caller-supplied identifier. Not guaranteed globally unique across
    /// accounts; a zero id makes the record invisible to mutators and
    /// readers in the ledger.
    pub product_id: u64,
    /// Units on hand. Mutated only via `update_quantity` and `reorder`.
    pub quantity: u64,
    /// Reorder threshold; quantities below it trigger the advisory signal.
    pub min_threshold: u64,
    /// Unit price.
    pub price: u64,
    /// Storage location (opaque byte string).
    pub location: Vec<u8>,
    /// Last mutation timestamp; monotonically non-decreasing.
    pub last_updated: u64,
    /// Expiration marker, opaque to the ledger (no automatic expiry).
    pub expiration: u64,
    /// Supplier reference (opaque byte string).
    pub supplier: Vec<u8>,
}

impl ProductRecord {
    /// Advances `last_updated` without ever moving it backwards.
    pub fn touch(&mut self, now: u64) {
        self.last_updated = self.last_updated.max(now);
    }

    /// True when the current quantity is below the reorder threshold.
    #[must_use]
    pub fn needs_reorder(&self) -> bool {
        self.quantity < self.min_threshold
    }
}
