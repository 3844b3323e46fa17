//! # SL-02 Inventory Ledger - Product Record Component
//!
//! Maintains one product record per registered account (addressed by caller
//! identity, not by a global product-id index - a preserved property of the
//! original design, flagged as an open question in DESIGN.md), a global
//! product counter, and emits advisory reorder signals.
//!
//! ## Authorization
//!
//! Two identities are fixed at construction and compared by exact account
//! equality: the admin and the oracle. Field writability:
//!
//! | Operation | Gate |
//! |-----------|------|
//! | `create_product`, `update_price` | admin only |
//! | `update_quantity`, `reorder`, `update_location`, `check_inventory`, `audit` | admin or oracle |
//!
//! The writer identities are fixed locally; no cross-component call is
//! ever made.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ledger;
pub mod record;
pub mod requests;

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::ledger::ProductInventoryLedger;
    pub use crate::record::ProductRecord;
    pub use crate::requests::InventoryRequest;
}
