//! # SL-03 Asset Registry - Intent Log Component
//!
//! Validates authorization for asset operations and emits structured intent
//! records; the physical token operation is executed by an external minting
//! collaborator in a separate, non-atomic transaction.
//!
//! ## Trust Boundary (explicit, not an oversight)
//!
//! Separating authorization/intent-logging from token-state mutation lets
//! the authorization policy be versioned independently of the execution
//! mechanics. The cost: the external executor must re-derive authorization
//! against the same admin identity before acting on an intent. Consistency
//! between the intent log and actual token state is eventual, coordinated
//! off-ledger; every intent carries a monotonic `seq` idempotency key so the
//! executor can deduplicate.
//!
//! ## State
//!
//! Only the admin identity, the `total_assets` counter (never negative), and
//! the intent sequence are durable. Individual assets are represented only
//! by their emitted intent records.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod intents;
pub mod registry;
pub mod requests;

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::intents::{AssetIntent, AssetIntentKind};
    pub use crate::registry::AssetRegistry;
    pub use crate::requests::AssetRequest;
}
