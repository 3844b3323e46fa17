//! # SL-04 Valuation Oracle - Cooldown Component
//!
//! Gates valuation and metrics computation behind a minimum time interval.
//! Time is supplied on the call envelope, never read from a local clock, so
//! the component is reproducible from its input stream.
//!
//! ## State Machine
//!
//! {Idle} → `perform_check` with window elapsed → {Idle, timestamp advanced}.
//! No terminal state. Only `perform_check` advances the timestamp;
//! `update_valuation` and `compute_metrics` merely read the window.
//!
//! The two partner-app slots mirror the access-control registry's. They are
//! stored for off-ledger coordination and never dereferenced at runtime.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod oracle;
pub mod requests;

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::oracle::{ValuationOracle, DEFAULT_CHECK_INTERVAL};
    pub use crate::requests::OracleRequest;
}
