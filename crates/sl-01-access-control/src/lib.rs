//! # SL-01 Access Control - Role Registry Component
//!
//! Maintains the account→role mapping and the two registered partner-app
//! identifiers. This is the leaf component: it depends on nothing else.
//!
//! ## State
//!
//! | Field | Type | Notes |
//! |-------|------|-------|
//! | `admin` | `Account` | Creator, assigned `Role::Admin` at construction |
//! | `roles` | `HashMap<Account, Role>` | Absent entry = the None role |
//! | `inventory_app` | `AppId` | Stored, never dereferenced |
//! | `asset_manager_app` | `AppId` | Stored, never dereferenced |
//!
//! ## Authorization
//!
//! Every operation is gated by a named, swappable [`policy::RoleGate`]. The
//! default is [`policy::literal_rank_gate`], which reproduces the deployed
//! comparison exactly - including its quirk that every registered role
//! satisfies the admin threshold. See `policy` for the flagged ambiguity and
//! [`policy::strict_privilege_gate`] for the corrected alternative.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod policy;
pub mod registry;
pub mod requests;

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::policy::{literal_rank_gate, strict_privilege_gate, Role, RoleGate};
    pub use crate::registry::AccessControlRegistry;
    pub use crate::requests::AccessRequest;
}
