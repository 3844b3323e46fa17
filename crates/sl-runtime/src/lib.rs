//! # SL Runtime - Component Dispatcher
//!
//! Hosts the four Stock-Ledger components and exposes a single `dispatch`
//! entry point. Each component sits behind its own `tokio::sync::Mutex`, so
//! writes to one component are strictly serialized while different
//! components proceed independently.
//!
//! Components never call each other. The partner-app identifiers they store
//! are advisory, so the dispatcher holds no cross-component wiring beyond
//! construction-time identities from [`config::RuntimeConfig`].

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod dispatcher;

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::config::{RoleGateChoice, RuntimeConfig};
    pub use crate::dispatcher::{ComponentId, Dispatcher, DispatcherStats};
}
