//! # Shared Types Crate
//!
//! This crate contains the value objects, wire request/reply shapes, the
//! error taxonomy, and the `AuthenticatedCall` envelope shared by all four
//! component state machines.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All cross-component types are defined here.
//! - **Trusted Envelope**: The `AuthenticatedCall.caller` is supplied by the
//!   external identity provider and is the sole source of caller identity.
//! - **Deterministic Time**: Timestamps arrive on the envelope; nothing in
//!   the core reads a local clock.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod account;
pub mod envelope;
pub mod errors;
pub mod wire;

pub use account::{Account, AppId};
pub use envelope::AuthenticatedCall;
pub use errors::ContractError;
pub use wire::{DecodeError, LogRecord, RawRequest, Reply};
