//! # Stock-Ledger Test Suite
//!
//! Unified test crate containing cross-component scenarios.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/      # End-to-end flows through the dispatcher
//!     ├── lifecycle.rs  # Deploy → roles → products → assets → oracle
//!     ├── rejections.rs # Decode failures, gates, and untouched state
//!     └── concurrency.rs# Per-component write serialization
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p sl-tests
//!
//! # By category
//! cargo test -p sl-tests integration::
//! ```

#![allow(dead_code)]

pub mod integration;
