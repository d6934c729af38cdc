//! Testing Utilities
//!
//! Helpers for exercising bindings without a node:
//!
//! - **SimulatedBackend** - In-memory chain implementing every capability
//! - **Assertions** - Revert, custom error and event field checks
//!
//! ## Submodules
//!
//! - `simulated` - Simulated chain and Rust-implemented contracts
//! - `assertions` - Common test assertions

pub mod assertions;
pub mod simulated;

pub use assertions::*;
pub use simulated::*;
