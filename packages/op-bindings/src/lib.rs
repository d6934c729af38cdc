//! OP Stack contract bindings
//!
//! Typed facades generated by `bindgen` from the compiler artifacts in
//! `artifacts/`. Every facade delegates to a [`contract_bind::BoundContract`],
//! so encoding, overload dispatch and event decoding follow the ABI shipped
//! with each contract.
//!
//! ## Usage
//!
//! ```ignore
//! use op_bindings::{deploy_delayed_weth, DelayedWETH};
//!
//! let (address, tx, weth) = deploy_delayed_weth(&opts, caps.clone(), delay).await?;
//! let weth = DelayedWETH::new(address, caps)?;
//! let delay = weth.caller.delay(&CallOpts::default()).await?;
//! ```
//!
//! ## Submodules
//!
//! - `bindings::delayed_weth`: `DelayedWETH`
//! - `bindings::delayed_vetoable`: `DelayedVetoable`
//! - `bindings::registry`: Metadata of every generated contract by name

pub mod bindings;

pub use bindings::*;

// Re-export the runtime so downstream crates use the same version
pub use contract_bind;
