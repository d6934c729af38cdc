//! Generated contract bindings
//!
//! Generated by `bindgen`; do not edit. Regenerate with `bindgen generate`.

pub mod delayed_vetoable;
pub mod delayed_weth;
pub mod registry;

pub use delayed_vetoable::*;
pub use delayed_weth::*;
