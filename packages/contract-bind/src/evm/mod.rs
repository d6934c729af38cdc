//! EVM JSON-RPC Backend
//!
//! Capability implementations over an alloy provider.
//!
//! ## Submodules
//!
//! - `provider` - call, transact, filter and receipt capabilities
//! - `watcher` - polling log watcher used for live subscriptions

pub mod provider;
pub mod watcher;

// Re-export commonly used items
pub use provider::{rpc_error, ProviderBackend};
pub use watcher::{LogPoller, WatcherConfig};
