//! Contract-Bind: Typed Contract Binding Layer
//!
//! This crate provides the runtime shared by generated contract bindings:
//!
//! - **ABI Descriptors** - Parsed interfaces with overload-disambiguated keys
//! - **Bound Contracts** - Calls, transactions and log queries by method/event key
//! - **Event Iterators** - Pull-style cursors over historical and live logs
//! - **Deployment** - Contract metadata, storage layouts, deployers and mining waits
//! - **Backends** - Capability traits plus JSON-RPC and simulated implementations
//!
//! ## Usage
//!
//! ```toml
//! [dependencies]
//! contract-bind = { path = "../contract-bind" }
//! ```
//!
//! ## Feature Flags
//!
//! - `evm` - JSON-RPC provider backend and log poller (default)
//! - `testing` - Simulated backend and test assertions (default)
//! - `full` - Enable all features

// Core modules (always available)
pub mod abi;
pub mod backend;
pub mod bound;
pub mod context;
pub mod convert;
pub mod deploy;
pub mod error;
pub mod event;
pub mod layout;
pub mod options;
pub mod redact;
pub mod wait;

// Transport-specific modules (feature-gated)
#[cfg(feature = "evm")]
pub mod evm;

// Testing utilities (feature-gated)
#[cfg(feature = "testing")]
pub mod testing;

// Re-export commonly used items at the crate root
pub use abi::{AbiDescriptor, ErrorEntry, EventEntry, MethodEntry, Mutability, ParamEntry};
pub use backend::{
    CallRequest, Caller, Capabilities, ContractBackend, DeployBackend, Filterer, LogQuery,
    LogSubscription, Transactor, TxHandle, TxReceipt,
};
pub use bound::{BoundContract, Subscription};
pub use context::{CancelToken, Context};
pub use convert::{topic_values, FieldReader, FromSolValue, IntoSolValue};
pub use deploy::{deploy_contract, ContractMetadata};
pub use error::{BindError, Result, Revert, RevertReason};
pub use event::{ContractEvent, EventField, EventIterator, EventRecord};
pub use layout::{StorageLayout, StorageLayoutEntry, StorageLayoutType};
pub use options::{BlockSelector, CallOpts, FilterOpts, TransactOpts, WatchOpts};
pub use wait::{wait_deployed, wait_mined, DEFAULT_POLL_INTERVAL};

#[cfg(feature = "evm")]
pub use evm::ProviderBackend;

#[cfg(feature = "testing")]
pub use testing::SimulatedBackend;

// Generated bindings name these through the crate root
pub use alloy;
