//! Error types for the binding layer
//!
//! Every fallible operation in this crate returns [`BindError`]. Reverts carry the
//! raw revert payload together with whatever reason could be decoded from it.

use std::fmt;
use std::time::Duration;

use alloy::dyn_abi::DynSolValue;
use alloy::primitives::{Address, Bytes, U256};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, BindError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BindError {
    // ========================================================================
    // Metadata Errors
    // ========================================================================
    #[error("Malformed ABI: {0}")]
    MalformedAbi(String),

    #[error("Contract metadata has no ABI")]
    MissingAbi,

    #[error("Contract metadata has no creation bytecode")]
    MissingBytecode,

    #[error("Invalid creation bytecode: {0}")]
    InvalidBytecode(String),

    #[error("Contract metadata has no deployed bytecode")]
    MissingDeployedBytecode,

    #[error("Contract metadata has no storage layout")]
    MissingStorageLayout,

    #[error("Invalid storage layout: {0}")]
    InvalidStorageLayout(String),

    #[error("Unknown contract: {0}")]
    UnknownContract(String),

    #[error("Unknown method: {0}")]
    UnknownMethod(String),

    #[error("Unknown event: {0}")]
    UnknownEvent(String),

    // ========================================================================
    // Encoding Errors
    // ========================================================================
    #[error("Type mismatch for {argument}: expected {expected}, {detail}")]
    TypeMismatch {
        argument: String,
        expected: String,
        detail: String,
    },

    #[error("Value for {argument} does not fit in {expected}")]
    OverflowArgument { argument: String, expected: String },

    #[error("Malformed return data for {method}: {detail}")]
    MalformedReturn { method: String, detail: String },

    #[error("Malformed log for event {event}: {detail}")]
    MalformedLog { event: String, detail: String },

    // ========================================================================
    // Execution Errors
    // ========================================================================
    #[error("No contract code at {0}")]
    NoCode(Address),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Execution reverted: {0}")]
    ExecutionReverted(Revert),

    #[error("Deployment reverted: {0}")]
    DeploymentReverted(Revert),

    #[error("Contract is not bound to a {0} backend")]
    MissingCapability(&'static str),

    // ========================================================================
    // Lifecycle Errors
    // ========================================================================
    #[error("Operation cancelled")]
    Cancelled,

    #[error("Deadline of {0:?} exceeded")]
    DeadlineExceeded(Duration),

    #[error("Log subscription closed")]
    SubscriptionClosed,
}

impl BindError {
    /// Whether retrying the same operation might succeed.
    ///
    /// The binding layer never retries on its own; this is a hint for callers.
    pub fn is_retriable(&self) -> bool {
        matches!(self, BindError::Transport(_))
    }

    pub(crate) fn type_mismatch(
        argument: impl Into<String>,
        expected: impl fmt::Display,
        detail: impl Into<String>,
    ) -> Self {
        BindError::TypeMismatch {
            argument: argument.into(),
            expected: expected.to_string(),
            detail: detail.into(),
        }
    }

    pub(crate) fn transport(err: impl fmt::Display) -> Self {
        BindError::Transport(err.to_string())
    }

    /// The revert payload, when this error came from a reverted execution.
    pub fn revert(&self) -> Option<&Revert> {
        match self {
            BindError::ExecutionReverted(revert) | BindError::DeploymentReverted(revert) => {
                Some(revert)
            }
            _ => None,
        }
    }
}

/// A reverted execution: raw return data plus the decoded reason, if any.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Revert {
    pub data: Bytes,
    pub reason: Option<RevertReason>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RevertReason {
    /// `Error(string)`, as produced by `require` and `revert("...")`
    Message(String),
    /// `Panic(uint256)` with the compiler panic code
    Panic(U256),
    /// A custom error declared in the contract ABI
    Custom {
        name: String,
        args: Vec<DynSolValue>,
    },
}

impl Revert {
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self {
            data: data.into(),
            reason: None,
        }
    }

    /// Revert with an `Error(string)` reason.
    pub fn message(message: impl Into<String>) -> Self {
        let message = message.into();
        let data = crate::abi::revert::encode_error_string(&message);
        Self {
            data,
            reason: Some(RevertReason::Message(message)),
        }
    }

    /// The `Error(string)` message, if that is how the revert was reported.
    pub fn reason_message(&self) -> Option<&str> {
        match &self.reason {
            Some(RevertReason::Message(message)) => Some(message),
            _ => None,
        }
    }

    /// Name of the custom error, if the revert matched one in the ABI.
    pub fn custom_error(&self) -> Option<&str> {
        match &self.reason {
            Some(RevertReason::Custom { name, .. }) => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for Revert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.reason {
            Some(RevertReason::Message(message)) => write!(f, "{message}"),
            Some(RevertReason::Panic(code)) => write!(f, "panic code {code:#x}"),
            Some(RevertReason::Custom { name, args }) => {
                write!(f, "{name}(")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{arg:?}")?;
                }
                f.write_str(")")
            }
            None if self.data.is_empty() => f.write_str("no reason"),
            None => write!(f, "data {}", self.data),
        }
    }
}
