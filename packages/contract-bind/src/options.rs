//! Per-operation options for calls, transactions and log queries

use std::fmt;

use alloy::eips::eip2930::AccessList;
use alloy::eips::BlockId;
use alloy::network::EthereumWallet;
use alloy::primitives::{Address, B256, U256};
use alloy::signers::local::PrivateKeySigner;

use crate::context::Context;
use crate::redact::redact_option;

/// Block a read is executed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlockSelector {
    #[default]
    Latest,
    Pending,
    Number(u64),
    Hash(B256),
}

impl From<BlockSelector> for BlockId {
    fn from(value: BlockSelector) -> Self {
        match value {
            BlockSelector::Latest => BlockId::latest(),
            BlockSelector::Pending => BlockId::pending(),
            BlockSelector::Number(number) => BlockId::number(number),
            BlockSelector::Hash(hash) => BlockId::hash(hash),
        }
    }
}

/// Options for read-only calls.
#[derive(Debug, Clone, Default)]
pub struct CallOpts {
    /// Sender the call is simulated from
    pub from: Option<Address>,
    pub block: BlockSelector,
    pub context: Context,
}

impl CallOpts {
    pub fn at_block(block: BlockSelector) -> Self {
        Self {
            block,
            ..Self::default()
        }
    }
}

/// Options for state-changing transactions.
///
/// Unset fields are filled by the transactor (nonce from the pending count,
/// gas from estimation, fees from the fee oracle).
#[derive(Clone, Default)]
pub struct TransactOpts {
    pub from: Address,
    /// Wallet used to sign locally; `None` leaves signing to the node
    pub signer: Option<EthereumWallet>,
    pub nonce: Option<u64>,
    pub value: U256,
    pub gas_limit: Option<u64>,
    /// Legacy gas price; takes precedence over the EIP-1559 fields
    pub gas_price: Option<u128>,
    pub max_fee_per_gas: Option<u128>,
    pub max_priority_fee_per_gas: Option<u128>,
    pub access_list: Option<AccessList>,
    pub context: Context,
}

impl TransactOpts {
    /// Options that send from `from` and leave signing to the node.
    pub fn new(from: Address) -> Self {
        Self {
            from,
            ..Self::default()
        }
    }

    /// Options that sign locally with `signer` and send from its address.
    pub fn from_signer(signer: PrivateKeySigner) -> Self {
        Self {
            from: signer.address(),
            signer: Some(EthereumWallet::from(signer)),
            ..Self::default()
        }
    }

    pub fn with_value(mut self, value: U256) -> Self {
        self.value = value;
        self
    }

    pub fn with_gas_limit(mut self, gas_limit: u64) -> Self {
        self.gas_limit = Some(gas_limit);
        self
    }

    pub fn with_nonce(mut self, nonce: u64) -> Self {
        self.nonce = Some(nonce);
        self
    }

    pub fn with_context(mut self, context: Context) -> Self {
        self.context = context;
        self
    }
}

impl fmt::Debug for TransactOpts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransactOpts")
            .field("from", &self.from)
            .field("signer", &redact_option(&self.signer))
            .field("nonce", &self.nonce)
            .field("value", &self.value)
            .field("gas_limit", &self.gas_limit)
            .field("gas_price", &self.gas_price)
            .field("max_fee_per_gas", &self.max_fee_per_gas)
            .field("max_priority_fee_per_gas", &self.max_priority_fee_per_gas)
            .field("access_list", &self.access_list)
            .field("context", &self.context)
            .finish()
    }
}

/// Options for a finite historical log query.
#[derive(Debug, Clone, Default)]
pub struct FilterOpts {
    pub start: u64,
    /// Inclusive end block; `None` means up to the latest block
    pub end: Option<u64>,
    pub context: Context,
}

impl FilterOpts {
    pub fn range(start: u64, end: Option<u64>) -> Self {
        Self {
            start,
            end,
            ..Self::default()
        }
    }
}

/// Options for a live log subscription.
#[derive(Debug, Clone, Default)]
pub struct WatchOpts {
    /// First block to deliver logs from; `None` starts at the next block
    pub start: Option<u64>,
    pub context: Context,
}
