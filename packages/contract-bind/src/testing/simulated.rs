//! In-process simulated chain
//!
//! [`SimulatedBackend`] implements every capability trait without a node.
//! Contracts are Rust objects implementing [`SimulatedContract`]; creation
//! bytecode is mapped to a factory with [`SimulatedBackend::register_artifact`].
//! Every transaction is mined into its own block immediately.
//!
//! Transactions without an explicit gas limit are "estimated" first: a revert
//! is reported as [`BindError::ExecutionReverted`] and nothing is mined, as a
//! node's gas estimation would. With a gas limit the transaction is mined with
//! a failed receipt instead.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use alloy::primitives::{keccak256, Address, Bytes, LogData, B256, U256};
use alloy::rpc::types::Log;
use async_trait::async_trait;
use tokio::sync::broadcast;
use tokio::sync::broadcast::error::RecvError;
use tracing::debug;

use crate::abi::decode_revert;
use crate::backend::{
    CallRequest, Caller, DeployBackend, Filterer, LogQuery, LogSubscription, Transactor, TxHandle,
    TxReceipt, DEFAULT_LOG_BUFFER,
};
use crate::error::{BindError, Result, Revert};
use crate::options::{BlockSelector, TransactOpts};

/// Chain id reported by the simulated chain (same as a local dev node).
pub const SIMULATED_CHAIN_ID: u64 = 1337;

/// Seconds between consecutive simulated blocks.
pub const BLOCK_TIME: u64 = 12;

const GENESIS_TIMESTAMP: u64 = 1_700_000_000;
const EVENT_BUFFER: usize = 1024;

/// Execution environment handed to a simulated contract.
#[derive(Debug)]
pub struct CallEnv<'a> {
    pub address: Address,
    pub sender: Address,
    pub value: U256,
    pub input: &'a [u8],
    /// Set for `eth_call`; state changes are discarded either way
    pub is_static: bool,
    pub block_number: u64,
    pub timestamp: u64,
    logs: Vec<LogData>,
}

impl CallEnv<'_> {
    /// Record a log emitted by the executing contract.
    pub fn emit(&mut self, log: LogData) {
        self.logs.push(log);
    }
}

/// A contract implemented in Rust.
///
/// Execution runs against a snapshot which is committed only when the
/// transaction succeeds, so handlers may mutate state before reverting.
pub trait SimulatedContract: Send + Sync {
    /// Handle a call. `Err` reverts with the given payload.
    fn execute(&mut self, env: &mut CallEnv<'_>) -> std::result::Result<Bytes, Revert>;

    /// Independent copy of the current state.
    fn snapshot(&self) -> Box<dyn SimulatedContract>;
}

/// Builds a contract from its ABI-encoded constructor arguments.
pub type ContractFactory = Box<
    dyn Fn(&[u8], &CallEnv<'_>) -> std::result::Result<Box<dyn SimulatedContract>, Revert>
        + Send
        + Sync,
>;

#[derive(Debug, Clone)]
enum ChainEvent {
    Log(Log),
    Fault(BindError),
}

struct Chain {
    block_number: u64,
    timestamp: u64,
    pending_time: u64,
    nonces: HashMap<Address, u64>,
    balances: HashMap<Address, U256>,
    code: HashMap<Address, Bytes>,
    contracts: HashMap<Address, Box<dyn SimulatedContract>>,
    logs: Vec<Log>,
    receipts: HashMap<B256, TxReceipt>,
}

/// In-memory chain implementing every capability.
pub struct SimulatedBackend {
    chain: Mutex<Chain>,
    artifacts: Mutex<Vec<(Vec<u8>, ContractFactory)>>,
    events: broadcast::Sender<ChainEvent>,
}

impl Default for SimulatedBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SimulatedBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let chain = self.chain();
        f.debug_struct("SimulatedBackend")
            .field("block_number", &chain.block_number)
            .field("contracts", &chain.contracts.len())
            .field("logs", &chain.logs.len())
            .finish()
    }
}

fn block_hash(number: u64) -> B256 {
    keccak256(number.to_be_bytes())
}

impl SimulatedBackend {
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(EVENT_BUFFER);
        Self {
            chain: Mutex::new(Chain {
                block_number: 0,
                timestamp: GENESIS_TIMESTAMP,
                pending_time: 0,
                nonces: HashMap::new(),
                balances: HashMap::new(),
                code: HashMap::new(),
                contracts: HashMap::new(),
                logs: Vec::new(),
                receipts: HashMap::new(),
            }),
            artifacts: Mutex::new(Vec::new()),
            events,
        }
    }

    fn chain(&self) -> MutexGuard<'_, Chain> {
        self.chain.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // =========================================================================
    // Setup
    // =========================================================================

    /// Map creation bytecode to a contract factory. Deployments whose calldata
    /// starts with `bytecode` are built by `factory` from the remaining bytes.
    pub fn register_artifact<F>(&self, bytecode: impl Into<Vec<u8>>, factory: F)
    where
        F: Fn(&[u8], &CallEnv<'_>) -> std::result::Result<Box<dyn SimulatedContract>, Revert>
            + Send
            + Sync
            + 'static,
    {
        self.artifacts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((bytecode.into(), Box::new(factory)));
    }

    /// Place a contract at `address` without a deployment transaction.
    pub fn install(&self, address: Address, contract: Box<dyn SimulatedContract>) {
        let mut chain = self.chain();
        chain.code.insert(address, Bytes::from_static(&[0xfe]));
        chain.contracts.insert(address, contract);
    }

    /// Let `seconds` pass before the next block.
    pub fn advance_time(&self, seconds: u64) {
        self.chain().pending_time += seconds;
    }

    pub fn block_number(&self) -> u64 {
        self.chain().block_number
    }

    pub fn timestamp(&self) -> u64 {
        self.chain().timestamp
    }

    pub fn chain_id(&self) -> u64 {
        SIMULATED_CHAIN_ID
    }

    pub fn nonce(&self, address: Address) -> u64 {
        self.chain().nonces.get(&address).copied().unwrap_or(0)
    }

    /// Value received by `address` through transactions.
    pub fn balance(&self, address: Address) -> U256 {
        self.chain().balances.get(&address).copied().unwrap_or_default()
    }

    /// Number of live log subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.events.receiver_count()
    }

    /// Terminate every live subscription with `err`.
    pub fn fail_subscriptions(&self, err: BindError) {
        let _ = self.events.send(ChainEvent::Fault(err));
    }

    // =========================================================================
    // Execution
    // =========================================================================

    fn read(&self, request: &CallRequest) -> Result<Bytes> {
        let chain = self.chain();
        let Some(contract) = chain.contracts.get(&request.to) else {
            return Ok(Bytes::new());
        };
        let mut contract = contract.snapshot();
        let mut env = CallEnv {
            address: request.to,
            sender: request.from.unwrap_or(Address::ZERO),
            value: U256::ZERO,
            input: &request.data,
            is_static: true,
            block_number: chain.block_number,
            timestamp: chain.timestamp,
            logs: Vec::new(),
        };
        contract
            .execute(&mut env)
            .map_err(|revert| BindError::ExecutionReverted(decode_revert(revert.data, None)))
    }

    fn apply(&self, opts: &TransactOpts, to: Option<Address>, data: Bytes) -> Result<TxHandle> {
        let mut chain = self.chain();
        let from = opts.from;
        let expected = chain.nonces.get(&from).copied().unwrap_or(0);
        let nonce = opts.nonce.unwrap_or(expected);
        if nonce != expected {
            return Err(BindError::Transport(format!(
                "invalid nonce for {from}: expected {expected}, got {nonce}"
            )));
        }

        let number = chain.block_number + 1;
        let timestamp = chain.timestamp + BLOCK_TIME + chain.pending_time;
        let target = to.unwrap_or_else(|| from.create(nonce));

        let mut preimage = from.to_vec();
        preimage.extend(nonce.to_be_bytes());
        preimage.extend(data.iter());
        let hash = keccak256(preimage);

        let mut env = CallEnv {
            address: target,
            sender: from,
            value: opts.value,
            input: &[],
            is_static: false,
            block_number: number,
            timestamp,
            logs: Vec::new(),
        };

        let outcome = match to {
            None => {
                let artifacts = self.artifacts.lock().unwrap_or_else(PoisonError::into_inner);
                let (code, factory) = artifacts
                    .iter()
                    .filter(|(code, _)| data.starts_with(code))
                    .max_by_key(|(code, _)| code.len())
                    .ok_or_else(|| {
                        BindError::Transport("no simulated artifact matches the creation code".into())
                    })?;
                env.input = &data[code.len()..];
                factory(env.input, &env).map(|contract| {
                    chain.code.insert(target, Bytes::from(code.clone()));
                    chain.contracts.insert(target, contract);
                })
            }
            Some(address) => {
                env.input = &data;
                match chain.contracts.get(&address) {
                    Some(contract) => {
                        let mut working = contract.snapshot();
                        working.execute(&mut env).map(|_| {
                            chain.contracts.insert(address, working);
                        })
                    }
                    None => Ok(()),
                }
            }
        };

        let status = match outcome {
            Ok(()) => true,
            Err(revert) if opts.gas_limit.is_none() => {
                debug!(tx_hash = %hash, "Simulated transaction reverted during estimation");
                return Err(BindError::ExecutionReverted(decode_revert(revert.data, None)));
            }
            Err(_) => false,
        };

        // Mine the block.
        chain.block_number = number;
        chain.timestamp = timestamp;
        chain.pending_time = 0;
        chain.nonces.insert(from, nonce + 1);

        let mut logs = Vec::new();
        if status {
            *chain.balances.entry(target).or_default() += opts.value;
            for (index, data) in std::mem::take(&mut env.logs).into_iter().enumerate() {
                logs.push(Log {
                    inner: alloy::primitives::Log {
                        address: target,
                        data,
                    },
                    block_hash: Some(block_hash(number)),
                    block_number: Some(number),
                    block_timestamp: Some(timestamp),
                    transaction_hash: Some(hash),
                    transaction_index: Some(0),
                    log_index: Some(index as u64),
                    removed: false,
                });
            }
        }
        chain.logs.extend(logs.iter().cloned());
        chain.receipts.insert(
            hash,
            TxReceipt {
                transaction_hash: hash,
                block_number: Some(number),
                status,
                contract_address: if to.is_none() && status {
                    Some(target)
                } else {
                    None
                },
                logs: logs.clone(),
            },
        );

        debug!(
            tx_hash = %hash,
            block = number,
            status,
            logs = logs.len(),
            "Simulated transaction mined"
        );
        for log in logs {
            let _ = self.events.send(ChainEvent::Log(log));
        }

        Ok(TxHandle {
            hash,
            from,
            nonce,
            to,
            value: opts.value,
            input: data.clone(),
        })
    }
}

// =============================================================================
// Capabilities
// =============================================================================

#[async_trait]
impl Caller for SimulatedBackend {
    async fn call_contract(&self, request: &CallRequest) -> Result<Bytes> {
        self.read(request)
    }

    async fn code_at(&self, address: Address, _block: BlockSelector) -> Result<Bytes> {
        Ok(self.chain().code.get(&address).cloned().unwrap_or_default())
    }
}

#[async_trait]
impl Transactor for SimulatedBackend {
    async fn send(&self, opts: &TransactOpts, to: Option<Address>, data: Bytes) -> Result<TxHandle> {
        self.apply(opts, to, data)
    }
}

#[async_trait]
impl Filterer for SimulatedBackend {
    async fn filter_logs(&self, query: &LogQuery) -> Result<Vec<Log>> {
        Ok(self
            .chain()
            .logs
            .iter()
            .filter(|log| query.matches(log))
            .cloned()
            .collect())
    }

    async fn subscribe_logs(&self, query: &LogQuery) -> Result<LogSubscription> {
        let (history, mut events) = {
            let chain = self.chain();
            let history: Vec<Log> = match query.from_block {
                Some(_) => chain
                    .logs
                    .iter()
                    .filter(|log| query.matches(log))
                    .cloned()
                    .collect(),
                None => Vec::new(),
            };
            (history, self.events.subscribe())
        };

        let (feed, subscription) = LogSubscription::channel(DEFAULT_LOG_BUFFER);
        let query = query.clone();
        tokio::spawn(async move {
            for log in history {
                if !feed.send(log).await {
                    return;
                }
            }
            loop {
                let event = tokio::select! {
                    _ = feed.closed() => return,
                    event = events.recv() => event,
                };
                match event {
                    Ok(ChainEvent::Log(log)) => {
                        if query.matches(&log) && !feed.send(log).await {
                            return;
                        }
                    }
                    Ok(ChainEvent::Fault(err)) => {
                        feed.fail(err).await;
                        return;
                    }
                    Err(RecvError::Lagged(missed)) => {
                        feed.fail(BindError::Transport(format!(
                            "subscription lagged behind by {missed} logs"
                        )))
                        .await;
                        return;
                    }
                    Err(RecvError::Closed) => return,
                }
            }
        });
        Ok(subscription)
    }
}

#[async_trait]
impl DeployBackend for SimulatedBackend {
    async fn receipt(&self, hash: B256) -> Result<Option<TxReceipt>> {
        Ok(self.chain().receipts.get(&hash).cloned())
    }
}
