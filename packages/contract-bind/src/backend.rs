//! Transport capabilities consumed by bound contracts
//!
//! A bound contract never talks to a node directly. Reads go through a
//! [`Caller`], transactions through a [`Transactor`] and log access through a
//! [`Filterer`]. Any of the three may be absent; operations that need a missing
//! capability fail with [`BindError::MissingCapability`].

use std::sync::Arc;

use alloy::primitives::{Address, Bytes, B256, U256};
use alloy::rpc::types::Log;
use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::error::{BindError, Result};
use crate::options::{BlockSelector, TransactOpts};

/// Default buffer between a log producer and its subscriber.
pub const DEFAULT_LOG_BUFFER: usize = 256;

// =============================================================================
// Requests and handles
// =============================================================================

/// A read-only call request.
#[derive(Debug, Clone, PartialEq)]
pub struct CallRequest {
    pub from: Option<Address>,
    pub to: Address,
    pub data: Bytes,
    pub block: BlockSelector,
}

/// A submitted transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct TxHandle {
    pub hash: B256,
    pub from: Address,
    pub nonce: u64,
    /// `None` for contract creation
    pub to: Option<Address>,
    pub value: U256,
    pub input: Bytes,
}

impl TxHandle {
    /// Address a creation transaction deploys to.
    pub fn contract_address(&self) -> Option<Address> {
        match self.to {
            None => Some(self.from.create(self.nonce)),
            Some(_) => None,
        }
    }
}

/// Outcome of a mined transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct TxReceipt {
    pub transaction_hash: B256,
    pub block_number: Option<u64>,
    pub status: bool,
    pub contract_address: Option<Address>,
    pub logs: Vec<Log>,
}

/// Address and topic restrictions for a log query.
///
/// `topics[i]` lists the accepted values at position `i`; an empty list
/// accepts anything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogQuery {
    pub address: Option<Address>,
    pub topics: Vec<Vec<B256>>,
    pub from_block: Option<u64>,
    pub to_block: Option<u64>,
}

impl LogQuery {
    pub fn matches(&self, log: &Log) -> bool {
        if self.address.is_some_and(|address| address != log.address()) {
            return false;
        }
        if let Some(number) = log.block_number {
            if self.from_block.is_some_and(|from| number < from)
                || self.to_block.is_some_and(|to| number > to)
            {
                return false;
            }
        }
        let topics = log.topics();
        self.topics.iter().enumerate().all(|(i, accepted)| {
            accepted.is_empty() || topics.get(i).is_some_and(|t| accepted.contains(t))
        })
    }
}

// =============================================================================
// Log subscriptions
// =============================================================================

/// Consumer side of a log stream.
///
/// Logs arrive in chain order. A producer failure is delivered once, after
/// every log sent before it.
#[derive(Debug)]
pub struct LogSubscription {
    rx: mpsc::Receiver<Result<Log>>,
    unsubscribed: bool,
}

/// Producer side of a log stream.
#[derive(Debug, Clone)]
pub struct LogFeed {
    tx: mpsc::Sender<Result<Log>>,
}

impl LogSubscription {
    pub fn channel(capacity: usize) -> (LogFeed, LogSubscription) {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        (
            LogFeed { tx },
            LogSubscription {
                rx,
                unsubscribed: false,
            },
        )
    }

    /// A finite stream that yields `logs` and then ends.
    pub fn finished(logs: Vec<Log>) -> Self {
        let (tx, rx) = mpsc::channel(logs.len().max(1));
        for log in logs {
            // Capacity covers every log, so this cannot fail.
            let _ = tx.try_send(Ok(log));
        }
        LogSubscription {
            rx,
            unsubscribed: false,
        }
    }

    /// Wait for the next log. `None` once the stream has ended.
    pub async fn next(&mut self) -> Option<Result<Log>> {
        self.rx.recv().await
    }

    /// Take a buffered log without waiting.
    pub fn try_next(&mut self) -> Option<Log> {
        match self.rx.try_recv() {
            Ok(Ok(log)) => Some(log),
            _ => None,
        }
    }

    /// Stop the producer. Buffered logs stay readable. Idempotent.
    pub fn unsubscribe(&mut self) {
        if !self.unsubscribed {
            self.unsubscribed = true;
            self.rx.close();
        }
    }

    pub fn is_unsubscribed(&self) -> bool {
        self.unsubscribed
    }
}

impl LogFeed {
    /// Deliver a log. Returns `false` once the subscriber has gone away.
    pub async fn send(&self, log: Log) -> bool {
        self.tx.send(Ok(log)).await.is_ok()
    }

    /// End the stream with a terminal error.
    pub async fn fail(self, err: BindError) {
        let _ = self.tx.send(Err(err)).await;
    }

    /// Resolves when the subscriber unsubscribes or is dropped.
    pub async fn closed(&self) {
        self.tx.closed().await
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

// =============================================================================
// Capabilities
// =============================================================================

/// Read access: `eth_call` and code lookups.
#[async_trait]
pub trait Caller: Send + Sync {
    async fn call_contract(&self, request: &CallRequest) -> Result<Bytes>;

    async fn code_at(&self, address: Address, block: BlockSelector) -> Result<Bytes>;
}

/// Write access: sign and submit transactions.
#[async_trait]
pub trait Transactor: Send + Sync {
    /// Submit a transaction. `to = None` creates a contract from `data`.
    async fn send(&self, opts: &TransactOpts, to: Option<Address>, data: Bytes)
        -> Result<TxHandle>;

    /// Submit a transaction whose calldata is passed through untouched,
    /// possibly empty.
    async fn send_raw(&self, opts: &TransactOpts, to: Address, data: Bytes) -> Result<TxHandle> {
        self.send(opts, Some(to), data).await
    }
}

/// Log access: historical queries and live subscriptions.
#[async_trait]
pub trait Filterer: Send + Sync {
    async fn filter_logs(&self, query: &LogQuery) -> Result<Vec<Log>>;

    /// Stream logs matching `query` starting at `query.from_block` (or the
    /// next block when unset) until unsubscribed.
    async fn subscribe_logs(&self, query: &LogQuery) -> Result<LogSubscription>;
}

/// Receipt lookups, used to wait for transactions and deployments.
#[async_trait]
pub trait DeployBackend: Caller {
    async fn receipt(&self, hash: B256) -> Result<Option<TxReceipt>>;
}

/// A backend offering every capability.
pub trait ContractBackend: Caller + Transactor + Filterer {}

impl<T: Caller + Transactor + Filterer> ContractBackend for T {}

/// The capability references a bound contract holds.
#[derive(Clone, Default)]
pub struct Capabilities {
    pub caller: Option<Arc<dyn Caller>>,
    pub transactor: Option<Arc<dyn Transactor>>,
    pub filterer: Option<Arc<dyn Filterer>>,
}

impl Capabilities {
    pub fn new() -> Self {
        Self::default()
    }

    /// All three capabilities served by one backend.
    pub fn from_backend<B: ContractBackend + 'static>(backend: Arc<B>) -> Self {
        Self {
            caller: Some(backend.clone()),
            transactor: Some(backend.clone()),
            filterer: Some(backend),
        }
    }

    pub fn with_caller(mut self, caller: Arc<dyn Caller>) -> Self {
        self.caller = Some(caller);
        self
    }

    pub fn with_transactor(mut self, transactor: Arc<dyn Transactor>) -> Self {
        self.transactor = Some(transactor);
        self
    }

    pub fn with_filterer(mut self, filterer: Arc<dyn Filterer>) -> Self {
        self.filterer = Some(filterer);
        self
    }
}

impl std::fmt::Debug for Capabilities {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Capabilities")
            .field("caller", &self.caller.is_some())
            .field("transactor", &self.transactor.is_some())
            .field("filterer", &self.filterer.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::LogData;

    fn log(address: Address, topics: Vec<B256>, block: u64) -> Log {
        Log {
            inner: alloy::primitives::Log {
                address,
                data: LogData::new_unchecked(topics, Bytes::new()),
            },
            block_number: Some(block),
            ..Default::default()
        }
    }

    #[test]
    fn test_contract_address_for_creation() {
        let from = Address::repeat_byte(0x42);
        let tx = TxHandle {
            hash: B256::ZERO,
            from,
            nonce: 3,
            to: None,
            value: U256::ZERO,
            input: Bytes::new(),
        };
        assert_eq!(tx.contract_address(), Some(from.create(3)));

        let call = TxHandle {
            to: Some(Address::ZERO),
            ..tx
        };
        assert_eq!(call.contract_address(), None);
    }

    #[test]
    fn test_query_matching_is_and_of_ors() {
        let a = B256::repeat_byte(0xaa);
        let b = B256::repeat_byte(0xbb);
        let sig = B256::repeat_byte(0x01);
        let address = Address::repeat_byte(0x09);

        let query = LogQuery {
            address: Some(address),
            topics: vec![vec![sig], vec![a, b], vec![]],
            from_block: Some(5),
            to_block: None,
        };

        assert!(query.matches(&log(address, vec![sig, a, b], 5)));
        assert!(query.matches(&log(address, vec![sig, b, a], 9)));
        assert!(!query.matches(&log(address, vec![sig, sig], 9)));
        assert!(!query.matches(&log(address, vec![sig, a], 4)));
        assert!(!query.matches(&log(Address::ZERO, vec![sig, a], 9)));
    }

    #[tokio::test]
    async fn test_finished_subscription_drains_then_ends() {
        let logs = vec![
            log(Address::ZERO, vec![], 1),
            log(Address::ZERO, vec![], 2),
        ];
        let mut sub = LogSubscription::finished(logs);
        assert_eq!(sub.next().await.unwrap().unwrap().block_number, Some(1));
        assert_eq!(sub.try_next().unwrap().block_number, Some(2));
        assert!(sub.next().await.is_none());
    }

    #[tokio::test]
    async fn test_feed_sees_unsubscribe() {
        let (feed, mut sub) = LogSubscription::channel(4);
        assert!(feed.send(log(Address::ZERO, vec![], 1)).await);

        sub.unsubscribe();
        sub.unsubscribe();
        feed.closed().await;
        assert!(feed.is_closed());
        assert!(!feed.send(log(Address::ZERO, vec![], 2)).await);

        // buffered before the close
        assert!(sub.try_next().is_some());
    }

    #[tokio::test]
    async fn test_failure_follows_buffered_logs() {
        let (feed, mut sub) = LogSubscription::channel(4);
        assert!(feed.send(log(Address::ZERO, vec![], 1)).await);
        feed.fail(BindError::Transport("socket closed".into())).await;

        assert!(sub.next().await.unwrap().is_ok());
        assert_eq!(
            sub.next().await.unwrap(),
            Err(BindError::Transport("socket closed".into()))
        );
        assert!(sub.next().await.is_none());
    }
}
