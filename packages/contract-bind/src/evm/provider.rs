//! Capabilities served by an alloy JSON-RPC provider
//!
//! [`ProviderBackend`] implements every capability trait on top of a
//! [`Provider`]. Transactions are filled here (nonce, gas, fees) and signed
//! locally when the options carry a wallet, otherwise handed to the node for
//! signing.

use std::marker::PhantomData;

use alloy::network::TransactionBuilder;
use alloy::primitives::{Address, Bytes, B256};
use alloy::providers::{Provider, ProviderBuilder, RootProvider};
use alloy::rpc::types::{Log, TransactionRequest};
use alloy::transports::http::{Client, Http};
use alloy::transports::{BoxTransport, Transport, TransportError};
use async_trait::async_trait;
use tracing::{debug, info};

use crate::abi::decode_revert;
use crate::backend::{
    CallRequest, Caller, DeployBackend, Filterer, LogQuery, LogSubscription, Transactor, TxHandle,
    TxReceipt, DEFAULT_LOG_BUFFER,
};
use crate::error::{BindError, Result, Revert, RevertReason};
use crate::evm::watcher::{LogPoller, WatcherConfig};
use crate::options::{BlockSelector, TransactOpts};

/// Backend over a JSON-RPC provider.
#[derive(Debug, Clone)]
pub struct ProviderBackend<P, T = BoxTransport> {
    provider: P,
    watcher: WatcherConfig,
    _transport: PhantomData<fn() -> T>,
}

impl ProviderBackend<RootProvider<Http<Client>>, Http<Client>> {
    /// Connect to an HTTP endpoint (e.g. `http://localhost:8545`).
    pub fn connect_http(rpc_url: &str) -> Result<Self> {
        let url = rpc_url
            .parse()
            .map_err(|e| BindError::Transport(format!("invalid RPC URL: {e}")))?;
        let provider = ProviderBuilder::new().on_http(url);

        info!(rpc_url = %rpc_url, "Connected provider backend");
        Ok(Self::new(provider))
    }
}

impl<P, T> ProviderBackend<P, T>
where
    P: Provider<T> + Clone + 'static,
    T: Transport + Clone,
{
    pub fn new(provider: P) -> Self {
        Self::with_watcher(provider, WatcherConfig::default())
    }

    pub fn with_watcher(provider: P, watcher: WatcherConfig) -> Self {
        Self {
            provider,
            watcher,
            _transport: PhantomData,
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    fn poller(&self) -> LogPoller<P, T> {
        LogPoller::with_config(self.provider.clone(), self.watcher.clone())
    }

    // =========================================================================
    // Transaction Filling
    // =========================================================================

    async fn fill(
        &self,
        opts: &TransactOpts,
        to: Option<Address>,
        data: Bytes,
    ) -> Result<(TransactionRequest, u64)> {
        let nonce = match opts.nonce {
            Some(nonce) => nonce,
            None => self
                .provider
                .get_transaction_count(opts.from)
                .pending()
                .await
                .map_err(rpc_error)?,
        };

        let mut tx = TransactionRequest::default()
            .with_from(opts.from)
            .with_nonce(nonce)
            .with_value(opts.value);
        tx = match to {
            Some(to) => tx.with_to(to).with_input(data),
            None => tx.with_deploy_code(data),
        };
        if let Some(access_list) = &opts.access_list {
            tx = tx.with_access_list(access_list.clone());
        }

        match opts.gas_price {
            Some(gas_price) => tx = tx.with_gas_price(gas_price),
            None => {
                let (max_fee, priority_fee) =
                    match (opts.max_fee_per_gas, opts.max_priority_fee_per_gas) {
                        (Some(max_fee), Some(priority_fee)) => (max_fee, priority_fee),
                        (max_fee, priority_fee) => {
                            let estimate = self
                                .provider
                                .estimate_eip1559_fees(None)
                                .await
                                .map_err(rpc_error)?;
                            (
                                max_fee.unwrap_or(estimate.max_fee_per_gas),
                                priority_fee.unwrap_or(estimate.max_priority_fee_per_gas),
                            )
                        }
                    };
                tx = tx
                    .with_max_fee_per_gas(max_fee)
                    .with_max_priority_fee_per_gas(priority_fee);
            }
        }

        let gas_limit = match opts.gas_limit {
            Some(gas_limit) => gas_limit,
            None => self.provider.estimate_gas(&tx).await.map_err(rpc_error)?,
        };
        Ok((tx.with_gas_limit(gas_limit), nonce))
    }
}

// =============================================================================
// Capabilities
// =============================================================================

#[async_trait]
impl<P, T> Caller for ProviderBackend<P, T>
where
    P: Provider<T> + Clone + 'static,
    T: Transport + Clone,
{
    async fn call_contract(&self, request: &CallRequest) -> Result<Bytes> {
        let mut tx = TransactionRequest::default()
            .with_to(request.to)
            .with_input(request.data.clone());
        if let Some(from) = request.from {
            tx = tx.with_from(from);
        }
        self.provider
            .call(&tx)
            .block(request.block.into())
            .await
            .map_err(rpc_error)
    }

    async fn code_at(&self, address: Address, block: BlockSelector) -> Result<Bytes> {
        self.provider
            .get_code_at(address)
            .block_id(block.into())
            .await
            .map_err(rpc_error)
    }
}

#[async_trait]
impl<P, T> Transactor for ProviderBackend<P, T>
where
    P: Provider<T> + Clone + 'static,
    T: Transport + Clone,
{
    async fn send(&self, opts: &TransactOpts, to: Option<Address>, data: Bytes) -> Result<TxHandle> {
        let (tx, nonce) = self.fill(opts, to, data.clone()).await?;

        let hash = match &opts.signer {
            Some(wallet) => {
                let chain_id = self.provider.get_chain_id().await.map_err(rpc_error)?;
                let envelope = tx
                    .with_chain_id(chain_id)
                    .build(wallet)
                    .await
                    .map_err(|e| BindError::Transport(format!("failed to sign transaction: {e}")))?;
                *self
                    .provider
                    .send_tx_envelope(envelope)
                    .await
                    .map_err(rpc_error)?
                    .tx_hash()
            }
            None => *self
                .provider
                .send_transaction(tx)
                .await
                .map_err(rpc_error)?
                .tx_hash(),
        };

        debug!(
            tx_hash = %hash,
            from = %opts.from,
            to = ?to,
            nonce,
            "Transaction submitted"
        );

        Ok(TxHandle {
            hash,
            from: opts.from,
            nonce,
            to,
            value: opts.value,
            input: data,
        })
    }
}

#[async_trait]
impl<P, T> Filterer for ProviderBackend<P, T>
where
    P: Provider<T> + Clone + 'static,
    T: Transport + Clone,
{
    async fn filter_logs(&self, query: &LogQuery) -> Result<Vec<Log>> {
        let poller = self.poller();
        let to_block = match query.to_block {
            Some(to_block) => to_block,
            None => poller.get_current_block().await?,
        };
        poller
            .get_logs(query, query.from_block.unwrap_or(0), to_block)
            .await
    }

    async fn subscribe_logs(&self, query: &LogQuery) -> Result<LogSubscription> {
        let poller = self.poller();
        let start = match query.from_block {
            Some(start) => start,
            None => poller.get_current_block().await? + 1,
        };
        let (feed, subscription) = LogSubscription::channel(DEFAULT_LOG_BUFFER);
        tokio::spawn(poller.run(query.clone(), start, feed));
        Ok(subscription)
    }
}

#[async_trait]
impl<P, T> DeployBackend for ProviderBackend<P, T>
where
    P: Provider<T> + Clone + 'static,
    T: Transport + Clone,
{
    async fn receipt(&self, hash: B256) -> Result<Option<TxReceipt>> {
        let receipt = self
            .provider
            .get_transaction_receipt(hash)
            .await
            .map_err(rpc_error)?;
        Ok(receipt.map(|receipt| TxReceipt {
            transaction_hash: receipt.transaction_hash,
            block_number: receipt.block_number,
            status: receipt.status(),
            contract_address: receipt.contract_address,
            logs: receipt.inner.logs().to_vec(),
        }))
    }
}

// =============================================================================
// Error Mapping
// =============================================================================

/// Map a JSON-RPC failure, recognising execution reverts.
pub fn rpc_error(err: TransportError) -> BindError {
    if let Some(payload) = err.as_error_resp() {
        if let Some(data) = payload.as_revert_data() {
            return BindError::ExecutionReverted(decode_revert(data, None));
        }
        if let Some(rest) = payload.message.strip_prefix("execution reverted") {
            let reason = rest.trim_start_matches(':').trim();
            return BindError::ExecutionReverted(Revert {
                data: Bytes::new(),
                reason: (!reason.is_empty()).then(|| RevertReason::Message(reason.to_string())),
            });
        }
    }
    BindError::transport(err)
}
