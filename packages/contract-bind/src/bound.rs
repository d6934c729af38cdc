//! The reflective core shared by every generated binding
//!
//! A [`BoundContract`] pairs an address with an [`AbiDescriptor`] and the
//! capabilities it was bound with. Generated facades are thin wrappers that
//! convert typed arguments and delegate here by method or event key.

use std::sync::Arc;

use alloy::dyn_abi::DynSolValue;
use alloy::primitives::{Address, Bytes};
use alloy::rpc::types::Log;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::abi::AbiDescriptor;
use crate::backend::{
    CallRequest, Caller, Capabilities, Filterer, LogQuery, LogSubscription, Transactor, TxHandle,
};
use crate::context::{self, CancelToken};
use crate::convert::{FieldReader, FromSolValue};
use crate::error::{BindError, Result};
use crate::event::{ContractEvent, EventDecoder, EventIterator, EventRecord};
use crate::options::{CallOpts, FilterOpts, TransactOpts, WatchOpts};

struct Inner {
    address: Address,
    abi: Arc<AbiDescriptor>,
    caps: Capabilities,
}

/// A contract interface bound to an address and a set of capabilities.
///
/// Cheap to clone; clones share the same descriptor and capabilities.
#[derive(Clone)]
pub struct BoundContract {
    inner: Arc<Inner>,
}

impl std::fmt::Debug for BoundContract {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoundContract")
            .field("address", &self.inner.address)
            .field("caps", &self.inner.caps)
            .finish()
    }
}

impl BoundContract {
    pub fn new(address: Address, abi: Arc<AbiDescriptor>, caps: Capabilities) -> Self {
        Self {
            inner: Arc::new(Inner { address, abi, caps }),
        }
    }

    pub fn address(&self) -> Address {
        self.inner.address
    }

    pub fn abi(&self) -> &AbiDescriptor {
        &self.inner.abi
    }

    pub fn capabilities(&self) -> &Capabilities {
        &self.inner.caps
    }

    fn caller(&self) -> Result<&dyn Caller> {
        self.inner
            .caps
            .caller
            .as_deref()
            .ok_or(BindError::MissingCapability("caller"))
    }

    fn transactor(&self) -> Result<&dyn Transactor> {
        self.inner
            .caps
            .transactor
            .as_deref()
            .ok_or(BindError::MissingCapability("transactor"))
    }

    fn filterer(&self) -> Result<&dyn Filterer> {
        self.inner
            .caps
            .filterer
            .as_deref()
            .ok_or(BindError::MissingCapability("filterer"))
    }

    /// Attach decoded custom errors to a revert reported by the transport.
    fn explain(&self, err: BindError) -> BindError {
        match err {
            BindError::ExecutionReverted(revert) if revert.reason.is_none() => {
                BindError::ExecutionReverted(self.inner.abi.decode_revert(revert.data))
            }
            other => other,
        }
    }

    // =========================================================================
    // Calls
    // =========================================================================

    /// Execute a read-only call and decode its outputs in declaration order.
    pub async fn call(
        &self,
        opts: &CallOpts,
        method: &str,
        args: Vec<DynSolValue>,
    ) -> Result<Vec<DynSolValue>> {
        let entry = self.inner.abi.method(method)?;
        let caller = self.caller()?;
        let data = self.inner.abi.encode_call(method, args)?;

        debug!(
            contract = %self.inner.address,
            method = %entry.key,
            selector = %entry.selector,
            block = ?opts.block,
            "Calling contract"
        );

        let request = CallRequest {
            from: opts.from,
            to: self.inner.address,
            data,
            block: opts.block,
        };
        opts.context
            .run(async {
                let output = caller
                    .call_contract(&request)
                    .await
                    .map_err(|e| self.explain(e))?;

                if output.is_empty() && !entry.outputs.is_empty() {
                    let code = caller.code_at(self.inner.address, opts.block).await?;
                    if code.is_empty() {
                        return Err(BindError::NoCode(self.inner.address));
                    }
                }
                self.inner.abi.decode_returns(method, &output)
            })
            .await
    }

    /// Call a method with exactly one output and convert it.
    pub async fn call_single<T: FromSolValue>(
        &self,
        opts: &CallOpts,
        method: &str,
        args: Vec<DynSolValue>,
    ) -> Result<T> {
        let values = self.call(opts, method, args).await?;
        FieldReader::returns(method, values).next("output0")
    }

    // =========================================================================
    // Transactions
    // =========================================================================

    /// Submit a transaction invoking `method`.
    pub async fn transact(
        &self,
        opts: &TransactOpts,
        method: &str,
        args: Vec<DynSolValue>,
    ) -> Result<TxHandle> {
        let entry = self.inner.abi.method(method)?;
        let data = self.inner.abi.encode_call(method, args)?;
        debug!(
            contract = %self.inner.address,
            method = %entry.key,
            selector = %entry.selector,
            from = %opts.from,
            value = %opts.value,
            "Submitting transaction"
        );
        self.send(opts, data).await
    }

    /// Submit arbitrary non-empty calldata, reaching the fallback function.
    pub async fn raw_transact(&self, opts: &TransactOpts, calldata: Bytes) -> Result<TxHandle> {
        if calldata.is_empty() {
            return Err(BindError::type_mismatch(
                "calldata",
                "non-empty calldata",
                "plain value transfers go through transfer()",
            ));
        }
        debug!(contract = %self.inner.address, len = calldata.len(), "Submitting raw transaction");
        self.send(opts, calldata).await
    }

    /// Send value with empty calldata, reaching the receive function.
    pub async fn transfer(&self, opts: &TransactOpts) -> Result<TxHandle> {
        let transactor = self.transactor()?;
        debug!(contract = %self.inner.address, value = %opts.value, "Submitting transfer");
        opts.context
            .run(transactor.send_raw(opts, self.inner.address, Bytes::new()))
            .await
            .map_err(|e| self.explain(e))
    }

    async fn send(&self, opts: &TransactOpts, data: Bytes) -> Result<TxHandle> {
        let transactor = self.transactor()?;
        opts.context
            .run(transactor.send(opts, Some(self.inner.address), data))
            .await
            .map_err(|e| self.explain(e))
    }

    // =========================================================================
    // Logs
    // =========================================================================

    fn query(&self, event: &str, filters: &[Vec<DynSolValue>]) -> Result<LogQuery> {
        Ok(LogQuery {
            address: Some(self.inner.address),
            topics: self.inner.abi.topic_filter(event, filters)?,
            from_block: None,
            to_block: None,
        })
    }

    /// Fetch the historical logs of `event` in a block range.
    pub async fn filter_logs(
        &self,
        opts: &FilterOpts,
        event: &str,
        filters: &[Vec<DynSolValue>],
    ) -> Result<Vec<Log>> {
        let filterer = self.filterer()?;
        let query = LogQuery {
            from_block: Some(opts.start),
            to_block: opts.end,
            ..self.query(event, filters)?
        };
        debug!(
            contract = %self.inner.address,
            event = %event,
            from_block = opts.start,
            to_block = ?opts.end,
            "Filtering logs"
        );
        opts.context.run(filterer.filter_logs(&query)).await
    }

    /// Historical events as a finite iterator.
    pub async fn filter_events<E: ContractEvent>(
        &self,
        opts: &FilterOpts,
        filters: &[Vec<DynSolValue>],
    ) -> Result<EventIterator<E>> {
        let logs = self.filter_logs(opts, E::NAME, filters).await?;
        Ok(EventIterator::new(
            self.clone(),
            E::NAME,
            E::from_record,
            LogSubscription::finished(logs),
            opts.context.cancel.clone(),
        ))
    }

    /// Open a raw live subscription to the logs of `event`.
    pub async fn subscribe_logs(
        &self,
        opts: &WatchOpts,
        event: &str,
        filters: &[Vec<DynSolValue>],
    ) -> Result<LogSubscription> {
        let filterer = self.filterer()?;
        let query = LogQuery {
            from_block: opts.start,
            ..self.query(event, filters)?
        };
        debug!(
            contract = %self.inner.address,
            event = %event,
            start = ?opts.start,
            "Subscribing to logs"
        );
        opts.context.run(filterer.subscribe_logs(&query)).await
    }

    /// Live events as an iterator that ends only on error, cancellation or close.
    pub async fn watch_events<E: ContractEvent>(
        &self,
        opts: &WatchOpts,
        filters: &[Vec<DynSolValue>],
    ) -> Result<EventIterator<E>> {
        let logs = self.subscribe_logs(opts, E::NAME, filters).await?;
        Ok(EventIterator::new(
            self.clone(),
            E::NAME,
            E::from_record,
            logs,
            opts.context.cancel.clone(),
        ))
    }

    /// Push decoded records of `event` into `sink` until unsubscribed.
    pub async fn watch_logs(
        &self,
        opts: &WatchOpts,
        event: &str,
        sink: mpsc::Sender<EventRecord>,
        filters: &[Vec<DynSolValue>],
    ) -> Result<Subscription> {
        self.watch_inner(opts, event, sink, filters, Ok).await
    }

    /// Push typed events into `sink` until unsubscribed.
    pub async fn watch_with<E: ContractEvent>(
        &self,
        opts: &WatchOpts,
        sink: mpsc::Sender<E>,
        filters: &[Vec<DynSolValue>],
    ) -> Result<Subscription> {
        self.watch_inner(opts, E::NAME, sink, filters, E::from_record)
            .await
    }

    async fn watch_inner<T: Send + 'static>(
        &self,
        opts: &WatchOpts,
        event: &str,
        sink: mpsc::Sender<T>,
        filters: &[Vec<DynSolValue>],
        decode: EventDecoder<T>,
    ) -> Result<Subscription> {
        let mut logs = self.subscribe_logs(opts, event, filters).await?;
        let contract = self.clone();
        let event = event.to_string();
        let cancel = opts.context.cancel.clone();

        Ok(Subscription::spawn(move |stop, errors| async move {
            loop {
                let item = tokio::select! {
                    biased;
                    _ = stop.cancelled() => break,
                    _ = context::cancelled(cancel.as_ref()) => {
                        let _ = errors.send(BindError::Cancelled);
                        break;
                    }
                    item = logs.next() => item,
                };

                let log = match item {
                    Some(Ok(log)) => log,
                    Some(Err(err)) => {
                        let _ = errors.send(err);
                        break;
                    }
                    None => break,
                };

                let decoded = contract.unpack_log(&event, &log).and_then(decode);
                let value = match decoded {
                    Ok(value) => value,
                    Err(err) => {
                        warn!(event = %event, error = %err, "Failed to decode log");
                        let _ = errors.send(err);
                        break;
                    }
                };

                // a full sink must not keep the task from seeing cancellation
                tokio::select! {
                    biased;
                    _ = stop.cancelled() => break,
                    _ = context::cancelled(cancel.as_ref()) => {
                        let _ = errors.send(BindError::Cancelled);
                        break;
                    }
                    sent = sink.send(value) => {
                        if sent.is_err() {
                            debug!(event = %event, "Event sink dropped");
                            break;
                        }
                    }
                }
            }
            logs.unsubscribe();
        }))
    }

    /// Decode a single log against `event`.
    pub fn unpack_log(&self, event: &str, log: &Log) -> Result<EventRecord> {
        let entry = self.inner.abi.event(event)?;
        let fields = self.inner.abi.decode_log(event, log.data())?;
        Ok(EventRecord {
            name: entry.key.clone(),
            fields,
            raw: log.clone(),
        })
    }
}

// =============================================================================
// Subscription
// =============================================================================

/// Handle to a background task forwarding events into a sink.
///
/// The task ends on unsubscribe, on a subscription or decoding error, when the
/// watch context is cancelled, or when the sink is dropped. It always releases
/// the underlying log subscription. Dropping the handle unsubscribes.
#[derive(Debug)]
pub struct Subscription {
    stop: CancelToken,
    errors: Option<oneshot::Receiver<BindError>>,
    task: Option<JoinHandle<()>>,
}

impl Subscription {
    fn spawn<F, Fut>(forward: F) -> Self
    where
        F: FnOnce(CancelToken, oneshot::Sender<BindError>) -> Fut,
        Fut: std::future::Future<Output = ()> + Send + 'static,
    {
        let stop = CancelToken::new();
        let (tx, errors) = oneshot::channel();
        let task = tokio::spawn(forward(stop.clone(), tx));
        Self {
            stop,
            errors: Some(errors),
            task: Some(task),
        }
    }

    /// Wait for the forwarding task to end. Returns its terminal error, or
    /// `None` when it ended because of an unsubscribe or a closed sink.
    pub async fn err(&mut self) -> Option<BindError> {
        self.errors.take()?.await.ok()
    }

    /// Stop forwarding and wait for the task to release its subscription.
    pub async fn unsubscribe(&mut self) {
        self.stop.cancel();
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
    }

    pub fn is_finished(&self) -> bool {
        self.task.as_ref().map_or(true, JoinHandle::is_finished)
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.stop.cancel();
    }
}
