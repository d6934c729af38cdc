//! Decoded events and the pull-style event iterator

use alloy::dyn_abi::DynSolValue;
use alloy::primitives::B256;
use alloy::rpc::types::Log;
use tracing::debug;

use crate::backend::LogSubscription;
use crate::bound::BoundContract;
use crate::context::{self, CancelToken};
use crate::convert::FieldReader;
use crate::error::{BindError, Result};

/// One decoded event field.
#[derive(Debug, Clone, PartialEq)]
pub struct EventField {
    pub name: String,
    pub value: DynSolValue,
    pub indexed: bool,
}

/// A log decoded against an event description.
#[derive(Debug, Clone, PartialEq)]
pub struct EventRecord {
    /// Disambiguated event key
    pub name: String,
    /// Fields in declaration order
    pub fields: Vec<EventField>,
    /// The log exactly as delivered by the transport
    pub raw: Log,
}

impl EventRecord {
    pub fn field(&self, name: &str) -> Option<&DynSolValue> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| &f.value)
    }

    pub fn indexed(&self) -> impl Iterator<Item = &EventField> {
        self.fields.iter().filter(|f| f.indexed)
    }

    pub fn non_indexed(&self) -> impl Iterator<Item = &EventField> {
        self.fields.iter().filter(|f| !f.indexed)
    }

    pub fn block_number(&self) -> Option<u64> {
        self.raw.block_number
    }

    pub fn transaction_hash(&self) -> Option<B256> {
        self.raw.transaction_hash
    }

    pub fn log_index(&self) -> Option<u64> {
        self.raw.log_index
    }

    /// Positional reader over the field values, for typed conversion.
    pub fn into_reader(self) -> (FieldReader, Log) {
        let values = self.fields.into_iter().map(|f| f.value).collect();
        (FieldReader::log(&self.name, values), self.raw)
    }
}

/// A typed event produced by generated bindings.
pub trait ContractEvent: Sized + Send + 'static {
    /// Disambiguated event key in the contract ABI
    const NAME: &'static str;

    fn from_record(record: EventRecord) -> Result<Self>;
}

/// Decoder from a generic record into the iterator's item type.
pub type EventDecoder<E> = fn(EventRecord) -> Result<E>;

// =============================================================================
// Iterator
// =============================================================================

/// Pull cursor over the logs of one event.
///
/// `advance` moves to the next event and reports whether one is available.
/// After it returns `false`, [`last_error`](Self::last_error) tells apart the
/// end of a finite stream from a failure. The first error is kept; decoding
/// failures and cancellation end iteration immediately while a transport
/// failure lets already-buffered logs drain first.
pub struct EventIterator<E> {
    contract: BoundContract,
    event: String,
    decode: EventDecoder<E>,
    logs: LogSubscription,
    cancel: Option<CancelToken>,
    current: Option<E>,
    fail: Option<BindError>,
    done: bool,
    halted: bool,
    closed: bool,
}

impl<E> EventIterator<E> {
    pub(crate) fn new(
        contract: BoundContract,
        event: &str,
        decode: EventDecoder<E>,
        logs: LogSubscription,
        cancel: Option<CancelToken>,
    ) -> Self {
        Self {
            contract,
            event: event.to_string(),
            decode,
            logs,
            cancel,
            current: None,
            fail: None,
            done: false,
            halted: false,
            closed: false,
        }
    }

    /// Move to the next event. Returns `true` when [`current`](Self::current)
    /// holds a freshly decoded event.
    pub async fn advance(&mut self) -> bool {
        if self.closed || self.halted {
            return false;
        }
        if self.done {
            return match self.logs.try_next() {
                Some(log) => self.accept(log),
                None => false,
            };
        }

        let next = tokio::select! {
            biased;
            _ = context::cancelled(self.cancel.as_ref()) => None,
            item = self.logs.next() => Some(item),
        };

        match next {
            None => {
                debug!(event = %self.event, "Event iteration cancelled");
                self.halt(BindError::Cancelled);
                false
            }
            Some(Some(Ok(log))) => self.accept(log),
            Some(Some(Err(err))) => {
                self.record(err);
                self.done = true;
                match self.logs.try_next() {
                    Some(log) => self.accept(log),
                    None => false,
                }
            }
            Some(None) => {
                self.done = true;
                false
            }
        }
    }

    fn accept(&mut self, log: Log) -> bool {
        let decoded = self
            .contract
            .unpack_log(&self.event, &log)
            .and_then(self.decode);
        match decoded {
            Ok(event) => {
                self.current = Some(event);
                true
            }
            Err(err) => {
                self.halt(err);
                false
            }
        }
    }

    fn record(&mut self, err: BindError) {
        if self.fail.is_none() {
            self.fail = Some(err);
        }
    }

    fn halt(&mut self, err: BindError) {
        self.record(err);
        self.halted = true;
        self.done = true;
        self.logs.unsubscribe();
    }

    /// The event decoded by the last successful [`advance`](Self::advance).
    pub fn current(&self) -> Option<&E> {
        self.current.as_ref()
    }

    /// Take ownership of the current event.
    pub fn take(&mut self) -> Option<E> {
        self.current.take()
    }

    /// First error encountered, if any.
    pub fn last_error(&self) -> Option<&BindError> {
        self.fail.as_ref()
    }

    /// Stop iteration and release the subscription. Safe to call repeatedly.
    pub fn close(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        self.done = true;
        self.logs.unsubscribe();
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Whether the underlying subscription has been released.
    pub fn is_released(&self) -> bool {
        self.logs.is_unsubscribed()
    }
}

impl<E> Drop for EventIterator<E> {
    fn drop(&mut self) {
        self.close();
    }
}

impl<E> std::fmt::Debug for EventIterator<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventIterator")
            .field("contract", &self.contract.address())
            .field("event", &self.event)
            .field("fail", &self.fail)
            .field("done", &self.done)
            .field("closed", &self.closed)
            .finish()
    }
}
