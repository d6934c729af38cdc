//! Polling log watcher
//!
//! Node-agnostic live logs: the watcher walks confirmed block ranges with
//! `eth_getLogs` and pushes matches into a [`LogFeed`] in chain order.
//! Ranges are chunked to stay under provider limits.
//!
//! ## Usage
//!
//! ```ignore
//! let poller = LogPoller::new(provider);
//! let logs = poller.get_logs(&query, from_block, to_block).await?;
//! ```

use std::marker::PhantomData;
use std::time::Duration;

use alloy::providers::Provider;
use alloy::rpc::types::{Filter, Log};
use alloy::transports::{BoxTransport, Transport};
use tracing::{debug, warn};

use crate::backend::{LogFeed, LogQuery};
use crate::error::{BindError, Result};

/// Log watcher configuration
#[derive(Debug, Clone)]
pub struct WatcherConfig {
    /// Poll interval between checks
    pub poll_interval: Duration,
    /// Number of confirmations before a block's logs are delivered
    pub confirmations: u64,
    /// Maximum block range per query (to avoid RPC limits)
    pub max_block_range: u64,
}

impl Default for WatcherConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(2),
            confirmations: 0,
            max_block_range: 10_000,
        }
    }
}

/// Build an alloy filter for one block range of a query.
pub fn to_filter(query: &LogQuery, from_block: u64, to_block: u64) -> Filter {
    let mut filter = Filter::new().from_block(from_block).to_block(to_block);
    if let Some(address) = query.address {
        filter = filter.address(address);
    }
    for (position, accepted) in query.topics.iter().enumerate().take(4) {
        filter.topics[position] = accepted.clone().into();
    }
    filter
}

/// Order logs by block, transaction index and log index.
pub fn sort_chain_order(logs: &mut [Log]) {
    logs.sort_by_key(|log| (log.block_number, log.transaction_index, log.log_index));
}

/// Chunked `eth_getLogs` reader and live poller.
pub struct LogPoller<P, T = BoxTransport> {
    provider: P,
    config: WatcherConfig,
    _transport: PhantomData<fn() -> T>,
}

impl<P, T> LogPoller<P, T>
where
    P: Provider<T> + Clone + 'static,
    T: Transport + Clone,
{
    pub fn new(provider: P) -> Self {
        Self::with_config(provider, WatcherConfig::default())
    }

    pub fn with_config(provider: P, config: WatcherConfig) -> Self {
        Self {
            provider,
            config,
            _transport: PhantomData,
        }
    }

    pub fn config(&self) -> &WatcherConfig {
        &self.config
    }

    /// Get the current block number
    pub async fn get_current_block(&self) -> Result<u64> {
        self.provider
            .get_block_number()
            .await
            .map_err(BindError::transport)
    }

    /// Get the safe block number (current - confirmations)
    pub async fn get_safe_block(&self) -> Result<u64> {
        let current = self.get_current_block().await?;
        Ok(current.saturating_sub(self.config.confirmations))
    }

    // =========================================================================
    // Raw Log Fetching
    // =========================================================================

    /// Get all logs matching `query` in an inclusive block range
    pub async fn get_logs(&self, query: &LogQuery, from_block: u64, to_block: u64) -> Result<Vec<Log>> {
        let mut all_logs = Vec::new();
        let mut current_from = from_block;
        let range = self.config.max_block_range.max(1);

        // Chunk into manageable ranges
        while current_from <= to_block {
            let current_to = std::cmp::min(current_from.saturating_add(range - 1), to_block);

            let filter = to_filter(query, current_from, current_to);
            let logs = self.provider.get_logs(&filter).await.map_err(|e| {
                BindError::Transport(format!(
                    "failed to get logs from block {current_from} to {current_to}: {e}"
                ))
            })?;

            all_logs.extend(logs);
            current_from = current_to + 1;
        }

        sort_chain_order(&mut all_logs);
        Ok(all_logs)
    }

    // =========================================================================
    // Live Polling
    // =========================================================================

    /// Deliver logs from `start` onwards until the subscriber goes away.
    ///
    /// A transport failure ends the stream with that error.
    pub async fn run(self, query: LogQuery, start: u64, feed: LogFeed) {
        let mut next_block = start;

        loop {
            match self.poll_once(&query, next_block, &feed).await {
                Ok(Some(next)) => next_block = next,
                Ok(None) => {
                    debug!(next_block, "Log subscriber gone, stopping poller");
                    return;
                }
                Err(err) => {
                    warn!(error = %err, next_block, "Log polling failed");
                    feed.fail(err).await;
                    return;
                }
            }

            tokio::select! {
                _ = feed.closed() => return,
                _ = tokio::time::sleep(self.config.poll_interval) => {}
            }
        }
    }

    /// One polling round. Returns the next block to read, or `None` once the
    /// subscriber is gone.
    async fn poll_once(&self, query: &LogQuery, next_block: u64, feed: &LogFeed) -> Result<Option<u64>> {
        let safe = self.get_safe_block().await?;
        let last = match query.to_block {
            Some(to) => safe.min(to),
            None => safe,
        };
        if last < next_block {
            return Ok(Some(next_block));
        }

        let logs = self.get_logs(query, next_block, last).await?;
        if !logs.is_empty() {
            debug!(
                count = logs.len(),
                from = next_block,
                to = last,
                "Found logs"
            );
        }
        for log in logs {
            if log.removed {
                continue;
            }
            if !feed.send(log).await {
                return Ok(None);
            }
        }
        Ok(Some(last + 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::{Address, B256};

    #[test]
    fn test_default_config() {
        let config = WatcherConfig::default();
        assert_eq!(config.poll_interval, Duration::from_secs(2));
        assert_eq!(config.max_block_range, 10_000);
    }

    #[test]
    fn test_filter_carries_topic_positions() {
        let address = Address::repeat_byte(0x01);
        let sig = B256::repeat_byte(0x02);
        let src = B256::repeat_byte(0x03);
        let query = LogQuery {
            address: Some(address),
            topics: vec![vec![sig], vec![], vec![src]],
            ..Default::default()
        };

        let filter = to_filter(&query, 10, 20);
        assert!(filter.topics[0].matches(&sig));
        assert!(filter.topics[1].is_empty());
        assert!(filter.topics[2].matches(&src));
        assert!(!filter.topics[2].matches(&sig));
    }

    #[test]
    fn test_sort_chain_order() {
        let mk = |block: u64, tx: u64, index: u64| Log {
            block_number: Some(block),
            transaction_index: Some(tx),
            log_index: Some(index),
            ..Default::default()
        };
        let mut logs = vec![mk(2, 0, 3), mk(1, 1, 2), mk(1, 0, 1), mk(1, 1, 0)];
        sort_chain_order(&mut logs);
        let order: Vec<_> = logs.iter().map(|l| l.log_index).collect();
        assert_eq!(order, vec![Some(1), Some(0), Some(2), Some(3)]);
    }
}
