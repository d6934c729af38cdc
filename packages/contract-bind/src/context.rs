//! Cooperative cancellation and deadlines
//!
//! Every transport-facing operation runs inside a [`Context`]. Cancelling the
//! context (or hitting its timeout) abandons the in-flight request and reports
//! [`BindError::Cancelled`] / [`BindError::DeadlineExceeded`].

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;

use crate::error::{BindError, Result};

/// Cloneable cancellation signal. All clones observe the same state.
#[derive(Debug, Clone)]
pub struct CancelToken {
    state: Arc<watch::Sender<bool>>,
}

impl Default for CancelToken {
    fn default() -> Self {
        Self::new()
    }
}

impl CancelToken {
    pub fn new() -> Self {
        let (state, _) = watch::channel(false);
        Self {
            state: Arc::new(state),
        }
    }

    pub fn cancel(&self) {
        self.state.send_replace(true);
    }

    pub fn is_cancelled(&self) -> bool {
        *self.state.borrow()
    }

    /// Resolves once [`cancel`](Self::cancel) has been called on any clone.
    pub async fn cancelled(&self) {
        let mut rx = self.state.subscribe();
        loop {
            if *rx.borrow_and_update() {
                return;
            }
            if rx.changed().await.is_err() {
                // The sender lives in `self`, so this is unreachable in practice.
                std::future::pending::<()>().await;
            }
        }
    }
}

/// Resolves when `token` is cancelled; never resolves for `None`.
pub(crate) async fn cancelled(token: Option<&CancelToken>) {
    match token {
        Some(token) => token.cancelled().await,
        None => std::future::pending().await,
    }
}

/// Cancellation scope for a single operation or subscription.
#[derive(Debug, Clone, Default)]
pub struct Context {
    pub cancel: Option<CancelToken>,
    pub timeout: Option<Duration>,
}

impl Context {
    pub fn background() -> Self {
        Self::default()
    }

    pub fn with_cancel(cancel: CancelToken) -> Self {
        Self {
            cancel: Some(cancel),
            timeout: None,
        }
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            cancel: None,
            timeout: Some(timeout),
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(CancelToken::is_cancelled)
    }

    /// Drive `operation` to completion unless the context ends first.
    ///
    /// Cancellation wins over a result that becomes ready at the same time.
    pub async fn run<F, T>(&self, operation: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        if self.is_cancelled() {
            return Err(BindError::Cancelled);
        }
        let deadline = async {
            match self.timeout {
                Some(timeout) => {
                    tokio::time::sleep(timeout).await;
                    timeout
                }
                None => std::future::pending().await,
            }
        };

        tokio::select! {
            biased;
            _ = cancelled(self.cancel.as_ref()) => Err(BindError::Cancelled),
            timeout = deadline => Err(BindError::DeadlineExceeded(timeout)),
            result = operation => result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_completes() {
        let ctx = Context::background();
        let value = tokio_test::block_on(ctx.run(async { Ok::<_, BindError>(7) })).unwrap();
        assert_eq!(value, 7);
    }

    #[tokio::test]
    async fn test_pre_cancelled_context() {
        let token = CancelToken::new();
        token.cancel();
        let ctx = Context::with_cancel(token);
        let result = ctx.run(async { Ok::<_, BindError>(()) }).await;
        assert_eq!(result, Err(BindError::Cancelled));
    }

    #[tokio::test]
    async fn test_cancel_interrupts_pending_operation() {
        let token = CancelToken::new();
        let ctx = Context::with_cancel(token.clone());

        let handle = tokio::spawn(async move {
            ctx.run(std::future::pending::<Result<()>>()).await
        });
        tokio::task::yield_now().await;
        token.cancel();

        assert_eq!(handle.await.unwrap(), Err(BindError::Cancelled));
    }

    #[tokio::test]
    async fn test_deadline_exceeded() {
        let ctx = Context::with_timeout(Duration::from_millis(20));
        let result = ctx.run(std::future::pending::<Result<()>>()).await;
        assert_eq!(
            result,
            Err(BindError::DeadlineExceeded(Duration::from_millis(20)))
        );
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let token = CancelToken::new();
        let clone = token.clone();
        assert!(!clone.is_cancelled());
        token.cancel();
        assert!(clone.is_cancelled());
        clone.cancelled().await;
    }
}
