//! Waiting for transactions to be mined and contracts to be deployed

use std::time::Duration;

use alloy::primitives::Address;
use tracing::debug;

use crate::backend::{DeployBackend, TxHandle, TxReceipt};
use crate::context::Context;
use crate::error::{BindError, Result, Revert};
use crate::options::BlockSelector;

/// Default interval between receipt lookups.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Poll for the receipt of `tx` until it is mined or `ctx` ends.
pub async fn wait_mined<B: DeployBackend + ?Sized>(
    backend: &B,
    tx: &TxHandle,
    ctx: &Context,
    poll_interval: Duration,
) -> Result<TxReceipt> {
    ctx.run(async {
        loop {
            if let Some(receipt) = backend.receipt(tx.hash).await? {
                debug!(
                    tx_hash = %tx.hash,
                    block = ?receipt.block_number,
                    status = receipt.status,
                    "Transaction mined"
                );
                return Ok(receipt);
            }
            debug!(tx_hash = %tx.hash, "Transaction not yet mined");
            tokio::time::sleep(poll_interval).await;
        }
    })
    .await
}

/// Wait for a creation transaction and check that code exists at the new
/// address.
pub async fn wait_deployed<B: DeployBackend + ?Sized>(
    backend: &B,
    tx: &TxHandle,
    ctx: &Context,
    poll_interval: Duration,
) -> Result<Address> {
    let predicted = tx.contract_address().ok_or_else(|| {
        BindError::type_mismatch(
            "transaction",
            "contract creation",
            format!("{} has a recipient", tx.hash),
        )
    })?;

    let receipt = wait_mined(backend, tx, ctx, poll_interval).await?;
    if !receipt.status {
        return Err(BindError::DeploymentReverted(Revert::default()));
    }

    let address = receipt.contract_address.unwrap_or(predicted);
    let code = ctx.run(backend.code_at(address, BlockSelector::Latest)).await?;
    if code.is_empty() {
        return Err(BindError::NoCode(address));
    }
    Ok(address)
}
