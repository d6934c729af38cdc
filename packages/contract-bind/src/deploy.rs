//! Contract metadata and deployment

use std::sync::{Arc, OnceLock};

use alloy::dyn_abi::DynSolValue;
use alloy::primitives::{Address, Bytes};
use tracing::{debug, info};

use crate::abi::AbiDescriptor;
use crate::backend::{Capabilities, TxHandle};
use crate::bound::BoundContract;
use crate::error::{BindError, Result};
use crate::layout::StorageLayout;
use crate::options::TransactOpts;

/// Static description of a generated contract: ABI JSON, creation and deployed
/// bytecode, and the solc storage layout.
///
/// The ABI and the layout are parsed at most once per process, on first use.
#[derive(Debug)]
pub struct ContractMetadata {
    pub name: &'static str,
    pub abi: &'static str,
    /// `0x`-prefixed hex creation bytecode; may be empty for interfaces
    pub bin: &'static str,
    /// `0x`-prefixed hex runtime bytecode; empty when the artifact had none
    pub deployed_bin: &'static str,
    /// solc `storageLayout` JSON; empty when the artifact had none
    pub storage_layout: &'static str,
    parsed: OnceLock<Result<Arc<AbiDescriptor>>>,
    layout: OnceLock<Result<Arc<StorageLayout>>>,
}

impl ContractMetadata {
    pub const fn new(name: &'static str, abi: &'static str, bin: &'static str) -> Self {
        Self::with_runtime(name, abi, bin, "", "")
    }

    /// Metadata that also carries the deployed bytecode and storage layout.
    pub const fn with_runtime(
        name: &'static str,
        abi: &'static str,
        bin: &'static str,
        deployed_bin: &'static str,
        storage_layout: &'static str,
    ) -> Self {
        Self {
            name,
            abi,
            bin,
            deployed_bin,
            storage_layout,
            parsed: OnceLock::new(),
            layout: OnceLock::new(),
        }
    }

    /// The parsed interface.
    pub fn abi(&self) -> Result<Arc<AbiDescriptor>> {
        if self.abi.trim().is_empty() {
            return Err(BindError::MissingAbi);
        }
        self.parsed
            .get_or_init(|| AbiDescriptor::parse(self.abi).map(Arc::new))
            .clone()
    }

    /// The decoded creation bytecode.
    pub fn bytecode(&self) -> Result<Vec<u8>> {
        decode_hex(self.bin).ok_or(BindError::MissingBytecode)?
    }

    pub fn has_bytecode(&self) -> bool {
        !strip_hex(self.bin).is_empty()
    }

    /// The decoded runtime bytecode, as found at the address after deployment.
    ///
    /// Immutable references are zero-filled.
    pub fn deployed_bytecode(&self) -> Result<Vec<u8>> {
        decode_hex(self.deployed_bin).ok_or(BindError::MissingDeployedBytecode)?
    }

    pub fn has_deployed_bytecode(&self) -> bool {
        !strip_hex(self.deployed_bin).is_empty()
    }

    /// The parsed storage layout.
    pub fn storage_layout(&self) -> Result<Arc<StorageLayout>> {
        if self.storage_layout.trim().is_empty() {
            return Err(BindError::MissingStorageLayout);
        }
        self.layout
            .get_or_init(|| StorageLayout::parse(self.storage_layout).map(Arc::new))
            .clone()
    }

    /// Bind the interface to an already deployed instance.
    pub fn bind(&self, address: Address, caps: Capabilities) -> Result<BoundContract> {
        Ok(BoundContract::new(address, self.abi()?, caps))
    }
}

fn strip_hex(text: &str) -> &str {
    let text = text.trim();
    text.strip_prefix("0x").unwrap_or(text)
}

/// `None` when there is no code at all.
fn decode_hex(text: &str) -> Option<Result<Vec<u8>>> {
    let hex = strip_hex(text);
    if hex.is_empty() {
        return None;
    }
    Some(hex::decode(hex).map_err(|e| BindError::InvalidBytecode(e.to_string())))
}

/// Deploy a contract and bind its interface to the predicted address.
///
/// The address is derived from the sender and nonce of the creation
/// transaction; no code is read back. Use [`wait_deployed`] to confirm.
///
/// [`wait_deployed`]: crate::wait::wait_deployed
pub async fn deploy_contract(
    opts: &TransactOpts,
    metadata: &ContractMetadata,
    caps: Capabilities,
    args: Vec<DynSolValue>,
) -> Result<(Address, TxHandle, BoundContract)> {
    let abi = metadata.abi()?;
    let mut code = metadata.bytecode()?;
    code.extend(abi.encode_constructor(args)?);

    let transactor = caps
        .transactor
        .clone()
        .ok_or(BindError::MissingCapability("transactor"))?;

    debug!(
        contract = metadata.name,
        from = %opts.from,
        code_len = code.len(),
        "Deploying contract"
    );

    let tx = opts
        .context
        .run(transactor.send(opts, None, Bytes::from(code)))
        .await
        .map_err(|e| match e {
            BindError::ExecutionReverted(revert) if revert.reason.is_none() => {
                BindError::DeploymentReverted(abi.decode_revert(revert.data))
            }
            BindError::ExecutionReverted(revert) => BindError::DeploymentReverted(revert),
            other => other,
        })?;

    let address = tx.contract_address().ok_or_else(|| {
        BindError::Transport(format!(
            "transactor returned a call transaction {} for a deployment",
            tx.hash
        ))
    })?;

    info!(
        contract = metadata.name,
        address = %address,
        tx_hash = %tx.hash,
        "Contract deployment submitted"
    );

    Ok((address, tx, BoundContract::new(address, abi, caps)))
}

#[cfg(test)]
mod tests {
    use super::*;

    static EMPTY_ABI: ContractMetadata = ContractMetadata::new("Empty", "", "0x6000");
    static NO_CODE: ContractMetadata = ContractMetadata::new("NoCode", "[]", "0x");
    static BAD_CODE: ContractMetadata = ContractMetadata::new("Bad", "[]", "0xzz");

    #[test]
    fn test_metadata_validation() {
        assert_eq!(EMPTY_ABI.abi().unwrap_err(), BindError::MissingAbi);
        assert_eq!(NO_CODE.bytecode().unwrap_err(), BindError::MissingBytecode);
        assert!(!NO_CODE.has_bytecode());
        assert!(matches!(
            BAD_CODE.bytecode(),
            Err(BindError::InvalidBytecode(_))
        ));
        assert_eq!(EMPTY_ABI.bytecode().unwrap(), vec![0x60, 0x00]);
    }

    static RUNTIME: ContractMetadata = ContractMetadata::with_runtime(
        "Runtime",
        "[]",
        "0x6000",
        "0x60016000",
        r#"{"storage":[{"astId":3,"contract":"src/Runtime.sol:Runtime","label":"owner","offset":0,"slot":"51","type":"t_address"}],"types":{"t_address":{"encoding":"inplace","label":"address","numberOfBytes":"20"}}}"#,
    );
    static BAD_LAYOUT: ContractMetadata =
        ContractMetadata::with_runtime("BadLayout", "[]", "0x", "0x", "{\"storage\": 1}");

    #[test]
    fn test_runtime_metadata() {
        assert!(RUNTIME.has_deployed_bytecode());
        assert_eq!(RUNTIME.deployed_bytecode().unwrap(), vec![0x60, 0x01, 0x60, 0x00]);

        let layout = RUNTIME.storage_layout().unwrap();
        let owner = layout.entry("owner").unwrap();
        assert_eq!(owner.slot().unwrap(), alloy::primitives::U256::from(51));
        assert_eq!(layout.type_of(owner).unwrap().label, "address");
        assert!(Arc::ptr_eq(&layout, &RUNTIME.storage_layout().unwrap()));

        assert!(!NO_CODE.has_deployed_bytecode());
        assert_eq!(
            NO_CODE.deployed_bytecode().unwrap_err(),
            BindError::MissingDeployedBytecode
        );
        assert_eq!(
            NO_CODE.storage_layout().unwrap_err(),
            BindError::MissingStorageLayout
        );
        assert!(matches!(
            BAD_LAYOUT.storage_layout(),
            Err(BindError::InvalidStorageLayout(_))
        ));
    }

    #[test]
    fn test_abi_is_parsed_once() {
        let first = NO_CODE.abi().unwrap();
        let second = NO_CODE.abi().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[tokio::test]
    async fn test_deploy_without_transactor() {
        static META: ContractMetadata = ContractMetadata::new("Empty", "[]", "0x6000");
        let result = deploy_contract(
            &TransactOpts::default(),
            &META,
            Capabilities::new(),
            vec![],
        )
        .await;
        assert_eq!(
            result.map(|(address, _, _)| address).unwrap_err(),
            BindError::MissingCapability("transactor")
        );
    }

    #[tokio::test]
    async fn test_deploy_rejects_unexpected_constructor_args() {
        static META: ContractMetadata = ContractMetadata::new("Empty", "[]", "0x6000");
        let result = deploy_contract(
            &TransactOpts::default(),
            &META,
            Capabilities::new(),
            vec![DynSolValue::Bool(true)],
        )
        .await;
        assert!(matches!(
            result.map(|(address, _, _)| address),
            Err(BindError::TypeMismatch { .. })
        ));
    }
}
