//! Metadata of every generated contract, by name
//!
//! Generated by `bindgen`; do not edit. Regenerate with `bindgen generate`.

use std::sync::Arc;

use contract_bind::{BindError, ContractMetadata, Result, StorageLayout};

/// Every generated contract, sorted by name.
pub fn all() -> Vec<&'static ContractMetadata> {
    vec![
        &super::delayed_vetoable::DELAYED_VETOABLE_METADATA,
        &super::delayed_weth::DELAYED_WETH_METADATA,
    ]
}

/// Metadata of the contract called `name`.
pub fn get_metadata(name: &str) -> Option<&'static ContractMetadata> {
    all().into_iter().find(|metadata| metadata.name == name)
}

/// Runtime bytecode of the contract called `name`.
pub fn get_deployed_bytecode(name: &str) -> Result<Vec<u8>> {
    lookup(name)?.deployed_bytecode()
}

/// Storage layout of the contract called `name`.
pub fn get_storage_layout(name: &str) -> Result<Arc<StorageLayout>> {
    lookup(name)?.storage_layout()
}

fn lookup(name: &str) -> Result<&'static ContractMetadata> {
    get_metadata(name).ok_or_else(|| BindError::UnknownContract(name.to_string()))
}
