//! Solidity storage layouts
//!
//! Mirrors the `storageLayout` object solc emits with
//! `--extra-output storageLayout`: one entry per state variable plus a table
//! of the types those entries refer to.

use std::collections::BTreeMap;

use alloy::primitives::U256;
use serde::{Deserialize, Serialize};

use crate::error::{BindError, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageLayout {
    #[serde(default)]
    pub storage: Vec<StorageLayoutEntry>,
    #[serde(default)]
    pub types: BTreeMap<String, StorageLayoutType>,
}

/// One state variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageLayoutEntry {
    pub ast_id: u64,
    /// `path/to/Source.sol:Contract` that declared the variable
    pub contract: String,
    pub label: String,
    /// Byte offset inside the slot
    pub offset: u64,
    /// Slot number, decimal encoded
    pub slot: String,
    /// Key into [`StorageLayout::types`]
    #[serde(rename = "type")]
    pub ty: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageLayoutType {
    /// `inplace`, `mapping`, `dynamic_array` or `bytes`
    pub encoding: String,
    pub label: String,
    /// Decimal encoded
    pub number_of_bytes: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub members: Option<Vec<StorageLayoutEntry>>,
}

impl StorageLayout {
    pub fn parse(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| BindError::InvalidStorageLayout(e.to_string()))
    }

    /// The state variable called `label`.
    pub fn entry(&self, label: &str) -> Option<&StorageLayoutEntry> {
        self.storage.iter().find(|entry| entry.label == label)
    }

    /// The type an entry refers to.
    pub fn type_of(&self, entry: &StorageLayoutEntry) -> Option<&StorageLayoutType> {
        self.types.get(&entry.ty)
    }
}

impl StorageLayoutEntry {
    pub fn slot(&self) -> Result<U256> {
        U256::from_str_radix(&self.slot, 10).map_err(|e| {
            BindError::InvalidStorageLayout(format!("slot {:?} of {}: {e}", self.slot, self.label))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LAYOUT: &str = r#"{
        "storage": [
            {"astId": 10, "contract": "src/Vault.sol:Vault", "label": "_initialized",
             "offset": 0, "slot": "0", "type": "t_uint8"},
            {"astId": 11, "contract": "src/Vault.sol:Vault", "label": "_initializing",
             "offset": 1, "slot": "0", "type": "t_bool"},
            {"astId": 12, "contract": "src/Vault.sol:Vault", "label": "balanceOf",
             "offset": 0, "slot": "101", "type": "t_mapping(t_address,t_uint256)"}
        ],
        "types": {
            "t_address": {"encoding": "inplace", "label": "address", "numberOfBytes": "20"},
            "t_bool": {"encoding": "inplace", "label": "bool", "numberOfBytes": "1"},
            "t_mapping(t_address,t_uint256)": {"encoding": "mapping", "key": "t_address",
                "label": "mapping(address => uint256)", "numberOfBytes": "32", "value": "t_uint256"},
            "t_uint256": {"encoding": "inplace", "label": "uint256", "numberOfBytes": "32"},
            "t_uint8": {"encoding": "inplace", "label": "uint8", "numberOfBytes": "1"}
        }
    }"#;

    #[test]
    fn test_parse_solc_layout() {
        let layout = StorageLayout::parse(LAYOUT).unwrap();
        assert_eq!(layout.storage.len(), 3);

        let initializing = layout.entry("_initializing").unwrap();
        assert_eq!(initializing.offset, 1);
        assert_eq!(initializing.slot().unwrap(), U256::ZERO);

        let balances = layout.entry("balanceOf").unwrap();
        assert_eq!(balances.slot().unwrap(), U256::from(101));
        let ty = layout.type_of(balances).unwrap();
        assert_eq!(ty.encoding, "mapping");
        assert_eq!(ty.key.as_deref(), Some("t_address"));
        assert_eq!(ty.value.as_deref(), Some("t_uint256"));

        assert!(layout.entry("owner").is_none());
    }

    #[test]
    fn test_invalid_layouts() {
        assert!(matches!(
            StorageLayout::parse("{\"storage\": 3}"),
            Err(BindError::InvalidStorageLayout(_))
        ));

        let mut layout = StorageLayout::parse(LAYOUT).unwrap();
        layout.storage[0].slot = "0x1".to_string();
        assert!(matches!(
            layout.storage[0].slot(),
            Err(BindError::InvalidStorageLayout(_))
        ));
    }
}
