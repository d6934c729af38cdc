//! Compiler artifact loading
//!
//! Accepts Foundry artifacts (`{"abi": [...], "bytecode": {"object": "0x.."}}`),
//! Hardhat artifacts (`{"abi": [...], "bytecode": "0x.."}`) and plain
//! `.abi`/`.bin` file pairs. Deployed bytecode and the solc storage layout are
//! picked up from JSON artifacts when present.

use std::fs;
use std::path::Path;

use contract_bind::StorageLayout;
use eyre::{eyre, Result, WrapErr};
use serde::Deserialize;
use serde_json::Value;

use crate::config::{ContractSource, Manifest};

/// ABI and bytecode of one contract, ready to be rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct Artifact {
    pub name: String,
    /// Compact ABI JSON
    pub abi: String,
    /// `0x`-prefixed creation bytecode, `0x` when there is none
    pub bytecode: String,
    /// `0x`-prefixed runtime bytecode, `0x` when there is none
    pub deployed_bytecode: String,
    /// Compact `storageLayout` JSON, empty when there is none
    pub storage_layout: String,
}

impl Artifact {
    /// Load the artifact a manifest entry points at.
    pub fn load(manifest: &Manifest, source: &ContractSource) -> Result<Self> {
        match (&source.artifact, &source.abi) {
            (Some(artifact), _) => {
                let path = manifest.resolve(artifact);
                let text = read(&path)?;
                Self::from_json(&source.name, &text)
                    .wrap_err_with(|| format!("Invalid artifact {}", path.display()))
            }
            (None, Some(abi)) => {
                let abi = read(&manifest.resolve(abi))?;
                let bytecode = match &source.bin {
                    Some(bin) => read(&manifest.resolve(bin))?,
                    None => String::new(),
                };
                Self::from_parts(&source.name, &abi, &bytecode)
            }
            (None, None) => Err(eyre!("Contract {} has no ABI source", source.name)),
        }
    }

    /// Parse a Foundry or Hardhat artifact.
    pub fn from_json(name: &str, text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text).wrap_err("Artifact is not JSON")?;
        let abi = value
            .get("abi")
            .ok_or_else(|| eyre!("Artifact has no abi field"))?;
        let bytecode = code_field(&value, "bytecode")?;
        let deployed = code_field(&value, "deployedBytecode")?;
        let mut artifact = Self::from_parts(name, &abi.to_string(), &bytecode)?;
        artifact.deployed_bytecode = normalize_bytecode(&deployed)
            .wrap_err("Invalid deployedBytecode")?;
        artifact.storage_layout = match value.get("storageLayout") {
            Some(layout @ Value::Object(_)) => {
                StorageLayout::deserialize(layout).wrap_err("Invalid storageLayout")?;
                layout.to_string()
            }
            Some(Value::Null) | None => String::new(),
            Some(other) => return Err(eyre!("Unexpected storageLayout field: {other}")),
        };
        Ok(artifact)
    }

    /// Build from raw ABI JSON and hex bytecode text.
    pub fn from_parts(name: &str, abi: &str, bytecode: &str) -> Result<Self> {
        let abi: Value = serde_json::from_str(abi).wrap_err("ABI is not JSON")?;
        if !abi.is_array() {
            return Err(eyre!("ABI of {name} must be a JSON array"));
        }
        Ok(Self {
            name: name.to_string(),
            abi: abi.to_string(),
            bytecode: normalize_bytecode(bytecode)?,
            deployed_bytecode: "0x".to_string(),
            storage_layout: String::new(),
        })
    }
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).wrap_err_with(|| format!("Failed to read {}", path.display()))
}

/// `"0x.."` (Hardhat) or `{"object": "0x.."}` (Foundry).
fn code_field(artifact: &Value, field: &str) -> Result<String> {
    match artifact.get(field) {
        Some(Value::String(code)) => Ok(code.clone()),
        Some(Value::Object(object)) => Ok(object
            .get("object")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()),
        Some(Value::Null) | None => Ok(String::new()),
        Some(other) => Err(eyre!("Unexpected {field} field: {other}")),
    }
}

fn normalize_bytecode(bytecode: &str) -> Result<String> {
    let hex = bytecode.trim();
    let hex = hex.strip_prefix("0x").unwrap_or(hex);
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(eyre!("Bytecode contains unlinked libraries or non-hex characters"));
    }
    if hex.len() % 2 != 0 {
        return Err(eyre!("Bytecode has an odd number of hex digits"));
    }
    Ok(format!("0x{}", hex.to_ascii_lowercase()))
}
