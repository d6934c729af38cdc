//! Generator manifest
//!
//! The manifest is a TOML file listing the contracts to generate and where to
//! write them. Any value can be overridden from the environment with the
//! `BINDGEN__` prefix (e.g. `BINDGEN__OUTPUT__DIR=out`); a `.env` file next to
//! the working directory is loaded first.
//!
//! ```toml
//! [output]
//! dir = "src/bindings"
//! crate_path = "contract_bind"
//!
//! [[contracts]]
//! name = "DelayedWETH"
//! artifact = "artifacts/DelayedWETH.json"
//! ```

use std::path::{Path, PathBuf};

use eyre::{eyre, Result, WrapErr};
use serde::Deserialize;

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "BINDGEN";

/// Top-level manifest
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    pub output: OutputConfig,
    #[serde(default)]
    pub contracts: Vec<ContractSource>,
    /// Directory relative paths are resolved against
    #[serde(skip)]
    pub base_dir: PathBuf,
}

/// Where and how bindings are written
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub dir: PathBuf,
    /// Path generated code uses to reach the binding runtime
    #[serde(default = "default_crate_path")]
    pub crate_path: String,
}

fn default_crate_path() -> String {
    "contract_bind".to_string()
}

/// One contract: either a compiler artifact, or separate ABI and bytecode files
#[derive(Debug, Clone, Deserialize)]
pub struct ContractSource {
    pub name: String,
    #[serde(default)]
    pub artifact: Option<PathBuf>,
    #[serde(default)]
    pub abi: Option<PathBuf>,
    #[serde(default)]
    pub bin: Option<PathBuf>,
}

impl Manifest {
    /// Load a manifest file with environment overrides.
    pub fn load(path: &Path) -> Result<Self> {
        if let Ok(env_file) = dotenvy::dotenv() {
            tracing::debug!(path = %env_file.display(), "Loaded .env file");
        }

        let settings = config::Config::builder()
            .add_source(config::File::from(path).format(config::FileFormat::Toml))
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()
            .wrap_err_with(|| format!("Failed to read manifest {}", path.display()))?;

        let mut manifest: Manifest = settings
            .try_deserialize()
            .wrap_err_with(|| format!("Invalid manifest {}", path.display()))?;
        manifest.base_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        manifest.validate()?;
        Ok(manifest)
    }

    /// Parse a manifest from TOML text, without environment overrides.
    pub fn from_toml(text: &str, base_dir: impl Into<PathBuf>) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from_str(text, config::FileFormat::Toml))
            .build()
            .wrap_err("Failed to parse manifest")?;
        let mut manifest: Manifest = settings.try_deserialize().wrap_err("Invalid manifest")?;
        manifest.base_dir = base_dir.into();
        manifest.validate()?;
        Ok(manifest)
    }

    fn validate(&self) -> Result<()> {
        let mut seen = std::collections::HashSet::new();
        for contract in &self.contracts {
            if !seen.insert(contract.name.as_str()) {
                return Err(eyre!("Contract {} is listed twice", contract.name));
            }
            match (&contract.artifact, &contract.abi) {
                (Some(_), None) | (None, Some(_)) => {}
                (Some(_), Some(_)) => {
                    return Err(eyre!(
                        "Contract {} sets both artifact and abi",
                        contract.name
                    ))
                }
                (None, None) => {
                    return Err(eyre!(
                        "Contract {} needs an artifact or an abi file",
                        contract.name
                    ))
                }
            }
        }
        Ok(())
    }

    /// Resolve a manifest-relative path.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }

    /// The output directory, resolved.
    pub fn output_dir(&self) -> PathBuf {
        self.resolve(&self.output.dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_manifest() {
        let manifest = Manifest::from_toml(
            r#"
            [output]
            dir = "src/bindings"

            [[contracts]]
            name = "DelayedWETH"
            artifact = "artifacts/DelayedWETH.json"

            [[contracts]]
            name = "Raw"
            abi = "abi/Raw.abi"
            bin = "abi/Raw.bin"
            "#,
            "/repo",
        )
        .unwrap();

        assert_eq!(manifest.output.crate_path, "contract_bind");
        assert_eq!(manifest.contracts.len(), 2);
        assert_eq!(manifest.output_dir(), PathBuf::from("/repo/src/bindings"));
        assert_eq!(
            manifest.resolve(manifest.contracts[0].artifact.as_deref().unwrap()),
            PathBuf::from("/repo/artifacts/DelayedWETH.json")
        );
    }

    #[test]
    fn test_duplicate_contracts_are_rejected() {
        let result = Manifest::from_toml(
            r#"
            [output]
            dir = "out"

            [[contracts]]
            name = "A"
            artifact = "a.json"

            [[contracts]]
            name = "A"
            artifact = "b.json"
            "#,
            ".",
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_contract_needs_a_source() {
        let result = Manifest::from_toml(
            r#"
            [output]
            dir = "out"

            [[contracts]]
            name = "A"
            "#,
            ".",
        );
        assert!(result.is_err());
    }
}
