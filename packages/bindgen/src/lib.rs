//! Contract binding generator
//!
//! Reads a TOML manifest of contracts, loads their ABI and bytecode artifacts
//! and renders one typed binding module per contract on top of the
//! `contract-bind` runtime, plus a `mod.rs` and a `registry.rs`.
//!
//! ## Usage
//!
//! ```ignore
//! use contract_bindgen::{config::Manifest, generate, write_files};
//!
//! let manifest = Manifest::load("bindgen.toml".as_ref())?;
//! let files = generate(&manifest)?;
//! write_files(&manifest.output_dir(), &files)?;
//! ```
//!
//! ## Submodules
//!
//! - `config`: Manifest loading with environment overrides
//! - `artifact`: Foundry/Hardhat artifact and ABI/bin file parsing
//! - `generator`: Source rendering
//! - `naming`: Identifier conventions
//! - `types`: Solidity to Rust type mapping

pub mod artifact;
pub mod config;
pub mod generator;
pub mod naming;
pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};
use tracing::{debug, info};

pub use artifact::Artifact;
pub use config::Manifest;
pub use generator::{render_all, render_contract, GeneratedFile};

/// Load every artifact listed in the manifest and render the bindings.
pub fn generate(manifest: &Manifest) -> Result<Vec<GeneratedFile>> {
    let artifacts = manifest
        .contracts
        .iter()
        .map(|source| {
            let artifact = Artifact::load(manifest, source)?;
            debug!(
                contract = %artifact.name,
                abi_len = artifact.abi.len(),
                bytecode_len = artifact.bytecode.len(),
                "Loaded artifact"
            );
            Ok(artifact)
        })
        .collect::<Result<Vec<_>>>()?;

    let files = render_all(&artifacts, &manifest.output.crate_path)?;
    info!(contracts = artifacts.len(), files = files.len(), "Rendered bindings");
    Ok(files)
}

/// Write rendered files into `dir`, creating it when missing.
pub fn write_files(dir: &Path, files: &[GeneratedFile]) -> Result<()> {
    fs::create_dir_all(dir).wrap_err_with(|| format!("Failed to create {}", dir.display()))?;
    for file in files {
        let path = dir.join(&file.file_name);
        fs::write(&path, &file.source)
            .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
        info!(path = %path.display(), "Wrote binding");
    }
    Ok(())
}

/// Paths under `dir` whose contents differ from the rendered files.
pub fn stale_files(dir: &Path, files: &[GeneratedFile]) -> Vec<PathBuf> {
    files
        .iter()
        .map(|file| dir.join(&file.file_name))
        .zip(files)
        .filter(|(path, file)| match fs::read_to_string(path) {
            Ok(current) => current != file.source,
            Err(_) => true,
        })
        .map(|(path, _)| path)
        .collect()
}
