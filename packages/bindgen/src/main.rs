//! Contract binding generator CLI
//!
//! - `bindgen generate` renders every contract in the manifest
//! - `bindgen generate --check` fails when checked-in bindings are out of date
//! - `bindgen list` prints the contracts and their interface sizes

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{bail, Result, WrapErr};
use tracing_subscriber::EnvFilter;

use contract_bindgen::{generate, stale_files, write_files, Artifact, Manifest};

#[derive(Parser)]
#[command(name = "bindgen")]
#[command(about = "Generate typed contract bindings", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Manifest listing the contracts
    #[arg(short, long, global = true, default_value = "bindgen.toml")]
    manifest: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Render bindings into the output directory
    Generate {
        /// Override the manifest's output directory
        #[arg(short, long)]
        out_dir: Option<PathBuf>,

        /// Compare with the files on disk instead of writing
        #[arg(long)]
        check: bool,
    },

    /// List the contracts in the manifest
    List,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_logging(cli.verbose);

    let manifest = Manifest::load(&cli.manifest)
        .wrap_err_with(|| format!("Failed to load {}", cli.manifest.display()))?;
    tracing::info!(
        manifest = %cli.manifest.display(),
        contracts = manifest.contracts.len(),
        "Manifest loaded"
    );

    match cli.command {
        Commands::Generate { out_dir, check } => {
            let dir = out_dir.unwrap_or_else(|| manifest.output_dir());
            let files = generate(&manifest)?;

            if check {
                let stale = stale_files(&dir, &files);
                if !stale.is_empty() {
                    for path in &stale {
                        tracing::error!(path = %path.display(), "Binding is out of date");
                    }
                    bail!(
                        "{} binding file(s) are out of date; run `bindgen generate`",
                        stale.len()
                    );
                }
                tracing::info!(dir = %dir.display(), "Bindings are up to date");
            } else {
                write_files(&dir, &files)?;
                tracing::info!(dir = %dir.display(), files = files.len(), "Bindings generated");
            }
        }
        Commands::List => {
            for source in &manifest.contracts {
                let artifact = Artifact::load(&manifest, source)?;
                let abi = contract_bind::AbiDescriptor::parse(&artifact.abi)
                    .wrap_err_with(|| format!("Invalid ABI for {}", artifact.name))?;
                println!(
                    "{:<24} methods={:<3} events={:<3} errors={:<3} bytecode={}",
                    artifact.name,
                    abi.methods().len(),
                    abi.events().len(),
                    abi.errors().len(),
                    (artifact.bytecode.len() - 2) / 2
                );
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
