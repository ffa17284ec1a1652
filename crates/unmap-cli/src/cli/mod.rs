//! CLI for the unmap source reconstructor.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use unmap_core::config;

use commands::{run_extract, run_sources, run_unpack};

/// Top-level CLI for unmap.
#[derive(Debug, Parser)]
#[command(name = "unmap")]
#[command(about = "unmap: reconstruct original sources of a deployed web bundle", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch the deployed bundle, its source map, and rebuild the original tree.
    Extract {
        /// Destination directory for artifacts and the reconstructed tree.
        #[arg(long, default_value = "files", value_name = "DIR")]
        out: PathBuf,
    },

    /// Decode a local source-map file and rebuild its tree (no network).
    Unpack {
        /// Path to the source-map document.
        map: PathBuf,

        /// Destination directory for the reconstructed tree.
        #[arg(long, default_value = "files", value_name = "DIR")]
        out: PathBuf,
    },

    /// List the original source identifiers a local source map references.
    Sources {
        /// Path to the source-map document.
        map: PathBuf,

        /// Emit the list as JSON.
        #[arg(long)]
        json: bool,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Extract { out } => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                run_extract(&cfg, &out)?;
            }
            CliCommand::Unpack { map, out } => run_unpack(&map, &out)?,
            CliCommand::Sources { map, json } => run_sources(&map, json)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
