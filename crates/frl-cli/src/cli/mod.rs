//! CLI for the FRL fallback resource loader.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use frl_core::config;

use commands::{run_load, run_probe};
use frl_core::dom::ResourceKind;

/// Top-level CLI for the FRL fallback resource loader.
#[derive(Debug, Parser)]
#[command(name = "frl")]
#[command(about = "FRL: fallback resource loader for web page assets", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Load the first working script from an ordered candidate list.
    Script {
        /// Candidate URLs, tried in order.
        #[arg(required = true)]
        urls: Vec<String>,

        /// Print the whole resulting document instead of just the winning tag.
        #[arg(long)]
        emit_document: bool,
    },

    /// Load the first working stylesheet from an ordered candidate list.
    Style {
        /// Candidate URLs, tried in order.
        #[arg(required = true)]
        urls: Vec<String>,

        /// Print the whole resulting document instead of just the winning tag.
        #[arg(long)]
        emit_document: bool,
    },

    /// Probe a single URL for reachability.
    Probe {
        /// Direct HTTP/HTTPS URL to probe.
        url: String,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Script {
                urls,
                emit_document,
            } => run_load(&cfg, ResourceKind::Script, urls, emit_document).await?,
            CliCommand::Style {
                urls,
                emit_document,
            } => run_load(&cfg, ResourceKind::Style, urls, emit_document).await?,
            CliCommand::Probe { url } => run_probe(&cfg, &url).await?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
