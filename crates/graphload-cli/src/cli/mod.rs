//! CLI for the graphload request sanitizer.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use graphload_core::config::{self, GraphLoadConfig};
use graphload_core::logging;
use std::path::{Path, PathBuf};

use commands::{run_check_host, run_config, run_normalize, run_translate};

/// Top-level CLI for graphload.
#[derive(Debug, Parser)]
#[command(name = "graphload")]
#[command(about = "graphload: sanitize graph data requests and normalize responses", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/graphload/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log debug output to stderr instead of the log file.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Translate a graph data URL into the safe URL that would be fetched.
    Translate {
        /// Graph URL, e.g. "wikiapi:///?action=query&list=allpages".
        url: String,
        /// Translate as a link to open instead of data to fetch.
        #[arg(long)]
        open: bool,
        /// Treat the graph as trusted (allows raw http/https).
        #[arg(long)]
        trusted: bool,
    },

    /// Check whether a host is allowlisted for a scheme.
    CheckHost {
        /// Scheme, e.g. "https" or "geoshape".
        scheme: String,
        /// Host name to check.
        host: String,
    },

    /// Normalize a saved response payload as the given protocol would.
    Normalize {
        /// Logical protocol, e.g. "tabular" or "wikidatasparql".
        protocol: String,
        /// File holding the raw payload.
        path: PathBuf,
        /// URL the payload was fetched from (used in error messages).
        #[arg(long)]
        url: Option<String>,
    },

    /// Show the config path and effective configuration.
    Config,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        init_logging(cli.verbose)?;
        let cfg = load_config(cli.config.as_deref())?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Translate { url, open, trusted } => {
                run_translate(&cfg, &url, open, trusted)?
            }
            CliCommand::CheckHost { scheme, host } => run_check_host(&cfg, &scheme, &host)?,
            CliCommand::Normalize {
                protocol,
                path,
                url,
            } => run_normalize(&protocol, &path, url.as_deref())?,
            CliCommand::Config => run_config(&cfg, cli.config.as_deref())?,
        }

        Ok(())
    }
}

/// Log to the state-dir file; `-v` or an unusable log file means stderr.
fn init_logging(verbose: bool) -> Result<()> {
    if !verbose {
        match logging::init_logging() {
            Ok(_) => return Ok(()),
            Err(e) => eprintln!("graphload: file logging unavailable ({e:#}), using stderr"),
        }
    }
    logging::init_logging_stderr(verbose)
}

fn load_config(path: Option<&Path>) -> Result<GraphLoadConfig> {
    match path {
        Some(p) => config::load_from(p),
        None => config::load_or_init(),
    }
}

#[cfg(test)]
mod tests;
