//! Logging init: append to a file under the XDG state dir, or write to stderr.

use anyhow::{anyhow, Result};
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,graphload=debug,graphload_core=debug";
const VERBOSE_FILTER: &str = "debug,graphload=trace,graphload_core=trace";

/// `~/.local/state/graphload/graphload.log`
pub fn log_file_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("graphload")?;
    Ok(xdg_dirs.get_state_home().join("graphload.log"))
}

/// `RUST_LOG` wins; otherwise the default (or verbose) filter.
fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER })
    })
}

/// Initialize structured logging to the state-dir log file.
///
/// On failure (e.g. log dir unwritable) returns Err so the caller can fall
/// back to [`init_logging_stderr`].
pub fn init_logging() -> Result<PathBuf> {
    let path = log_file_path()?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let file = fs::OpenOptions::new().create(true).append(true).open(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(false))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("install tracing subscriber: {e}"))?;

    tracing::info!("graphload logging initialized at {}", path.display());
    Ok(path)
}

/// Initialize logging to stderr only.
///
/// Fails if a global subscriber is already installed.
pub fn init_logging_stderr(verbose: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("install tracing subscriber: {e}"))
}
