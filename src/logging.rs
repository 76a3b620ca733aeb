//! Tracing subscriber setup.
//!
//! Headless commands log to stderr. The explorer owns the terminal, so it logs
//! to a file under the config directory instead. `RUST_LOG` always wins over
//! the default filter.

use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::constants::LOG_FILE_NAME;

fn env_filter(verbose: bool) -> EnvFilter {
    let filter = if verbose { "debug" } else { "warn" };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into())
}

/// Initializes logging to stderr for headless commands.
///
/// Calling it more than once is harmless; later calls are ignored.
pub fn init_stderr(verbose: bool) {
    let _ = tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}

/// Initializes logging to `<config dir>/logs/colorvein.log`.
///
/// Returns the log file path.
///
/// # Errors
///
/// Returns an error if the log directory or file cannot be created.
pub fn init_file(verbose: bool) -> Result<PathBuf> {
    let log_dir = Config::log_dir()?;
    fs::create_dir_all(&log_dir).context(format!(
        "Failed to create log directory: {}",
        log_dir.display()
    ))?;

    let path = log_dir.join(LOG_FILE_NAME);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .context(format!("Failed to open log file: {}", path.display()))?;

    let _ = tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
        .try_init();

    Ok(path)
}
