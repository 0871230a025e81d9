//! Structured logging setup
//!
//! The terminal viewer owns stdout and stderr, so events are only recorded
//! when a log file is given.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::LOG_FILTER_ENV;
use crate::error::{DiffError, Result};

/// Filter used when `LINEDIFF_LOG` is unset or invalid
const DEFAULT_FILTER: &str = "info";

/// Install a global `tracing` subscriber writing to `log_file`.
///
/// Returns `Ok(false)` when no file is given or a subscriber is already set.
pub fn init(log_file: Option<&Path>) -> Result<bool> {
    let Some(path) = log_file else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| DiffError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    let filter =
        EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .is_ok();

    if installed {
        tracing::info!(version = env!("CARGO_PKG_VERSION"), "logging started");
    }
    Ok(installed)
}
