//! Host log file and tracing setup.

use anyhow::{Context, Result};
use std::fs::{File, OpenOptions};
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// File name of the host log inside the app directory.
pub const LOG_FILE: &str = "coterm.log";

/// Open the host log file in `dir` for appending, creating it if absent.
pub fn open_host_log(dir: &Path) -> Result<File> {
    let path = dir.join(LOG_FILE);
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {}", path.display()))
}

/// Install the global tracing subscriber, writing to the given log file.
///
/// The filter is taken from `RUST_LOG` when set, defaulting to `info`.
/// Call once at startup, after [`open_host_log`].
pub fn init(log_file: File) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false)
        .init();
}
