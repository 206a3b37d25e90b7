//! Per-user application directory.

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Resolve the per-user coterm data directory.
///
/// Does not touch the filesystem; use [`ensure_app_dir`] to create it.
pub fn app_dir() -> Result<PathBuf> {
    let dirs = directories::ProjectDirs::from("com", "coterm", "coterm")
        .context("could not determine home directory")?;
    Ok(dirs.data_dir().to_path_buf())
}

/// Resolve the app directory and create it (and any missing parents).
pub fn ensure_app_dir() -> Result<PathBuf> {
    let dir = app_dir()?;
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create directory {}", dir.display()))?;
    Ok(dir)
}
