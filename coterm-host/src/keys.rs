//! Reading private key files into byte blobs.

use anyhow::{Context, Result};
use std::path::Path;

/// Read each path into a byte blob, preserving input order.
///
/// Fails on the first unreadable path with that path in the error
/// context; no partial result is returned.
pub fn read_key_files<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<Vec<u8>>> {
    let mut blobs = Vec::with_capacity(paths.len());

    for path in paths {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .with_context(|| format!("failed to read file {}", path.display()))?;
        blobs.push(bytes);
    }

    Ok(blobs)
}
