//! Oldest-first folder eviction
//!
//! Every write to a managed folder is followed by an eviction pass: while
//! the folder is over its size ceiling, the file with the oldest
//! modification time is deleted. Single-writer is assumed; two processes
//! evicting the same folder can race between the size check and the delete.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tracing::{debug, warn};

/// Total size in bytes of the plain files directly inside `dir`.
///
/// Subdirectories are ignored; eviction only ever removes top-level files.
pub fn dir_size_bytes(dir: &Path) -> Result<u64> {
    let mut total = 0u64;
    for entry in fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory: {}", dir.display()))?
    {
        let entry = entry?;
        let metadata = entry.metadata()?;
        if metadata.is_file() {
            total += metadata.len();
        }
    }
    Ok(total)
}

/// Delete the oldest files in `dir` until its total size is at or below
/// `max_bytes`. Returns the number of files evicted.
///
/// The loop stops once the folder fits or no files remain.
pub fn enforce_ceiling_bytes(dir: &Path, max_bytes: u64) -> Result<usize> {
    let mut evicted = 0;
    while dir_size_bytes(dir)? > max_bytes {
        let Some(oldest) = oldest_file(dir)? else {
            break;
        };
        let size = fs::metadata(&oldest).map(|m| m.len()).unwrap_or(0);
        fs::remove_file(&oldest)
            .with_context(|| format!("Failed to evict file: {}", oldest.display()))?;
        warn!(
            "Evicted {} ({} bytes) from over-ceiling folder",
            oldest.display(),
            size
        );
        evicted += 1;
    }
    if evicted > 0 {
        debug!("Eviction pass removed {} file(s) from {}", evicted, dir.display());
    }
    Ok(evicted)
}

/// Eviction pass with the ceiling given in MB, as configured.
pub fn enforce_ceiling(dir: &Path, max_mb: u64) -> Result<usize> {
    enforce_ceiling_bytes(dir, max_mb * 1024 * 1024)
}

/// Path of the file in `dir` with the smallest modification time.
fn oldest_file(dir: &Path) -> Result<Option<PathBuf>> {
    let mut oldest: Option<(SystemTime, PathBuf)> = None;
    for entry in fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory: {}", dir.display()))?
    {
        let entry = entry?;
        let metadata = entry.metadata()?;
        if !metadata.is_file() {
            continue;
        }
        let modified = metadata.modified()?;
        let replace = match &oldest {
            Some((current, _)) => modified < *current,
            None => true,
        };
        if replace {
            oldest = Some((modified, entry.path()));
        }
    }
    Ok(oldest.map(|(_, path)| path))
}
