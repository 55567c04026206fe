//! On-disk cache for catalog snapshots
//!
//! The last catalog fetched over HTTP is kept so `--offline` runs can resolve
//! against it.
//!
//! ## Cache Structure
//!
//! ```text
//! ~/.cache/brewmatch/
//! └── cask.json      raw Homebrew cask catalog, byte-for-byte as downloaded
//! ```

pub mod stats;

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use crate::error::{Result, cache_operation_failed};

pub use stats::{SnapshotStats, snapshot_stats};

/// Default cache directory name under user's cache directory
const CACHE_DIR: &str = "brewmatch";

/// File name of the stored catalog snapshot
pub const SNAPSHOT_FILE: &str = "cask.json";

/// Environment variable overriding the cache directory
pub const CACHE_DIR_ENV: &str = "BREWMATCH_CACHE_DIR";

/// Get the cache directory path
///
/// Returns `~/.cache/brewmatch` on Unix or equivalent on other platforms.
///
/// Can be overridden with the `BREWMATCH_CACHE_DIR` environment variable.
pub fn cache_dir() -> Result<PathBuf> {
    if let Ok(cache_dir) = std::env::var(CACHE_DIR_ENV) {
        return Ok(PathBuf::from(cache_dir));
    }

    let base = dirs::cache_dir()
        .ok_or_else(|| cache_operation_failed("Could not determine cache directory".to_string()))?;

    Ok(base.join(CACHE_DIR))
}

/// Path of the stored catalog snapshot
pub fn snapshot_path() -> Result<PathBuf> {
    Ok(cache_dir()?.join(SNAPSHOT_FILE))
}

/// Store a raw catalog snapshot
///
/// Written to a temporary file in the cache directory and renamed into place, so a
/// concurrent reader never sees a partial snapshot.
pub fn write_snapshot(bytes: &[u8]) -> Result<PathBuf> {
    let dir = cache_dir()?;
    fs::create_dir_all(&dir).map_err(|e| {
        cache_operation_failed(format!(
            "Failed to create cache directory {}: {}",
            dir.display(),
            e
        ))
    })?;

    let mut temp = tempfile::NamedTempFile::new_in(&dir).map_err(|e| {
        cache_operation_failed(format!("Failed to create temporary snapshot: {}", e))
    })?;
    temp.write_all(bytes)
        .map_err(|e| cache_operation_failed(format!("Failed to write snapshot: {}", e)))?;

    let path = dir.join(SNAPSHOT_FILE);
    temp.persist(&path).map_err(|e| {
        cache_operation_failed(format!("Failed to store snapshot {}: {}", path.display(), e))
    })?;

    log::debug!("Stored catalog snapshot ({} bytes) at {}", bytes.len(), path.display());
    Ok(path)
}

/// Remove the whole cache directory
pub fn clear_cache() -> Result<()> {
    let path = cache_dir()?;
    if path.exists() {
        fs::remove_dir_all(&path)
            .map_err(|e| cache_operation_failed(format!("Failed to clear cache: {}", e)))?;
    }
    Ok(())
}
