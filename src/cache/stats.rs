//! Cache statistics
//!
//! Describes the stored catalog snapshot for `brewmatch cache`.

use std::path::PathBuf;
use std::time::SystemTime;

use crate::catalog::Catalog;
use crate::common::string_utils::format_size;
use crate::error::{Result, cache_operation_failed};

/// Information about the stored catalog snapshot
#[derive(Debug, Clone)]
pub struct SnapshotStats {
    /// Snapshot location
    pub path: PathBuf,
    /// Size in bytes
    pub size: u64,
    /// Last modification time, when the platform reports it
    pub modified: Option<SystemTime>,
    /// Number of usable catalog entries, `None` when the snapshot does not parse
    pub entries: Option<usize>,
    /// BLAKE3 fingerprint of the raw snapshot
    pub fingerprint: String,
}

impl SnapshotStats {
    /// Format size as human-readable string
    pub fn formatted_size(&self) -> String {
        format_size(self.size)
    }

    /// Age of the snapshot in whole hours
    pub fn age_hours(&self) -> Option<u64> {
        let modified = self.modified?;
        SystemTime::now()
            .duration_since(modified)
            .ok()
            .map(|age| age.as_secs() / 3600)
    }
}

/// Statistics for the stored snapshot, `None` when nothing is cached
pub fn snapshot_stats() -> Result<Option<SnapshotStats>> {
    let path = super::snapshot_path()?;
    if !path.is_file() {
        return Ok(None);
    }

    let bytes = std::fs::read(&path).map_err(|e| {
        cache_operation_failed(format!("Failed to read snapshot {}: {}", path.display(), e))
    })?;
    let metadata = std::fs::metadata(&path)
        .map_err(|e| cache_operation_failed(format!("Failed to get metadata: {}", e)))?;

    let catalog = Catalog::from_json_bytes(&bytes, &path.display().to_string());
    let (entries, fingerprint) = match catalog {
        Ok(catalog) => (Some(catalog.len()), catalog.fingerprint().to_string()),
        Err(e) => {
            log::warn!("Cached snapshot does not parse: {}", e);
            (None, crate::hash::hash_bytes(&bytes))
        }
    };

    Ok(Some(SnapshotStats {
        path,
        size: metadata.len(),
        modified: metadata.modified().ok(),
        entries,
        fingerprint,
    }))
}
