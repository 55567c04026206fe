//! The installable-cask catalog
//!
//! A [`Catalog`] is an immutable snapshot of the Homebrew cask index. It is loaded
//! through a [`CatalogProvider`] and shared through a [`CatalogCache`], which fetches
//! at most once per process.

pub mod cache;
pub mod entry;
pub mod provider;

pub use cache::{CatalogCache, CatalogState};
pub use entry::CatalogEntry;
pub use provider::{CatalogProvider, FileCatalogProvider, HttpCatalogProvider};

use crate::error::{Result, catalog_parse_failed};
use crate::hash;

/// A loaded catalog snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    fingerprint: String,
    source: String,
}

impl Catalog {
    /// Parse the Homebrew `cask.json` format
    ///
    /// Records without a token are skipped. The fingerprint covers the raw bytes, so two
    /// runs against the same download report the same value.
    pub fn from_json_bytes(bytes: &[u8], source_name: &str) -> Result<Self> {
        let raw: Vec<CatalogEntry> = serde_json::from_slice(bytes)
            .map_err(|e| catalog_parse_failed(source_name.to_string(), e.to_string()))?;

        let total = raw.len();
        let entries: Vec<CatalogEntry> = raw
            .into_iter()
            .filter_map(CatalogEntry::sanitized)
            .collect();
        if entries.len() < total {
            log::debug!(
                "Skipped {} catalog records without a token from {}",
                total - entries.len(),
                source_name
            );
        }

        Ok(Self {
            entries,
            fingerprint: hash::hash_bytes(bytes),
            source: source_name.to_string(),
        })
    }

    /// Build a catalog from already-parsed entries
    #[cfg(test)]
    pub fn from_entries(entries: Vec<CatalogEntry>, source: impl Into<String>) -> Self {
        let entries: Vec<CatalogEntry> = entries
            .into_iter()
            .filter_map(CatalogEntry::sanitized)
            .collect();
        let listing = entries
            .iter()
            .map(|e| format!("{}\t{}", e.token, e.names.join("\t")))
            .collect::<Vec<_>>()
            .join("\n");

        Self {
            fingerprint: hash::hash_bytes(listing.as_bytes()),
            entries,
            source: source.into(),
        }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// BLAKE3 fingerprint of the snapshot
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    /// Where the snapshot came from (URL or file path)
    pub fn source(&self) -> &str {
        &self.source
    }
}
