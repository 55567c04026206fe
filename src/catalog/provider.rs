//! Catalog sources
//!
//! A [`CatalogProvider`] knows how to produce a [`Catalog`]. The resolver never talks
//! to a provider directly; it goes through [`super::CatalogCache`].

use std::path::PathBuf;

use super::Catalog;
use crate::cache;
use crate::error::{
    BrewmatchError,
    Result,
    catalog_fetch_failed,
    catalog_unavailable,
    file_read_failed,
};
use crate::http::HttpClient;
use crate::progress::FetchSpinner;

/// Something that can load the full cask catalog
pub trait CatalogProvider: Send + Sync {
    /// Human-readable origin, used in logs and error messages
    fn describe(&self) -> String;

    /// Load the catalog; may be slow and may fail
    fn fetch_catalog(&self) -> Result<Catalog>;
}

/// Reads a `cask.json` snapshot from disk
#[derive(Debug, Clone)]
pub struct FileCatalogProvider {
    path: PathBuf,
}

impl FileCatalogProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Provider over the snapshot stored by the last online run
    pub fn cached_snapshot() -> Result<Self> {
        Ok(Self::new(cache::snapshot_path()?))
    }
}

impl CatalogProvider for FileCatalogProvider {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch_catalog(&self) -> Result<Catalog> {
        if !self.path.is_file() {
            return Err(catalog_unavailable(
                format!("no catalog snapshot at {}", self.path.display()),
            ));
        }

        let bytes = std::fs::read(&self.path)
            .map_err(|e| file_read_failed(self.path.display().to_string(), e.to_string()))?;

        let catalog = Catalog::from_json_bytes(&bytes, &self.describe())?;
        log::debug!("Loaded {} casks from {}", catalog.len(), self.path.display());
        Ok(catalog)
    }
}

/// Downloads the catalog from the Homebrew formulae API
///
/// A successful download is stored as the offline snapshot. Failing to store it is
/// logged and otherwise ignored.
#[derive(Debug, Clone)]
pub struct HttpCatalogProvider {
    client: HttpClient,
    url: String,
    store_snapshot: bool,
}

impl HttpCatalogProvider {
    pub fn new(client: HttpClient, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
            store_snapshot: true,
        }
    }

    /// Skip writing the offline snapshot
    #[cfg(test)]
    pub fn without_snapshot(mut self) -> Self {
        self.store_snapshot = false;
        self
    }
}

impl CatalogProvider for HttpCatalogProvider {
    fn describe(&self) -> String {
        self.url.clone()
    }

    fn fetch_catalog(&self) -> Result<Catalog> {
        let spinner = FetchSpinner::start("Fetching Homebrew cask catalog...");
        let bytes = match self.client.get_bytes(&self.url) {
            Ok(bytes) => bytes,
            Err(e) => {
                spinner.abandon();
                let reason = match e {
                    BrewmatchError::HttpRequestFailed { reason, .. } => reason,
                    other => other.to_string(),
                };
                return Err(catalog_fetch_failed(self.url.clone(), reason));
            }
        };
        spinner.finish();

        let catalog = Catalog::from_json_bytes(&bytes, &self.url)?;
        log::info!("Fetched {} casks from {}", catalog.len(), self.url);

        if self.store_snapshot {
            if let Err(e) = cache::write_snapshot(&bytes) {
                log::warn!("Could not store catalog snapshot: {}", e);
            }
        }

        Ok(catalog)
    }
}
