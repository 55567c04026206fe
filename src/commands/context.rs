//! Shared setup for commands: configuration and catalog source

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::catalog::{CatalogCache, CatalogProvider, FileCatalogProvider, HttpCatalogProvider};
use crate::config::Config;
use crate::error::Result;
use crate::http::HttpClient;

/// Where the catalog comes from for this run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// The Homebrew API (default)
    Remote,
    /// The snapshot cached by the last online run
    Offline,
    /// A local `cask.json`
    File(PathBuf),
}

impl CatalogSource {
    pub fn from_flags(catalog: Option<PathBuf>, offline: bool) -> Self {
        match (catalog, offline) {
            (Some(path), _) => Self::File(path),
            (None, true) => Self::Offline,
            (None, false) => Self::Remote,
        }
    }
}

/// Configuration plus the lazily loaded catalog
pub struct CommandContext {
    pub config: Config,
    pub catalog: CatalogCache,
}

impl CommandContext {
    /// Load configuration and wire up the catalog source
    ///
    /// Nothing is fetched here. A source that cannot even be set up becomes an
    /// unavailable catalog, which `resolve` reports as manual review.
    pub fn new(config_path: Option<&Path>, source: CatalogSource) -> Result<Self> {
        let config = Config::load(config_path)?;
        let catalog = match build_provider(&config, &source) {
            Ok(provider) => CatalogCache::new(provider),
            Err(e) => {
                log::warn!("Catalog source unusable: {}", e);
                CatalogCache::unavailable(e.to_string())
            }
        };

        Ok(Self { config, catalog })
    }

    pub fn http_client(&self) -> Result<HttpClient> {
        HttpClient::new(Duration::from_secs(self.config.timeout_secs))
    }
}

fn build_provider(config: &Config, source: &CatalogSource) -> Result<Box<dyn CatalogProvider>> {
    Ok(match source {
        CatalogSource::File(path) => Box::new(FileCatalogProvider::new(path)),
        CatalogSource::Offline => Box::new(FileCatalogProvider::cached_snapshot()?),
        CatalogSource::Remote => {
            let client = HttpClient::new(Duration::from_secs(config.timeout_secs))?;
            Box::new(HttpCatalogProvider::new(client, &config.catalog_url))
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogState;
    use tempfile::TempDir;

    #[test]
    fn test_source_from_flags() {
        assert_eq!(CatalogSource::from_flags(None, false), CatalogSource::Remote);
        assert_eq!(CatalogSource::from_flags(None, true), CatalogSource::Offline);
        assert_eq!(
            CatalogSource::from_flags(Some(PathBuf::from("cask.json")), false),
            CatalogSource::File(PathBuf::from("cask.json"))
        );
    }

    #[test]
    fn test_context_with_catalog_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("cask.json");
        std::fs::write(&path, r#"[{"token":"signal","name":["Signal"]}]"#).unwrap();

        let ctx = CommandContext::new(None, CatalogSource::File(path)).unwrap();
        assert!(matches!(ctx.catalog.state(), CatalogState::Ready(_)));
    }

    #[test]
    fn test_context_with_missing_catalog_file() {
        let temp = TempDir::new().unwrap();
        let ctx =
            CommandContext::new(None, CatalogSource::File(temp.path().join("none.json"))).unwrap();
        assert!(matches!(
            ctx.catalog.state(),
            CatalogState::Unavailable { .. }
        ));
    }

    #[test]
    fn test_context_missing_explicit_config() {
        let temp = TempDir::new().unwrap();
        let result = CommandContext::new(
            Some(&temp.path().join("brewmatch.yaml")),
            CatalogSource::Remote,
        );
        assert!(result.is_err());
    }
}
