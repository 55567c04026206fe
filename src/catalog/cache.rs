//! Process-wide, load-once catalog holder

use std::sync::OnceLock;

use super::{Catalog, CatalogProvider};
use crate::error::{Result, catalog_unavailable};

/// Outcome of the single catalog load
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogState {
    Ready(Catalog),
    /// The load failed or produced no usable entries
    Unavailable { reason: String },
}

/// Lazily loads the catalog on first use and shares it afterwards
///
/// The provider is invoked at most once, even when several threads ask for the
/// catalog at the same time. A failed load is remembered too; later callers see the
/// same [`CatalogState::Unavailable`] without another fetch.
pub struct CatalogCache {
    provider: Option<Box<dyn CatalogProvider>>,
    state: OnceLock<CatalogState>,
}

impl CatalogCache {
    pub fn new(provider: Box<dyn CatalogProvider>) -> Self {
        Self {
            provider: Some(provider),
            state: OnceLock::new(),
        }
    }

    /// Cache that is already loaded with `catalog`
    #[cfg(test)]
    pub fn from_catalog(catalog: Catalog) -> Self {
        let state = OnceLock::new();
        let _ = state.set(Self::classify(Ok(catalog)));
        Self {
            provider: None,
            state,
        }
    }

    /// Cache whose catalog could not even be set up
    pub fn unavailable(reason: impl Into<String>) -> Self {
        let state = OnceLock::new();
        let _ = state.set(CatalogState::Unavailable {
            reason: reason.into(),
        });
        Self {
            provider: None,
            state,
        }
    }

    /// Load on first call, then return the remembered state
    pub fn state(&self) -> &CatalogState {
        self.state.get_or_init(|| match &self.provider {
            Some(provider) => {
                log::debug!("Loading catalog from {}", provider.describe());
                Self::classify(provider.fetch_catalog())
            }
            None => CatalogState::Unavailable {
                reason: "no catalog source configured".to_string(),
            },
        })
    }

    /// The loaded catalog, or [`crate::error::BrewmatchError::CatalogUnavailable`]
    pub fn catalog(&self) -> Result<&Catalog> {
        match self.state() {
            CatalogState::Ready(catalog) => Ok(catalog),
            CatalogState::Unavailable { reason } => Err(catalog_unavailable(reason.clone())),
        }
    }

    /// True once a load has been attempted
    #[cfg(test)]
    pub fn is_loaded(&self) -> bool {
        self.state.get().is_some()
    }

    fn classify(result: Result<Catalog>) -> CatalogState {
        match result {
            Ok(catalog) if catalog.is_empty() => {
                log::warn!("Catalog from {} contains no casks", catalog.source());
                CatalogState::Unavailable {
                    reason: format!("catalog from {} is empty", catalog.source()),
                }
            }
            Ok(catalog) => CatalogState::Ready(catalog),
            Err(e) => {
                log::warn!("Catalog unavailable: {}", e);
                CatalogState::Unavailable {
                    reason: e.to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BrewmatchError;
    use crate::catalog::CatalogEntry;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingProvider {
        calls: Arc<AtomicUsize>,
        entries: Vec<CatalogEntry>,
    }

    impl CatalogProvider for CountingProvider {
        fn describe(&self) -> String {
            "counting".to_string()
        }

        fn fetch_catalog(&self) -> Result<Catalog> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(Catalog::from_entries(self.entries.clone(), "counting"))
        }
    }

    struct FailingProvider {
        calls: Arc<AtomicUsize>,
    }

    impl CatalogProvider for FailingProvider {
        fn describe(&self) -> String {
            "failing".to_string()
        }

        fn fetch_catalog(&self) -> Result<Catalog> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(BrewmatchError::CatalogFetchFailed {
                url: "https://example.invalid/cask.json".to_string(),
                reason: "connection refused".to_string(),
            })
        }
    }

    fn counting(entries: Vec<CatalogEntry>) -> (CatalogCache, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let cache = CatalogCache::new(Box::new(CountingProvider {
            calls: Arc::clone(&calls),
            entries,
        }));
        (cache, calls)
    }

    #[test]
    fn test_lazy_load() {
        let (cache, calls) = counting(vec![CatalogEntry::new("signal", ["Signal"])]);
        assert!(!cache.is_loaded());
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        assert_eq!(cache.catalog().unwrap().len(), 1);
        assert!(cache.is_loaded());
    }

    #[test]
    fn test_provider_invoked_once() {
        let (cache, calls) = counting(vec![CatalogEntry::new("signal", ["Signal"])]);
        for _ in 0..5 {
            cache.catalog().unwrap();
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_provider_invoked_once_across_threads() {
        let (cache, calls) = counting(vec![CatalogEntry::new("signal", ["Signal"])]);

        std::thread::scope(|s| {
            for _ in 0..8 {
                s.spawn(|| {
                    assert_eq!(cache.catalog().unwrap().len(), 1);
                });
            }
        });

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_failure_is_remembered() {
        let calls = Arc::new(AtomicUsize::new(0));
        let cache = CatalogCache::new(Box::new(FailingProvider {
            calls: Arc::clone(&calls),
        }));

        for _ in 0..3 {
            let err = cache.catalog().unwrap_err();
            assert!(matches!(err, BrewmatchError::CatalogUnavailable { .. }));
            assert!(err.to_string().contains("connection refused"));
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_empty_catalog_is_unavailable() {
        let (cache, _) = counting(Vec::new());
        match cache.state() {
            CatalogState::Unavailable { reason } => assert!(reason.contains("empty")),
            CatalogState::Ready(_) => panic!("empty catalog must not be ready"),
        }
    }

    #[test]
    fn test_unavailable_cache() {
        let cache = CatalogCache::unavailable("no cache directory");
        assert!(cache.is_loaded());
        assert!(
            cache
                .catalog()
                .unwrap_err()
                .to_string()
                .contains("no cache directory")
        );
    }

    #[test]
    fn test_from_catalog_is_preloaded() {
        let cache = CatalogCache::from_catalog(Catalog::from_entries(
            vec![CatalogEntry::new("slack", ["Slack"])],
            "memory",
        ));
        assert!(cache.is_loaded());
        assert_eq!(cache.catalog().unwrap().entries()[0].token, "slack");
    }
}
