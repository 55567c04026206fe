//! Fuzzy cask-name resolution
//!
//! Maps a free-text application name ("Visual Studio Code", "signal app") to the
//! Homebrew cask token it most likely refers to.
//!
//! The pipeline has four stages:
//! - [`normalize`]: canonical comparison form of a name
//! - [`similarity`]: one confidence score per query/entry pair
//! - [`rank`]: best-first candidate list over the whole catalog
//! - [`policy`]: auto-accept, accept with alternatives, or manual review
//!
//! [`Resolver`] ties them together over a shared [`CatalogCache`]. Resolution never
//! fails: a missing catalog becomes a manual-review outcome that says so.

pub mod config;
pub mod normalize;
pub mod policy;
pub mod query;
pub mod rank;
pub mod similarity;

pub use config::ResolverConfig;
pub use policy::{Outcome, RankedMatch, Resolution, ReviewReason};
pub use query::SearchQuery;
pub use rank::{ScoredCandidate, rank};

use crate::catalog::{CatalogCache, CatalogState};
use crate::error::Result;

/// Resolves app names against a lazily loaded catalog
///
/// Holds no mutable state; one resolver can serve many queries, from many threads.
pub struct Resolver<'c> {
    config: ResolverConfig,
    catalog: &'c CatalogCache,
}

impl<'c> Resolver<'c> {
    pub fn new(config: ResolverConfig, catalog: &'c CatalogCache) -> Self {
        Self { config, catalog }
    }

    /// Resolve one free-text app name
    ///
    /// Deterministic for a given catalog snapshot and query.
    pub fn resolve(&self, raw_query: &str) -> Resolution {
        let query = SearchQuery::new(raw_query);

        let catalog = match self.catalog.state() {
            CatalogState::Ready(catalog) => catalog,
            CatalogState::Unavailable { reason } => {
                log::warn!(
                    "Cannot resolve '{}': catalog unavailable ({})",
                    query.raw_text(),
                    reason
                );
                return policy::catalog_unavailable(query.raw_text(), reason.as_str());
            }
        };

        let ranked = rank(
            &query,
            catalog.entries(),
            self.config.min_candidate_score,
            self.config.max_ranked_results,
        );

        let mut resolution = policy::decide(query.raw_text(), &ranked, &self.config);
        resolution.catalog_fingerprint = Some(catalog.fingerprint().to_string());

        log::info!(
            "Resolved '{}' -> {} ({})",
            resolution.query,
            resolution.primary_token.as_deref().unwrap_or("-"),
            resolution.outcome
        );

        resolution
    }

    /// Resolve several names, in parallel, keeping input order
    pub fn resolve_all(&self, raw_queries: &[String]) -> Vec<Resolution> {
        use rayon::prelude::*;

        raw_queries.par_iter().map(|q| self.resolve(q)).collect()
    }

    /// Ranked candidates for `raw_query` without a policy decision
    ///
    /// Unlike [`Resolver::resolve`], an unavailable catalog is an error here: an empty
    /// result must mean "nothing matched".
    pub fn search(
        &self,
        raw_query: &str,
        min_score: f64,
        limit: usize,
    ) -> Result<Vec<ScoredCandidate<'c>>> {
        let catalog = self.catalog.catalog()?;
        let query = SearchQuery::new(raw_query);
        Ok(rank(&query, catalog.entries(), min_score, limit))
    }
}
