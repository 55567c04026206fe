//! Candidate ranking over the whole catalog

use rayon::prelude::*;
use serde::Serialize;

use crate::catalog::CatalogEntry;

use super::query::SearchQuery;
use super::similarity::score;

/// A catalog entry paired with its score for one query
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoredCandidate<'a> {
    /// The matched entry
    pub entry: &'a CatalogEntry,
    /// Confidence in `[0, 1]`
    pub score: f64,
}

impl<'a> ScoredCandidate<'a> {
    /// Token of the matched entry
    pub fn token(&self) -> &'a str {
        &self.entry.token
    }
}

/// Score `query` against every entry and keep the best matches
///
/// Entries scoring strictly below `min_score` are dropped. The rest are sorted by
/// descending score, ties keeping catalog order, and truncated to `max_results`.
/// Scoring is spread across threads; the catalog is only read.
pub fn rank<'a>(
    query: &SearchQuery,
    catalog: &'a [CatalogEntry],
    min_score: f64,
    max_results: usize,
) -> Vec<ScoredCandidate<'a>> {
    if catalog.is_empty() || max_results == 0 {
        return Vec::new();
    }

    // collect preserves catalog order, so the stable sort below breaks ties by it
    let mut candidates: Vec<ScoredCandidate<'a>> = catalog
        .par_iter()
        .map(|entry| ScoredCandidate {
            entry,
            score: score(query, entry),
        })
        .filter(|candidate| candidate.score >= min_score)
        .collect();

    candidates.sort_by(|a, b| b.score.total_cmp(&a.score));
    candidates.truncate(max_results);

    log::debug!(
        "Ranked {} catalog entries for '{}': {} kept above {:.2}",
        catalog.len(),
        query.raw_text(),
        candidates.len(),
        min_score
    );

    candidates
}
