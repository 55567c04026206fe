//! Similarity scoring between a query and one catalog entry
//!
//! Each applicable signal yields a weighted value and the score is the strongest
//! one. Taking the maximum keeps many weak signals from adding up to a confident
//! match.

use std::collections::HashSet;

use crate::catalog::CatalogEntry;

use super::normalize::normalize;
use super::query::SearchQuery;

/// Token equals the query, ignoring case
pub const EXACT_TOKEN: f64 = 1.0;
/// Token equals the query with spaces written as hyphens
pub const DASHED_TOKEN: f64 = 0.98;
/// A display name equals the query after normalization
pub const EXACT_NAME: f64 = 0.95;
/// Weight of the normalized token similarity ratio
pub const TOKEN_SIMILARITY_WEIGHT: f64 = 0.9;
/// Weight of the normalized display name similarity ratio
pub const NAME_SIMILARITY_WEIGHT: f64 = 0.85;
/// Weight of the word overlap ratio against a display name
pub const WORD_OVERLAP_WEIGHT: f64 = 0.8;
/// Query and token contain one another once spaces and hyphens are removed
pub const SUBSTRING: f64 = 0.7;

/// Character-level similarity ratio in `[0, 1]`
///
/// Normalized Levenshtein similarity on lower-cased input: symmetric, 1.0 for equal
/// non-empty strings and decreasing as the edit distance grows. Two empty strings
/// have nothing in common to compare and score 0.0.
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 0.0;
    }
    strsim::normalized_levenshtein(&a.to_lowercase(), &b.to_lowercase())
}

/// Word overlap: shared words over the larger word count, 0.0 if either side is empty
pub fn word_overlap(query_words: &HashSet<&str>, name: &str) -> f64 {
    let name_words: HashSet<&str> = name.split_whitespace().collect();
    if query_words.is_empty() || name_words.is_empty() {
        return 0.0;
    }

    let shared = query_words.intersection(&name_words).count();
    let larger = query_words.len().max(name_words.len());
    shared as f64 / larger as f64
}

/// Score how well `query` matches `entry`, in `[0, 1]`
pub fn score(query: &SearchQuery, entry: &CatalogEntry) -> f64 {
    let token = entry.token.to_lowercase();
    let mut best: f64 = 0.0;

    if !query.lowercase().is_empty() {
        if token == query.lowercase() {
            best = best.max(EXACT_TOKEN);
        }
        if token == query.dashed() {
            best = best.max(DASHED_TOKEN);
        }
    }

    let normalized_token = normalize(&token);
    best = best.max(
        similarity_ratio(query.normalized(), &normalized_token) * TOKEN_SIMILARITY_WEIGHT,
    );

    let query_words = query.words();
    for name in &entry.names {
        let normalized_name = normalize(name);
        if !query.is_blank() && normalized_name == query.normalized() {
            best = best.max(EXACT_NAME);
        }
        best = best.max(
            similarity_ratio(query.normalized(), &normalized_name) * NAME_SIMILARITY_WEIGHT,
        );
        best = best.max(word_overlap(&query_words, &normalized_name) * WORD_OVERLAP_WEIGHT);
    }

    let compact_token = token.replace('-', "");
    if !query.compact().is_empty()
        && !compact_token.is_empty()
        && (compact_token.contains(query.compact()) || query.compact().contains(&compact_token))
    {
        best = best.max(SUBSTRING);
    }

    best.clamp(0.0, 1.0)
}
