//! Resolution policy: turns a ranked candidate list into an outcome

use serde::Serialize;

use super::config::ResolverConfig;
use super::rank::ScoredCandidate;

/// What the caller may do with a resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Top score reached the high-confidence threshold
    AutoAccept,
    /// Top score reached the moderate threshold only; alternatives are disclosed
    AcceptWithAlternatives,
    /// Nothing is confident enough to act on
    ManualReview,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Outcome::AutoAccept => "auto-accept",
            Outcome::AcceptWithAlternatives => "accept-with-alternatives",
            Outcome::ManualReview => "manual-review",
        };
        f.write_str(label)
    }
}

/// Why a resolution ended in [`Outcome::ManualReview`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReviewReason {
    /// The catalog could not be loaded or was empty; no ranking took place
    CatalogUnavailable { reason: String },
    /// The catalog was scored but no candidate reached the moderate threshold
    NoConfidentMatch,
}

/// One ranked candidate, detached from the catalog it came from
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedMatch {
    pub token: String,
    pub name: String,
    pub score: f64,
}

impl From<&ScoredCandidate<'_>> for RankedMatch {
    fn from(candidate: &ScoredCandidate<'_>) -> Self {
        Self {
            token: candidate.entry.token.clone(),
            name: candidate.entry.display_name().to_string(),
            score: candidate.score,
        }
    }
}

/// Result of resolving one free-text app name
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resolution {
    /// The query as resolved (trimmed)
    pub query: String,
    pub outcome: Outcome,
    /// Token to act on; `None` for manual review
    pub primary_token: Option<String>,
    /// Next-ranked tokens for a moderate pick, or the whole ranked list for manual review
    pub alternatives: Vec<String>,
    /// Every ranked candidate with its score
    pub candidates: Vec<RankedMatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<ReviewReason>,
    /// BLAKE3 fingerprint of the catalog snapshot that was scored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_fingerprint: Option<String>,
}

impl Resolution {
    /// Score of the best candidate, if any
    pub fn top_score(&self) -> Option<f64> {
        self.candidates.first().map(|c| c.score)
    }

    /// True when the catalog could not be consulted at all
    pub fn is_catalog_unavailable(&self) -> bool {
        matches!(self.reason, Some(ReviewReason::CatalogUnavailable { .. }))
    }
}

/// Decide the outcome for a ranked candidate list
///
/// A pure function of the top score and the two thresholds. An empty list is a
/// [`ReviewReason::NoConfidentMatch`]: the caller ranked a catalog and found nothing.
pub fn decide(
    query: &str,
    ranked: &[ScoredCandidate<'_>],
    config: &ResolverConfig,
) -> Resolution {
    let candidates: Vec<RankedMatch> = ranked.iter().map(RankedMatch::from).collect();

    let (outcome, primary_token, alternatives, reason) = match ranked.first() {
        Some(top) if top.score >= config.high_confidence_threshold => (
            Outcome::AutoAccept,
            Some(top.token().to_string()),
            Vec::new(),
            None,
        ),
        Some(top) if top.score >= config.moderate_threshold => (
            Outcome::AcceptWithAlternatives,
            Some(top.token().to_string()),
            ranked
                .iter()
                .skip(1)
                .take(config.max_alternatives)
                .map(|c| c.token().to_string())
                .collect(),
            None,
        ),
        _ => (
            Outcome::ManualReview,
            None,
            ranked.iter().map(|c| c.token().to_string()).collect(),
            Some(ReviewReason::NoConfidentMatch),
        ),
    };

    Resolution {
        query: query.to_string(),
        outcome,
        primary_token,
        alternatives,
        candidates,
        reason,
        catalog_fingerprint: None,
    }
}

/// Manual review because the catalog itself could not be consulted
pub fn catalog_unavailable(query: &str, reason: impl Into<String>) -> Resolution {
    Resolution {
        query: query.to_string(),
        outcome: Outcome::ManualReview,
        primary_token: None,
        alternatives: Vec::new(),
        candidates: Vec::new(),
        reason: Some(ReviewReason::CatalogUnavailable {
            reason: reason.into(),
        }),
        catalog_fingerprint: None,
    }
}
