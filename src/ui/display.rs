//! Text rendering for resolutions, search results and cache state

use std::fmt::Write as _;

use console::Style;

use crate::cache::SnapshotStats;
use crate::common::string_utils::{format_score, truncate_chars};
use crate::hash::short_fingerprint;
use crate::resolver::{Outcome, Resolution, ReviewReason, ScoredCandidate};

/// Longest description shown next to a search hit
const MAX_DESC_CHARS: usize = 60;

macro_rules! push_field {
    ($out:expr, $label:expr, $value:expr) => {
        let _ = writeln!(
            $out,
            "  {} {}",
            Style::new().bold().apply_to($label),
            $value
        );
    };
}

fn outcome_style(outcome: Outcome) -> Style {
    match outcome {
        Outcome::AutoAccept => Style::new().green().bold(),
        Outcome::AcceptWithAlternatives => Style::new().yellow().bold(),
        Outcome::ManualReview => Style::new().red().bold(),
    }
}

/// Multi-line summary of one resolution
pub fn format_resolution(resolution: &Resolution) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} {}",
        Style::new().bold().apply_to(&resolution.query),
        outcome_style(resolution.outcome).apply_to(resolution.outcome)
    );

    if let Some(token) = &resolution.primary_token {
        let score = resolution.top_score().map(format_score).unwrap_or_default();
        push_field!(
            out,
            "Cask:",
            format!("{} ({})", Style::new().cyan().apply_to(token), score)
        );
    }

    match &resolution.reason {
        Some(ReviewReason::CatalogUnavailable { reason }) => {
            push_field!(out, "Catalog unavailable:", reason);
        }
        Some(ReviewReason::NoConfidentMatch) => {
            push_field!(out, "Reason:", "no confident match");
        }
        None => {}
    }

    if resolution.outcome == Outcome::AcceptWithAlternatives && !resolution.alternatives.is_empty()
    {
        push_field!(out, "Alternatives:", resolution.alternatives.join(", "));
    }

    if resolution.outcome == Outcome::ManualReview && !resolution.candidates.is_empty() {
        let _ = writeln!(out, "  {}", Style::new().bold().apply_to("Closest matches:"));
        for candidate in &resolution.candidates {
            let _ = writeln!(
                out,
                "    {} {} {}",
                Style::new().cyan().apply_to(&candidate.token),
                Style::new().dim().apply_to(format!("({})", candidate.name)),
                format_score(candidate.score)
            );
        }
    }

    out
}

/// Ranked search hits, one per line
pub fn format_search_results(query: &str, results: &[ScoredCandidate<'_>]) -> String {
    let mut out = String::new();
    if results.is_empty() {
        let _ = writeln!(out, "No casks match '{}'.", query);
        return out;
    }

    let _ = writeln!(
        out,
        "{} ({}):",
        Style::new().bold().apply_to(format!("Matches for '{}'", query)),
        results.len()
    );
    for candidate in results {
        let _ = write!(
            out,
            "  {} {} {}",
            format_score(candidate.score),
            Style::new().cyan().bold().apply_to(candidate.token()),
            Style::new().dim().apply_to(format!("({})", candidate.entry.display_name()))
        );
        if let Some(desc) = &candidate.entry.desc {
            let _ = write!(out, " - {}", truncate_chars(desc, MAX_DESC_CHARS));
        }
        out.push('\n');
    }
    out
}

/// Cache location plus snapshot details
pub fn format_cache_stats(cache_dir: &std::path::Path, stats: Option<&SnapshotStats>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", Style::new().bold().apply_to("Cache Statistics:"));
    push_field!(out, "Location:", cache_dir.display());

    let Some(stats) = stats else {
        let _ = writeln!(out, "\nNo catalog snapshot cached.");
        return out;
    };

    push_field!(out, "Snapshot:", stats.path.display());
    push_field!(out, "Size:", stats.formatted_size());
    match stats.entries {
        Some(entries) => {
            push_field!(out, "Casks:", entries);
        }
        None => {
            push_field!(out, "Casks:", "unreadable snapshot");
        }
    }
    push_field!(out, "Fingerprint:", short_fingerprint(&stats.fingerprint));
    if let Some(hours) = stats.age_hours() {
        push_field!(out, "Age:", format!("{} h", hours));
    }
    out
}
