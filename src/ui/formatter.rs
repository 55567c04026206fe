//! Output formatters for command results
//!
//! Commands render through an [`OutputFormatter`] so `--json` swaps the whole output
//! format without touching the command logic.

use serde::Serialize;

use super::display;
use crate::error::{Result, io_error};
use crate::resolver::{RankedMatch, Resolution, ScoredCandidate};

pub trait OutputFormatter {
    fn resolutions(&self, resolutions: &[Resolution]) -> Result<String>;

    fn search_results(&self, query: &str, results: &[ScoredCandidate<'_>]) -> Result<String>;
}

/// Styled, human-readable text
pub struct TextFormatter;

impl OutputFormatter for TextFormatter {
    fn resolutions(&self, resolutions: &[Resolution]) -> Result<String> {
        Ok(resolutions
            .iter()
            .map(display::format_resolution)
            .collect::<Vec<_>>()
            .join("\n"))
    }

    fn search_results(&self, query: &str, results: &[ScoredCandidate<'_>]) -> Result<String> {
        Ok(display::format_search_results(query, results))
    }
}

/// Pretty-printed JSON for scripts and bots
pub struct JsonFormatter;

#[derive(Serialize)]
struct SearchOutput<'a> {
    query: &'a str,
    results: Vec<RankedMatch>,
}

impl OutputFormatter for JsonFormatter {
    /// One query gives a single object, several give an array
    fn resolutions(&self, resolutions: &[Resolution]) -> Result<String> {
        match resolutions {
            [single] => to_json(single),
            many => to_json(&many),
        }
    }

    fn search_results(&self, query: &str, results: &[ScoredCandidate<'_>]) -> Result<String> {
        to_json(&SearchOutput {
            query,
            results: results.iter().map(RankedMatch::from).collect(),
        })
    }
}

/// Formatter for the `--json` flag
pub fn formatter_for(json: bool) -> Box<dyn OutputFormatter> {
    if json {
        Box::new(JsonFormatter)
    } else {
        Box::new(TextFormatter)
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| io_error(format!("Failed to serialize output: {}", e)))
}
