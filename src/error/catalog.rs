//! Catalog errors

use super::BrewmatchError;

/// Creates a catalog fetch failed error
pub fn fetch_failed(url: impl Into<String>, reason: impl Into<String>) -> BrewmatchError {
    BrewmatchError::CatalogFetchFailed {
        url: url.into(),
        reason: reason.into(),
    }
}

/// Creates a catalog parse failed error
pub fn parse_failed(source_name: impl Into<String>, reason: impl Into<String>) -> BrewmatchError {
    BrewmatchError::CatalogParseFailed {
        source_name: source_name.into(),
        reason: reason.into(),
    }
}

/// Creates a catalog unavailable error
pub fn unavailable(reason: impl Into<String>) -> BrewmatchError {
    BrewmatchError::CatalogUnavailable {
        reason: reason.into(),
    }
}
