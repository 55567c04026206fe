//! Error types and handling for brewmatch
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Constructor helpers are grouped by error domain:
//! - [`catalog`]: Catalog fetch and parse errors
//! - [`cask`]: Single-cask metadata errors
//! - [`config`]: Configuration errors
//! - [`http`]: Homebrew API request errors
//! - [`cache`]: Cache directory errors
//! - [`fs`]: File system errors
//!
//! Note that a catalog failure during `resolve` is not an error: it degrades to a
//! `ManualReview` outcome. The catalog variants here surface from `search` and `cache`.

pub mod cache;
pub mod cask;
pub mod catalog;
pub mod config;
pub mod fs;
pub mod http;

#[allow(unused_imports)]
pub use cache::operation_failed as cache_operation_failed;
#[allow(unused_imports)]
pub use cask::{invalid as invalid_cask, not_found as cask_not_found};
#[allow(unused_imports)]
pub use catalog::{
    fetch_failed as catalog_fetch_failed, parse_failed as catalog_parse_failed,
    unavailable as catalog_unavailable,
};
#[allow(unused_imports)]
pub use config::{
    invalid as config_invalid, not_found as config_not_found, parse_failed as config_parse_failed,
    read_failed as config_read_failed,
};
#[allow(unused_imports)]
pub use http::request_failed as http_request_failed;
#[allow(unused_imports)]
pub use fs::{
    io_error, not_found as file_not_found, read_failed as file_read_failed,
    write_failed as file_write_failed,
};

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for brewmatch operations
#[derive(Error, Diagnostic, Debug)]
pub enum BrewmatchError {
    // Catalog errors
    #[error("Failed to fetch catalog from {url}: {reason}")]
    #[diagnostic(
        code(brewmatch::catalog::fetch_failed),
        help("Check your network connection, or pass --catalog <FILE> / --offline")
    )]
    CatalogFetchFailed { url: String, reason: String },

    #[error("Failed to parse catalog from {source_name}: {reason}")]
    #[diagnostic(code(brewmatch::catalog::parse_failed))]
    CatalogParseFailed { source_name: String, reason: String },

    #[error("Catalog unavailable: {reason}")]
    #[diagnostic(
        code(brewmatch::catalog::unavailable),
        help("Run without --offline once to populate the catalog cache")
    )]
    CatalogUnavailable { reason: String },

    // Cask errors
    #[error("Cask '{name}' not found")]
    #[diagnostic(
        code(brewmatch::cask::not_found),
        help("Use 'brewmatch resolve <name>' to find the matching cask token")
    )]
    CaskNotFound { name: String },

    #[error("Invalid cask metadata: {message}")]
    #[diagnostic(code(brewmatch::cask::invalid))]
    InvalidCask { message: String },

    // HTTP errors
    #[error("Request to {url} failed: {reason}")]
    #[diagnostic(code(brewmatch::http::request_failed))]
    HttpRequestFailed { url: String, reason: String },

    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(code(brewmatch::config::not_found))]
    ConfigNotFound { path: String },

    #[error("Failed to parse configuration file: {path}")]
    #[diagnostic(code(brewmatch::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(
        code(brewmatch::config::invalid),
        help(
            "Thresholds must lie in [0, 1] with min_candidate_score <= moderate_threshold <= high_confidence_threshold"
        )
    )]
    ConfigInvalid { message: String },

    #[error("Failed to read configuration file: {path}")]
    #[diagnostic(code(brewmatch::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    // File system errors
    #[error("File not found: {path}")]
    #[diagnostic(code(brewmatch::fs::not_found))]
    FileNotFound { path: String },

    #[error("Failed to read file: {path}")]
    #[diagnostic(code(brewmatch::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}")]
    #[diagnostic(code(brewmatch::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(brewmatch::fs::io_error))]
    IoError { message: String },

    // Cache errors
    #[error("Cache operation failed: {message}")]
    #[diagnostic(code(brewmatch::cache::operation_failed))]
    CacheOperationFailed { message: String },

    // CLI errors
    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(brewmatch::cli::unsupported_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnsupportedShell { shell: String },
}

impl From<std::io::Error> for BrewmatchError {
    fn from(err: std::io::Error) -> Self {
        BrewmatchError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for BrewmatchError {
    fn from(err: serde_yaml::Error) -> Self {
        BrewmatchError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for BrewmatchError {
    fn from(err: serde_json::Error) -> Self {
        BrewmatchError::InvalidCask {
            message: err.to_string(),
        }
    }
}

impl From<reqwest::Error> for BrewmatchError {
    fn from(err: reqwest::Error) -> Self {
        BrewmatchError::HttpRequestFailed {
            url: err
                .url()
                .map(ToString::to_string)
                .unwrap_or_else(|| "unknown".to_string()),
            reason: err.to_string(),
        }
    }
}

impl From<inquire::InquireError> for BrewmatchError {
    fn from(err: inquire::InquireError) -> Self {
        BrewmatchError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, BrewmatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_error_contains {
        ($test_name:ident, $err:expr, $($contains:expr),+ $(,)?) => {
            #[test]
            fn $test_name() {
                let err = $err;
                let error_string = err.to_string();
                $(
                    assert!(error_string.contains($contains),
                        "Error message should contain '{}', got: {}",
                        $contains,
                        error_string
                    );
                )+
            }
        };
    }

    #[test]
    fn test_error_display() {
        let err = BrewmatchError::CaskNotFound {
            name: "signal".to_string(),
        };
        assert_eq!(err.to_string(), "Cask 'signal' not found");
    }

    #[test]
    fn test_error_code() {
        let err = BrewmatchError::CatalogUnavailable {
            reason: "offline".to_string(),
        };
        assert_eq!(
            err.code().map(|c| c.to_string()),
            Some("brewmatch::catalog::unavailable".to_string())
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: BrewmatchError = io_err.into();
        assert!(matches!(err, BrewmatchError::IoError { .. }));
    }

    #[test]
    fn test_yaml_error_conversion() {
        let parse_result: std::result::Result<serde_yaml::Value, _> =
            serde_yaml::from_str("invalid: yaml: content: [unclosed");
        let err: BrewmatchError = parse_result.unwrap_err().into();
        assert!(matches!(err, BrewmatchError::ConfigParseFailed { .. }));
    }

    #[test]
    fn test_json_error_conversion() {
        let parse_result: std::result::Result<serde_json::Value, _> =
            serde_json::from_str("invalid json content");
        let err: BrewmatchError = parse_result.unwrap_err().into();
        assert!(matches!(err, BrewmatchError::InvalidCask { .. }));
    }

    test_error_contains!(
        test_catalog_fetch_failed,
        catalog_fetch_failed("https://formulae.brew.sh/api/cask.json", "timed out"),
        "Failed to fetch catalog",
        "timed out"
    );

    test_error_contains!(
        test_catalog_parse_failed,
        catalog_parse_failed("cask.json", "expected an array"),
        "Failed to parse catalog",
        "cask.json"
    );

    test_error_contains!(
        test_catalog_unavailable,
        catalog_unavailable("no cached snapshot"),
        "Catalog unavailable"
    );

    test_error_contains!(
        test_cask_not_found,
        cask_not_found("visual studio code"),
        "Cask 'visual studio code' not found"
    );

    test_error_contains!(
        test_invalid_cask,
        invalid_cask("missing field `token`"),
        "Invalid cask metadata"
    );

    #[test]
    fn test_config_constructors() {
        assert!(matches!(
            config_not_found("/path/brewmatch.yaml"),
            BrewmatchError::ConfigNotFound { .. }
        ));
        assert!(matches!(
            config_parse_failed("/path/brewmatch.yaml", "bad yaml"),
            BrewmatchError::ConfigParseFailed { .. }
        ));
        assert!(matches!(
            config_read_failed("/path/brewmatch.yaml", "permission denied"),
            BrewmatchError::ConfigReadFailed { .. }
        ));
        let err = config_invalid("moderate_threshold above high_confidence_threshold");
        assert!(err.to_string().contains("Invalid configuration"));
    }

    #[test]
    fn test_fs_constructors() {
        assert!(file_not_found("/x").to_string().contains("File not found"));
        assert!(
            file_read_failed("/x", "denied")
                .to_string()
                .contains("Failed to read file")
        );
        assert!(
            file_write_failed("/x", "disk full")
                .to_string()
                .contains("Failed to write file")
        );
        assert!(io_error("boom").to_string().contains("IO error"));
    }

    test_error_contains!(
        test_http_request_failed,
        http_request_failed("https://formulae.brew.sh/api/cask/nope.json", "404 Not Found"),
        "Request to https://formulae.brew.sh/api/cask/nope.json failed",
        "404"
    );

    test_error_contains!(
        test_cache_operation_failed,
        cache_operation_failed("cache directory missing"),
        "Cache operation failed"
    );
}
