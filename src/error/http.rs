//! HTTP errors

use super::BrewmatchError;

/// Creates an HTTP request failed error
pub fn request_failed(url: impl Into<String>, reason: impl Into<String>) -> BrewmatchError {
    BrewmatchError::HttpRequestFailed {
        url: url.into(),
        reason: reason.into(),
    }
}
