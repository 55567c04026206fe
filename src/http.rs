//! Blocking HTTP client for the Homebrew API

use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::error::{BrewmatchError, Result, http_request_failed};

const USER_AGENT: &str = concat!("brewmatch/", env!("CARGO_PKG_VERSION"));

/// Thin wrapper around a configured `reqwest` blocking client
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: reqwest::blocking::Client,
}

impl HttpClient {
    /// Build a client with the given request timeout
    pub fn new(timeout: Duration) -> Result<Self> {
        let inner = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| http_request_failed("(client setup)".to_string(), e.to_string()))?;

        Ok(Self { inner })
    }

    /// GET `url` and return the body; non-success statuses are errors
    pub fn get_bytes(&self, url: &str) -> Result<Vec<u8>> {
        log::debug!("GET {}", url);
        let response = self
            .inner
            .get(url)
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .map_err(|e| request_error(url, &e))?;

        let bytes = response.bytes().map_err(|e| request_error(url, &e))?;
        log::debug!("GET {} -> {} bytes", url, bytes.len());
        Ok(bytes.to_vec())
    }

    /// GET `url` and decode the JSON body; a 404 is `Ok(None)`
    ///
    /// Any other failure, including other error statuses, is still an error.
    pub fn get_json_if_exists<T: DeserializeOwned>(&self, url: &str) -> Result<Option<T>> {
        log::debug!("GET {}", url);
        let response = self
            .inner
            .get(url)
            .send()
            .map_err(|e| request_error(url, &e))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            log::debug!("GET {} -> 404", url);
            return Ok(None);
        }

        let bytes = response
            .error_for_status()
            .and_then(reqwest::blocking::Response::bytes)
            .map_err(|e| request_error(url, &e))?;
        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|e| http_request_failed(url.to_string(), format!("invalid JSON: {}", e)))
    }
}

fn request_error(url: &str, err: &reqwest::Error) -> BrewmatchError {
    let reason = match err.status() {
        Some(status) => format!("HTTP {}", status),
        None => err.to_string(),
    };
    http_request_failed(url.to_string(), reason)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builds() {
        assert!(HttpClient::new(Duration::from_secs(5)).is_ok());
    }

    #[test]
    fn test_unreachable_host_is_error() {
        let client = HttpClient::new(Duration::from_secs(2)).unwrap();
        // port 9 (discard) on localhost is closed on any sane test machine
        let result = client.get_bytes("http://127.0.0.1:9/cask.json");
        match result {
            Err(BrewmatchError::HttpRequestFailed { url, .. }) => {
                assert_eq!(url, "http://127.0.0.1:9/cask.json");
            }
            other => panic!("expected request failure, got {:?}", other),
        }
    }

    #[test]
    fn test_unreachable_host_is_error_not_missing() {
        let client = HttpClient::new(Duration::from_secs(2)).unwrap();
        let result =
            client.get_json_if_exists::<serde_json::Value>("http://127.0.0.1:9/signal.json");
        assert!(matches!(result, Err(BrewmatchError::HttpRequestFailed { .. })));
    }

    #[test]
    fn test_invalid_url_is_error() {
        let client = HttpClient::new(Duration::from_secs(2)).unwrap();
        assert!(client.get_bytes("not a url").is_err());
    }
}
