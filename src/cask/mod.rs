//! Single-cask metadata from the Homebrew API
//!
//! `https://formulae.brew.sh/api/cask/<token>.json` describes what a cask installs:
//! app bundles, package receipts, launch services and the files `zap` would trash.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::common::serde_utils::one_or_many;
use crate::error::{Result, cask_not_found, invalid_cask};
use crate::http::HttpClient;

/// One cask document
///
/// Only the fields the uninstall generator reads are typed; `artifacts` stays raw
/// because its shape varies from cask to cask.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CaskMetadata {
    #[serde(default)]
    pub token: String,

    #[serde(default, deserialize_with = "one_or_many")]
    pub name: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<Value>,

    #[serde(default)]
    pub artifacts: Vec<Value>,

    // Top-level uninstall hints found in hand-written documents
    #[serde(default, deserialize_with = "one_or_many", skip_serializing_if = "Vec::is_empty")]
    pub pkgutil: Vec<String>,

    #[serde(default, deserialize_with = "one_or_many", skip_serializing_if = "Vec::is_empty")]
    pub launchctl: Vec<String>,

    #[serde(default, deserialize_with = "one_or_many", skip_serializing_if = "Vec::is_empty")]
    pub quit: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bundle_id: Option<String>,
}

impl CaskMetadata {
    /// Parse a cask document
    pub fn from_json_str(json: &str) -> Result<Self> {
        let cask: Self = serde_json::from_str(json)?;
        if cask.token.trim().is_empty() && cask.name.is_empty() {
            return Err(invalid_cask("document has neither a token nor a name".to_string()));
        }
        Ok(cask)
    }

    /// First display name, falling back to the token
    pub fn display_name(&self) -> &str {
        self.name
            .iter()
            .map(String::as_str)
            .find(|n| !n.trim().is_empty())
            .unwrap_or(self.token.as_str())
    }
}

/// Something that can look up one cask by app name or token
pub trait CaskSource {
    fn fetch_cask(&self, name: &str) -> Result<CaskMetadata>;
}

/// API file names to try for an app name, most likely first
///
/// `"Visual Studio Code"` gives `visual-studio-code`, `visualstudiocode` and
/// `visual_studio_code`. Repeats are dropped.
pub fn lookup_names(app_name: &str) -> Vec<String> {
    let dashed = app_name.trim().to_lowercase().replace(' ', "-");
    let mut names: Vec<String> = Vec::with_capacity(3);
    for candidate in [dashed.clone(), dashed.replace('-', ""), dashed.replace('-', "_")] {
        if !candidate.is_empty() && !names.contains(&candidate) {
            names.push(candidate);
        }
    }
    names
}

/// Fetches cask documents from the Homebrew formulae API
#[derive(Debug, Clone)]
pub struct HttpCaskSource {
    client: HttpClient,
    api_base: String,
}

impl HttpCaskSource {
    pub fn new(client: HttpClient, api_base: impl Into<String>) -> Self {
        Self {
            client,
            api_base: api_base.into().trim_end_matches('/').to_string(),
        }
    }

    fn url_for(&self, file_name: &str) -> String {
        format!("{}/{}.json", self.api_base, file_name)
    }
}

impl CaskSource for HttpCaskSource {
    /// Try each of [`lookup_names`] in turn
    ///
    /// Only a 404 moves on to the next name. Fails with
    /// [`crate::error::BrewmatchError::CaskNotFound`] when none of them exists, and
    /// with [`crate::error::BrewmatchError::HttpRequestFailed`] on any other failure.
    fn fetch_cask(&self, name: &str) -> Result<CaskMetadata> {
        for file_name in lookup_names(name) {
            let url = self.url_for(&file_name);
            if let Some(cask) = self.client.get_json_if_exists::<CaskMetadata>(&url)? {
                log::debug!("Found cask for '{}' at {}", name, url);
                return Ok(cask);
            }
            log::debug!("No cask at {}", url);
        }

        Err(cask_not_found(name.to_string()))
    }
}
