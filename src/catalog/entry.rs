//! Catalog entries as published by the Homebrew cask API

use serde::{Deserialize, Serialize};

use crate::common::serde_utils::one_or_many;

/// One installable cask: a unique token plus its display names
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Canonical short identifier (e.g. `visual-studio-code`)
    pub token: String,

    /// Human-readable display names, never empty once loaded into a catalog
    #[serde(rename = "name", default, deserialize_with = "one_or_many")]
    pub names: Vec<String>,

    /// One-line description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
}

impl CatalogEntry {
    /// Create an entry with the given display names
    #[cfg(test)]
    pub fn new<I, S>(token: impl Into<String>, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            token: token.into(),
            names: names.into_iter().map(Into::into).collect(),
            desc: None,
        }
    }

    /// Attach a description
    #[cfg(test)]
    pub fn with_desc(mut self, desc: impl Into<String>) -> Self {
        self.desc = Some(desc.into());
        self
    }

    /// Primary display name, falling back to the token
    pub fn display_name(&self) -> &str {
        self.names.first().map_or(self.token.as_str(), String::as_str)
    }

    /// Bring a raw API record in line with the catalog invariants
    ///
    /// Returns `None` for records without a usable token. Blank names are dropped and
    /// an entry left without names gets its token as the only name.
    pub(crate) fn sanitized(mut self) -> Option<Self> {
        self.token = self.token.trim().to_string();
        if self.token.is_empty() {
            return None;
        }

        self.names.retain(|name| !name.trim().is_empty());
        if self.names.is_empty() {
            self.names.push(self.token.clone());
        }

        Some(self)
    }
}
