//! Configuration file handling for brewmatch
//!
//! Settings come from an optional `brewmatch.yaml`:
//!
//! ```yaml
//! catalog_url: https://formulae.brew.sh/api/cask.json
//! cask_api_base: https://formulae.brew.sh/api/cask
//! timeout_secs: 30
//! resolver:
//!   high_confidence_threshold: 0.7
//!   moderate_threshold: 0.5
//!   max_alternatives: 4
//!   max_ranked_results: 5
//!   min_candidate_score: 0.3
//! ```
//!
//! Every key is optional. `BREWMATCH_CATALOG_URL` overrides `catalog_url`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{
    BrewmatchError,
    Result,
    config_invalid,
    config_not_found,
    config_parse_failed,
    config_read_failed,
};
use crate::resolver::ResolverConfig;

/// Default configuration file name, looked up in the current directory
pub const CONFIG_FILE: &str = "brewmatch.yaml";

/// Full cask catalog published by Homebrew
pub const DEFAULT_CATALOG_URL: &str = "https://formulae.brew.sh/api/cask.json";

/// Base URL for single-cask documents (`<base>/<token>.json`)
pub const DEFAULT_CASK_API_BASE: &str = "https://formulae.brew.sh/api/cask";

/// HTTP timeout applied to every Homebrew API request
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variable overriding the catalog URL
pub const CATALOG_URL_ENV: &str = "BREWMATCH_CATALOG_URL";

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// URL of the full cask catalog
    pub catalog_url: String,

    /// Base URL for single-cask lookups
    pub cask_api_base: String,

    /// HTTP timeout in seconds
    pub timeout_secs: u64,

    /// Resolver thresholds and limits
    pub resolver: ResolverConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            cask_api_base: DEFAULT_CASK_API_BASE.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            resolver: ResolverConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration
    ///
    /// An explicit path must exist. Without one, `brewmatch.yaml` in the current
    /// directory is used when present and defaults otherwise. Environment overrides
    /// are applied last, then the result is validated.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut config = match explicit {
            Some(path) => {
                if !path.is_file() {
                    return Err(config_not_found(path.display().to_string()));
                }
                Self::from_file(path)?
            }
            None => {
                let default_path = Path::new(CONFIG_FILE);
                if default_path.is_file() {
                    Self::from_file(default_path)?
                } else {
                    log::debug!("No {} found, using default configuration", CONFIG_FILE);
                    Self::default()
                }
            }
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| config_read_failed(path.display().to_string(), e.to_string()))?;

        log::debug!("Loaded configuration from {}", path.display());
        Self::from_yaml(&content).map_err(|e| match e {
            BrewmatchError::ConfigParseFailed { reason, .. } => {
                config_parse_failed(path.display().to_string(), reason)
            }
            other => other,
        })
    }

    /// Parse configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var(CATALOG_URL_ENV) {
            if !url.trim().is_empty() {
                log::debug!("Catalog URL overridden by {}: {}", CATALOG_URL_ENV, url);
                self.catalog_url = url;
            }
        }
    }

    /// Check that the configuration is usable
    pub fn validate(&self) -> Result<()> {
        if self.timeout_secs == 0 {
            return Err(config_invalid("timeout_secs must be greater than zero".to_string()));
        }
        if self.catalog_url.trim().is_empty() {
            return Err(config_invalid("catalog_url must not be empty".to_string()));
        }
        self.resolver.validate()
    }
}
