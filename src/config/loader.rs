//! Configuration file loading and value resolution

use crate::commands::validators;
use crate::constants::config::{BASE_URL_ENV, DEFAULT_CONFIG_FILE, TOKEN_ENV};
use crate::constants::gist::API_BASE;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Optional user configuration
///
/// ```yaml
/// base_url: https://ghe.example.com/api/v3
/// token: ghp_xxx
/// public: false
/// open_browser: true
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Default visibility for new gists
    #[serde(default)]
    pub public: bool,
    /// Open new and updated gists in the browser by default
    #[serde(default)]
    pub open_browser: bool,
}

impl Config {
    /// Create a new empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        // An empty file is a valid, empty configuration
        if content.trim().is_empty() {
            return Ok(Self::new());
        }

        let config: Config = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Load from an explicit path, or from the default location if present
    ///
    /// An explicitly given file must exist; a missing default file yields an
    /// empty configuration.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => match Self::default_path() {
                Some(default) if default.is_file() => Self::load(&default),
                _ => Ok(Self::new()),
            },
        }
    }

    /// `$HOME/.gost.yaml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(DEFAULT_CONFIG_FILE))
    }

    /// Validate the configuration values
    pub fn validate(&self) -> Result<()> {
        if let Some(base_url) = &self.base_url {
            validators::validate_base_url(base_url)?;
        }
        Ok(())
    }

    /// Resolve the API base URL: flag, then environment, then file, then default
    pub fn resolve_base_url(&self, flag: Option<String>) -> String {
        non_empty(flag)
            .or_else(|| non_empty(std::env::var(BASE_URL_ENV).ok()))
            .or_else(|| non_empty(self.base_url.clone()))
            .unwrap_or_else(|| API_BASE.to_string())
    }

    /// Resolve the access token: flag, then environment, then file
    pub fn resolve_token(&self, flag: Option<String>) -> Option<String> {
        non_empty(flag)
            .or_else(|| non_empty(std::env::var(TOKEN_ENV).ok()))
            .or_else(|| non_empty(self.token.clone()))
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
