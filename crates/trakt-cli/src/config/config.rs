//! `AppConfig` struct and TOML read/write.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Environment variable that overrides `api.api_key`.
pub const API_KEY_ENV: &str = "TRAKT_API_KEY";

/// Top-level application configuration.
#[derive(Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// API access settings.
    #[serde(default)]
    pub api: ApiConfig,
}

/// API access configuration.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiConfig {
    /// Trakt API key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Account name for authenticated calls.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// SHA-1 hex digest of the account password.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_sha: Option<String>,
    /// Use `https://api.trakt.tv` instead of plain HTTP.
    #[serde(default = "default_use_ssl")]
    pub use_ssl: bool,
}

const fn default_use_ssl() -> bool {
    true
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            username: None,
            password_sha: None,
            use_ssl: default_use_ssl(),
        }
    }
}

impl ApiConfig {
    /// API key from `env_override` if non-empty, else from the file.
    #[must_use]
    pub fn resolve_api_key(&self, env_override: Option<String>) -> Option<String> {
        env_override
            .filter(|key| !key.is_empty())
            .or_else(|| self.api_key.clone())
            .filter(|key| !key.is_empty())
    }

    /// `(username, password_sha)` when both are configured.
    #[must_use]
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (self.username.as_deref(), self.password_sha.as_deref()) {
            (Some(username), Some(password_sha)) => Some((username, password_sha)),
            _ => None,
        }
    }
}

impl AppConfig {
    /// Loads config from a TOML file. Returns default if file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Saves config to a TOML file, creating parent directories if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation or file write fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self).context("failed to serialize config to TOML")?;
        std::fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))
    }
}
