//! Client configuration.
//!
//! Loaded from `~/.config/fest/config.toml` when present, with environment
//! overrides for the backend URL and auth token. Everything defaults
//! sensibly, so a missing file is not an error.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{FestError, Result};

pub const BASE_URL_ENV: &str = "FEST_BASE_URL";
pub const AUTH_TOKEN_ENV: &str = "FEST_AUTH_TOKEN";

const DEFAULT_BASE_URL: &str = "http://localhost:8000";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FestConfig {
    /// Base URL of the backend, without a trailing slash.
    pub base_url: String,
    /// Bearer token sent with every request, if the deployment needs one.
    pub auth_token: Option<String>,
    pub request_timeout_secs: u64,
}

impl Default for FestConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            auth_token: None,
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl FestConfig {
    /// `~/.config/fest/config.toml`, if a config directory exists.
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("fest").join("config.toml"))
    }

    /// Loads the config file if present, then applies environment overrides.
    pub fn load() -> Result<Self> {
        let mut config = match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path)?,
            _ => Self::default(),
        };
        config.apply_overrides(
            std::env::var(BASE_URL_ENV).ok(),
            std::env::var(AUTH_TOKEN_ENV).ok(),
        );
        Ok(config)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|err| FestError::config(format!("cannot read {}: {err}", path.display())))?;
        Ok(toml::from_str(&raw)?)
    }

    fn apply_overrides(&mut self, base_url: Option<String>, auth_token: Option<String>) {
        if let Some(url) = base_url.filter(|u| !u.is_empty()) {
            self.base_url = url;
        }
        if let Some(token) = auth_token.filter(|t| !t.is_empty()) {
            self.auth_token = Some(token);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = FestConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.auth_token.is_none());
        assert_eq!(config.request_timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_load_from_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"base_url = "https://fest.example""#).unwrap();
        let config = FestConfig::load_from(file.path()).unwrap();
        assert_eq!(config.base_url, "https://fest.example");
        assert_eq!(config.request_timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_load_from_rejects_bad_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "base_url = [nonsense").unwrap();
        let err = FestConfig::load_from(file.path()).unwrap_err();
        assert!(matches!(err, FestError::Serialization { ref format, .. } if format == "TOML"));
    }

    #[test]
    fn test_env_overrides_win() {
        let mut config = FestConfig::default();
        config.apply_overrides(
            Some("https://override.example".to_string()),
            Some("token-123".to_string()),
        );
        assert_eq!(config.base_url, "https://override.example");
        assert_eq!(config.auth_token.as_deref(), Some("token-123"));
    }

    #[test]
    fn test_empty_env_values_are_ignored() {
        let mut config = FestConfig::default();
        config.apply_overrides(Some(String::new()), Some(String::new()));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.auth_token.is_none());
    }
}
