//! Client configuration.
//!
//! Configuration lives in ~/.config/vellum/config.toml and is deliberately
//! small: the client only needs to know where the backend lives. The
//! VELLUM_BACKEND_URL environment variable overrides the file for one-off
//! runs against a different backend.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Default backend address when nothing is configured.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";

/// Environment variable overriding the configured backend URL.
pub const BACKEND_URL_ENV: &str = "VELLUM_BACKEND_URL";

const CONFIG_FILE: &str = "config.toml";

/// Client-side settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the document-QA backend.
    #[serde(default = "default_backend_url")]
    pub backend_url: String,
}

fn default_backend_url() -> String {
    DEFAULT_BACKEND_URL.to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            backend_url: default_backend_url(),
        }
    }
}

impl ClientConfig {
    /// Load configuration with the standard precedence:
    /// environment override, then config file, then defaults.
    pub fn load() -> Self {
        let mut config = Self::config_path()
            .and_then(|path| Self::load_from(&path).ok())
            .unwrap_or_default();

        if let Ok(url) = std::env::var(BACKEND_URL_ENV) {
            if !url.trim().is_empty() {
                config.backend_url = url;
            }
        }

        config
    }

    /// Load configuration from an explicit file path.
    pub fn load_from(path: &PathBuf) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read config at {}", path.display()))?;
        let config: Self = toml::from_str(&contents)
            .with_context(|| format!("invalid config at {}", path.display()))?;
        Ok(config)
    }

    /// Write configuration back to the default location.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path().context("no config directory available")?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)?;
        fs::write(&path, contents)
            .with_context(|| format!("failed to write config at {}", path.display()))?;
        Ok(())
    }

    /// Standard config file location (~/.config/vellum/config.toml).
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("vellum").join(CONFIG_FILE))
    }

    /// Backend URL with any trailing slash removed, ready for joining
    /// endpoint paths.
    pub fn backend_base(&self) -> &str {
        self.backend_url.trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_localhost() {
        let config = ClientConfig::default();
        assert_eq!(config.backend_url, "http://localhost:5000");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "backend_url = \"http://10.0.0.7:5000\"\n").unwrap();

        let config = ClientConfig::load_from(&path).unwrap();
        assert_eq!(config.backend_url, "http://10.0.0.7:5000");
    }

    #[test]
    fn test_missing_field_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "").unwrap();

        let config = ClientConfig::load_from(&path).unwrap();
        assert_eq!(config.backend_url, DEFAULT_BACKEND_URL);
    }

    #[test]
    fn test_backend_base_strips_trailing_slash() {
        let config = ClientConfig {
            backend_url: "http://localhost:5000/".to_string(),
        };
        assert_eq!(config.backend_base(), "http://localhost:5000");
    }
}
