#[cfg(feature = "cli")]
pub mod cli;

use crate::utils::error::{AppError, Result};
use crate::utils::validation::{validate_positive_number, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_API_PATH: &str = "/api";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Connection settings for the web projects API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub base_url: String,
    pub api_path: String,
    pub timeout_seconds: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_path: DEFAULT_API_PATH.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

/// Layout of the TOML configuration file:
///
/// ```toml
/// [api]
/// base_url = "http://localhost:3000"
/// api_path = "/api"
/// timeout_seconds = 30
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub api: ClientConfig,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Reads the `[api]` table from a TOML file; missing keys keep their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(content)?;
        Ok(file.api)
    }

    /// Full URL of the collection endpoint, e.g. `http://localhost:3000/api`.
    pub fn collection_url(&self) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            self.api_path.trim_end_matches('/')
        )
    }

    pub fn item_url(&self, id: &impl std::fmt::Display) -> String {
        format!("{}/{}", self.collection_url(), id)
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;
        if !self.api_path.starts_with('/') {
            return Err(AppError::config(format!(
                "api_path must start with '/': {}",
                self.api_path
            )));
        }
        validate_positive_number("timeout_seconds", self.timeout_seconds, 1)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.collection_url(), "http://localhost:3000/api");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_urls_ignore_trailing_slashes() {
        let config = ClientConfig {
            base_url: "http://example.com/".to_string(),
            api_path: "/api/".to_string(),
            timeout_seconds: 5,
        };
        assert_eq!(config.collection_url(), "http://example.com/api");
        assert_eq!(config.item_url(&42), "http://example.com/api/42");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = ClientConfig::from_toml_str(
            r#"
[api]
base_url = "https://projects.example.com"
"#,
        )
        .unwrap();
        assert_eq!(config.base_url, "https://projects.example.com");
        assert_eq!(config.api_path, DEFAULT_API_PATH);
        assert_eq!(config.timeout_seconds, DEFAULT_TIMEOUT_SECONDS);
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[api]\nbase_url = \"http://127.0.0.1:8080\"\napi_path = \"/v1/projects\"\ntimeout_seconds = 3"
        )
        .unwrap();

        let config = ClientConfig::from_file(file.path()).unwrap();
        assert_eq!(config.collection_url(), "http://127.0.0.1:8080/v1/projects");
        assert_eq!(config.timeout_seconds, 3);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(ClientConfig::from_toml_str("[api]\ntimeout_seconds = \"soon\"").is_err());

        let mut config = ClientConfig::default();
        config.api_path = "api".to_string();
        assert!(config.validate().is_err());

        let mut config = ClientConfig::default();
        config.timeout_seconds = 0;
        assert!(config.validate().is_err());

        assert!(ClientConfig::new("localhost:3000").validate().is_err());
    }
}
