//! Configuration handling for the TUI

use crate::backend::DEFAULT_ENDPOINT;
use crate::state::REDIRECT_DELAY;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Environment variable overriding the registration endpoint
pub const ENDPOINT_ENV_VAR: &str = "INDUSTRY_REGISTER_ENDPOINT";

/// Log file name inside the data directory
const LOG_FILE_NAME: &str = "industry-register-tui.log";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid registration endpoint {value:?}: {source}")]
    InvalidEndpoint {
        value: String,
        #[source]
        source: url::ParseError,
    },
    #[error("registration endpoint must use http or https, got {0:?}")]
    UnsupportedScheme(String),
}

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RegisterConfig {
    /// Registration endpoint URL
    pub endpoint: Option<String>,
    /// Delay before returning to the root view after a successful registration
    pub redirect_delay_ms: Option<u64>,
    /// Open on the root view instead of the registration form
    pub start_on_home: Option<bool>,
}

impl RegisterConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("io", "industry", "industry-register-tui")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Get the log file path
    pub fn log_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_dir().join(LOG_FILE_NAME))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: RegisterConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Resolve the endpoint: environment override, then file, then default
    pub fn endpoint(&self, env_override: Option<String>) -> Result<Url, ConfigError> {
        let raw = env_override
            .filter(|v| !v.trim().is_empty())
            .or_else(|| self.endpoint.clone())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        let url = Url::parse(raw.trim()).map_err(|source| ConfigError::InvalidEndpoint {
            value: raw.clone(),
            source,
        })?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(ConfigError::UnsupportedScheme(other.to_string())),
        }
    }

    pub fn redirect_delay(&self) -> Duration {
        self.redirect_delay_ms
            .map(Duration::from_millis)
            .unwrap_or(REDIRECT_DELAY)
    }

    pub fn start_on_home(&self) -> bool {
        self.start_on_home.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = RegisterConfig::default();
        assert!(config.endpoint.is_none());
        assert!(config.redirect_delay_ms.is_none());
        assert!(config.start_on_home.is_none());
    }

    #[test]
    fn test_defaults_reproduce_fixed_behavior() {
        let config = RegisterConfig::default();
        assert_eq!(
            config.endpoint(None).unwrap().as_str(),
            "http://localhost:5000/industry-register"
        );
        assert_eq!(config.redirect_delay(), Duration::from_millis(2000));
        assert!(!config.start_on_home());
    }

    #[test]
    fn test_serialization() {
        let config = RegisterConfig {
            endpoint: Some("https://register.example.test/industry-register".to_string()),
            redirect_delay_ms: Some(500),
            start_on_home: Some(true),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: RegisterConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.endpoint, config.endpoint);
        assert_eq!(parsed.redirect_delay_ms, Some(500));
        assert_eq!(parsed.start_on_home, Some(true));
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: RegisterConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.endpoint.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        let json = r#"{"redirect_delay_ms": 10, "unknown_field": "value"}"#;
        let parsed: RegisterConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.redirect_delay(), Duration::from_millis(10));
    }

    #[test]
    fn test_env_override_wins_over_file() {
        let config = RegisterConfig {
            endpoint: Some("http://file.test/register".to_string()),
            ..Default::default()
        };
        let url = config
            .endpoint(Some("http://env.test/register".to_string()))
            .unwrap();
        assert_eq!(url.host_str(), Some("env.test"));
    }

    #[test]
    fn test_blank_env_override_is_ignored() {
        let config = RegisterConfig {
            endpoint: Some("http://file.test/register".to_string()),
            ..Default::default()
        };
        let url = config.endpoint(Some("   ".to_string())).unwrap();
        assert_eq!(url.host_str(), Some("file.test"));
    }

    #[test]
    fn test_invalid_endpoint_is_rejected() {
        let config = RegisterConfig {
            endpoint: Some("not a url".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            config.endpoint(None),
            Err(ConfigError::InvalidEndpoint { .. })
        ));
    }

    #[test]
    fn test_non_http_scheme_is_rejected() {
        let config = RegisterConfig {
            endpoint: Some("ftp://files.test/register".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            config.endpoint(None),
            Err(ConfigError::UnsupportedScheme(scheme)) if scheme == "ftp"
        ));
    }

    #[test]
    fn test_paths_do_not_panic() {
        let _config = RegisterConfig::config_path();
        let _log = RegisterConfig::log_path();
    }

    #[test]
    fn test_load_returns_ok() {
        // Either the default or whatever the user has configured
        assert!(RegisterConfig::load().is_ok());
    }
}
