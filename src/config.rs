use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Environment variable that overrides the dashboard URL
pub const DASHBOARD_URL_ENV: &str = "HPLRV_DASHBOARD_URL";

pub const DEFAULT_DASHBOARD_URL: &str = "http://127.0.0.1:8080";
pub const DEFAULT_LIVE_HOST: &str = "127.0.0.1";
pub const DEFAULT_LIVE_PORT: u16 = 4242;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] serde_yaml::Error),

    #[error("Invalid dashboard URL: {0}")]
    InvalidUrl(String),
}

/// Configuration for the dashboard client
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DashboardConfig {
    /// Base URL of the dashboard server (serves `/live` and `/ws`)
    pub dashboard_url: String,

    /// Host pre-filled in the connection dialog
    pub live_host: String,

    /// Port pre-filled in the connection dialog
    pub live_port: u16,

    /// Request timeout for REST calls, in seconds
    pub request_timeout_secs: u64,
}

impl DashboardConfig {
    /// Load configuration from a YAML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        let config: DashboardConfig = serde_yaml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from the environment
    pub fn with_env_overrides(mut self) -> Result<Self, ConfigError> {
        use log::debug;

        if let Ok(url) = std::env::var(DASHBOARD_URL_ENV) {
            debug!("Using dashboard URL from {}", DASHBOARD_URL_ENV);
            self.dashboard_url = url;
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let url = self.dashboard_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::InvalidUrl(self.dashboard_url.clone()));
        }
        Ok(())
    }
}

/// Default configuration
impl Default for DashboardConfig {
    fn default() -> Self {
        DashboardConfig {
            dashboard_url: DEFAULT_DASHBOARD_URL.to_string(),
            live_host: DEFAULT_LIVE_HOST.to_string(),
            live_port: DEFAULT_LIVE_PORT,
            request_timeout_secs: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_yaml_keeps_defaults() {
        let config = DashboardConfig::from_yaml("live_port: 5000\n").unwrap();
        assert_eq!(config.live_port, 5000);
        assert_eq!(config.live_host, DEFAULT_LIVE_HOST);
        assert_eq!(config.dashboard_url, DEFAULT_DASHBOARD_URL);
    }

    #[test]
    fn rejects_non_http_urls() {
        let result = DashboardConfig::from_yaml("dashboard_url: ftp://example.org\n");
        assert!(matches!(result, Err(ConfigError::InvalidUrl(_))));
    }

    #[test]
    fn malformed_yaml_is_a_parse_error() {
        let result = DashboardConfig::from_yaml("live_port: [not a port\n");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }
}
