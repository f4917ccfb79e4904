use thiserror::Error;

use crate::config::ConfigError;

/// Custom error types for the dashboard client
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("HTTP error: {status} - {message}")]
    Http { status: u16, message: String },

    #[error("Live monitoring server unavailable: {0}")]
    LiveServerUnavailable(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("WebSocket error: {0}")]
    WebSocket(String),

    #[error("Protocol error: {0}")]
    Protocol(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Serde(#[from] serde_json::Error),
}

/// Result type specific to dashboard operations
pub type DashboardResult<T> = Result<T, DashboardError>;

impl From<reqwest::Error> for DashboardError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            DashboardError::Http {
                status: status.as_u16(),
                message: err.to_string(),
            }
        } else {
            DashboardError::Network(err.to_string())
        }
    }
}

impl From<tokio_tungstenite::tungstenite::Error> for DashboardError {
    fn from(err: tokio_tungstenite::tungstenite::Error) -> Self {
        DashboardError::WebSocket(err.to_string())
    }
}

/// Recoverable vs. non-recoverable errors
pub trait RecoverableError {
    fn is_recoverable(&self) -> bool;
    fn recovery_strategy(&self) -> Option<String>;
}

impl RecoverableError for DashboardError {
    fn is_recoverable(&self) -> bool {
        matches!(
            self,
            DashboardError::LiveServerUnavailable(_)
                | DashboardError::Network(_)
                | DashboardError::WebSocket(_)
                | DashboardError::Http { .. }
        )
    }

    fn recovery_strategy(&self) -> Option<String> {
        match self {
            DashboardError::LiveServerUnavailable(_) => Some(
                "Check that the live monitoring server is running, then connect again".to_string(),
            ),
            DashboardError::Network(_) | DashboardError::WebSocket(_) => Some(
                "Check the dashboard URL and that the dashboard server is reachable".to_string(),
            ),
            DashboardError::Http { status, .. } if *status >= 500 => {
                Some("The dashboard server failed; retry the request".to_string())
            }
            DashboardError::Http { .. } => {
                Some("Check the request parameters and retry".to_string())
            }
            DashboardError::Config(_) => Some("Fix the configuration file".to_string()),
            _ => None,
        }
    }
}
