use serde::{Deserialize, Serialize};

use crate::models::monitor::MonitorRecord;
use crate::models::server::ServerAddress;

/// Body of `POST /live`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectRequest {
    pub host: String,
    pub port: u16,
}

impl From<&ServerAddress> for ConnectRequest {
    fn from(address: &ServerAddress) -> Self {
        Self {
            host: address.host.clone(),
            port: address.port,
        }
    }
}

/// Servers the dashboard server is currently connected to
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ServerList {
    #[serde(default)]
    pub servers: Vec<ServerAddress>,
}

/// Error body returned with a 502 when a live server cannot be reached
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// One property update pushed over the live stream
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitorUpdate {
    /// `host:port` of the live monitoring server
    pub server: String,
    /// Index of the monitor in that server's list
    pub id: usize,
    pub monitor: MonitorRecord,
}
