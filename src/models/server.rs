use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{DashboardError, DashboardResult};
use crate::models::monitor::MonitorRecord;

/// Address of a live monitoring server
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ServerAddress {
    pub host: String,
    pub port: u16,
}

impl ServerAddress {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self { host: host.into(), port }
    }

    /// Key used by live updates to name this server, `host:port`
    pub fn key(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ServerAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

impl FromStr for ServerAddress {
    type Err = DashboardError;

    fn from_str(s: &str) -> DashboardResult<Self> {
        let (host, port) = s
            .rsplit_once(':')
            .ok_or_else(|| DashboardError::InvalidInput(format!("expected HOST:PORT, got {s:?}")))?;
        if host.is_empty() {
            return Err(DashboardError::InvalidInput(format!("missing host in {s:?}")));
        }
        let port = port
            .parse::<u16>()
            .map_err(|e| DashboardError::InvalidInput(format!("invalid port in {s:?}: {e}")))?;
        Ok(Self::new(host, port))
    }
}

/// Highest number of monitors kept per live server
pub const MAX_MONITORS: usize = 1 << 16;

/// A live monitoring server and the monitors it reported
#[derive(Debug, Clone, PartialEq)]
pub struct LiveServer {
    pub address: ServerAddress,
    monitors: Vec<MonitorRecord>,
}

impl LiveServer {
    pub fn new(address: ServerAddress) -> Self {
        Self { address, monitors: Vec::new() }
    }

    pub fn monitors(&self) -> &[MonitorRecord] {
        &self.monitors
    }

    pub fn monitor(&self, id: usize) -> Option<&MonitorRecord> {
        self.monitors.get(id)
    }

    /// Store a monitor at index `id`, padding with placeholders as needed.
    ///
    /// Indices at or past [`MAX_MONITORS`] are rejected.
    pub fn set_monitor(&mut self, id: usize, monitor: MonitorRecord) -> DashboardResult<()> {
        let len = id
            .checked_add(1)
            .filter(|len| *len <= MAX_MONITORS)
            .ok_or_else(|| DashboardError::InvalidInput(format!(
                "monitor id {} of {} exceeds the limit of {} monitors",
                id,
                self.address,
                MAX_MONITORS
            )))?;
        if len > self.monitors.len() {
            self.monitors.resize_with(len, MonitorRecord::placeholder);
        }
        self.monitors[id] = monitor;
        Ok(())
    }

    /// Monitors that have been reported, with their indices
    pub fn reported_monitors(&self) -> impl Iterator<Item = (usize, &MonitorRecord)> {
        self.monitors
            .iter()
            .enumerate()
            .filter(|(_, m)| !m.is_placeholder())
    }
}
