use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::errors::DashboardResult;
use crate::models::messages::{MonitorUpdate, ServerList};

/// Network boundary of the dashboard: the dashboard server that relays
/// live monitoring servers
#[async_trait]
pub trait LiveMonitorSource {
    /// Ask the dashboard server to connect to a live monitoring server.
    /// Returns every server the dashboard server is connected to.
    async fn connect_live(&self, host: &str, port: u16) -> DashboardResult<ServerList>;

    /// Forward live monitor updates to `updates` until the stream ends or
    /// the receiver is dropped
    async fn subscribe(&self, updates: mpsc::Sender<MonitorUpdate>) -> DashboardResult<()>;
}
