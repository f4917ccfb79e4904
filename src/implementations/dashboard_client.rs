use async_trait::async_trait;
use futures_util::{SinkExt, StreamExt};
use log::{debug, info, warn};
use reqwest::StatusCode;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio_tungstenite::{connect_async, tungstenite::Message};

use crate::config::DashboardConfig;
use crate::errors::{DashboardError, DashboardResult};
use crate::models::messages::{ConnectRequest, ErrorResponse, MonitorUpdate, ServerList};
use crate::traits::live_source::LiveMonitorSource;

/// Client for the dashboard server's REST and WebSocket endpoints
#[derive(Debug, Clone)]
pub struct DashboardClient {
    base_url: String,
    http_client: reqwest::Client,
}

impl DashboardClient {
    pub fn new(config: &DashboardConfig) -> DashboardResult<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            base_url: config.dashboard_url.trim().trim_end_matches('/').to_string(),
            http_client,
        })
    }

    pub fn live_url(&self) -> String {
        format!("{}/live", self.base_url)
    }

    /// `/ws` on the same host, with the matching WebSocket scheme
    pub fn websocket_url(&self) -> DashboardResult<String> {
        if let Some(rest) = self.base_url.strip_prefix("https://") {
            Ok(format!("wss://{}/ws", rest))
        } else if let Some(rest) = self.base_url.strip_prefix("http://") {
            Ok(format!("ws://{}/ws", rest))
        } else {
            Err(DashboardError::InvalidInput(format!(
                "dashboard URL must be http(s): {}",
                self.base_url
            )))
        }
    }
}

#[async_trait]
impl LiveMonitorSource for DashboardClient {
    async fn connect_live(&self, host: &str, port: u16) -> DashboardResult<ServerList> {
        let request = ConnectRequest { host: host.to_string(), port };
        info!("Requesting live connection to {}:{} via {}", host, port, self.base_url);

        let response = self
            .http_client
            .post(self.live_url())
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    warn!("Request timed out");
                } else if e.is_connect() {
                    warn!("Connection error - is the dashboard server running?");
                }
                DashboardError::from(e)
            })?;

        let status = response.status();
        let body = response.text().await?;
        debug!("POST /live answered {} with {} bytes", status, body.len());

        if status.is_success() {
            return serde_json::from_str::<ServerList>(&body)
                .map_err(|e| DashboardError::Protocol(format!("invalid server list: {}", e)));
        }

        if status == StatusCode::BAD_GATEWAY {
            let reason = serde_json::from_str::<ErrorResponse>(&body)
                .map(|r| r.error)
                .unwrap_or(body);
            return Err(DashboardError::LiveServerUnavailable(reason));
        }

        warn!("Dashboard server error: HTTP {} - {}", status.as_u16(), body);
        Err(DashboardError::Http { status: status.as_u16(), message: body })
    }

    async fn subscribe(&self, updates: mpsc::Sender<MonitorUpdate>) -> DashboardResult<()> {
        let url = self.websocket_url()?;
        let (stream, _) = connect_async(url.as_str()).await?;
        info!("Subscribed to live updates at {}", url);

        let (mut write, mut read) = stream.split();

        while let Some(message) = read.next().await {
            match message? {
                Message::Text(text) => match serde_json::from_str::<MonitorUpdate>(&text) {
                    Ok(update) => {
                        if updates.send(update).await.is_err() {
                            debug!("Update receiver dropped, closing live stream");
                            break;
                        }
                    }
                    Err(e) => warn!("Skipping malformed update: {}", e),
                },
                Message::Ping(data) => write.send(Message::Pong(data)).await?,
                Message::Close(_) => {
                    info!("Dashboard server closed the live stream");
                    break;
                }
                _ => {}
            }
        }

        Ok(())
    }
}
