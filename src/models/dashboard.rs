use log::{debug, info, warn};

use crate::config::DashboardConfig;
use crate::errors::{DashboardError, DashboardResult};
use crate::models::messages::{ConnectRequest, MonitorUpdate, ServerList};
use crate::models::monitor::Witness;
use crate::models::server::{LiveServer, ServerAddress};

/// Form used to ask the dashboard server for a new live connection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionDialog {
    pub host: String,
    pub port: u16,
    open: bool,
}

impl ConnectionDialog {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self { host: host.into(), port, open: false }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn request(&self) -> ConnectRequest {
        ConnectRequest { host: self.host.clone(), port: self.port }
    }
}

/// Message shown to the user, e.g. the outcome of a connect request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Info(String),
    Error(String),
}

/// UI state of the dashboard, changed only through its action handlers
#[derive(Debug, Clone)]
pub struct DashboardState {
    open_modals: usize,
    connection_dialog: ConnectionDialog,
    servers: Vec<LiveServer>,
    selected_server: Option<usize>,
    notifications: Vec<Notification>,
}

impl DashboardState {
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            open_modals: 0,
            connection_dialog: ConnectionDialog::new(config.live_host.clone(), config.live_port),
            servers: Vec::new(),
            selected_server: None,
            notifications: Vec::new(),
        }
    }

    pub fn is_modal_open(&self) -> bool {
        self.open_modals > 0
    }

    pub fn on_modal_opened(&mut self) {
        self.open_modals += 1;
    }

    pub fn on_modal_closed(&mut self) {
        self.open_modals = self.open_modals.saturating_sub(1);
    }

    pub fn connection_dialog(&self) -> &ConnectionDialog {
        &self.connection_dialog
    }

    /// Edit the host/port fields of the connection dialog
    pub fn set_connection_target(&mut self, host: impl Into<String>, port: u16) {
        self.connection_dialog.host = host.into();
        self.connection_dialog.port = port;
    }

    pub fn show_connection_dialog(&mut self) {
        if !self.connection_dialog.open {
            self.connection_dialog.open = true;
            self.on_modal_opened();
        }
    }

    pub fn cancel_connection_dialog(&mut self) {
        self.connection_dialog.open = false;
        self.on_modal_closed();
    }

    /// Close the dialog and produce the request to send to the dashboard server
    pub fn submit_connection(&mut self) -> ConnectRequest {
        self.connection_dialog.open = false;
        self.on_modal_closed();
        self.connection_dialog.request()
    }

    /// Record the outcome of a connect request as a user notification.
    /// Failures are not retried.
    pub fn on_connect_result(&mut self, result: DashboardResult<ServerList>) {
        match result {
            Ok(list) => {
                info!("Dashboard server reports {} live server(s)", list.servers.len());
                self.sync_servers(&list);
                self.notifications
                    .push(Notification::Info("Connected to server!".to_string()));
            }
            Err(e) => {
                warn!("Connect request failed: {}", e);
                self.notifications.push(Notification::Error(format!("Error: {}", e)));
            }
        }
    }

    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    /// Add servers reported by the dashboard server that are not known yet
    pub fn sync_servers(&mut self, list: &ServerList) {
        for address in &list.servers {
            self.server_index_or_insert(address.clone());
        }
    }

    /// Store the monitor carried by a live update
    pub fn apply_update(&mut self, update: MonitorUpdate) -> DashboardResult<()> {
        let address: ServerAddress = update.server.parse()?;
        let index = self.server_index_or_insert(address);
        debug!("Update for monitor {} of {}", update.id, update.server);
        self.servers[index].set_monitor(update.id, update.monitor)
    }

    pub fn servers(&self) -> &[LiveServer] {
        &self.servers
    }

    pub fn server(&self, key: &str) -> Option<&LiveServer> {
        self.servers.iter().find(|s| s.address.key() == key)
    }

    pub fn select_server(&mut self, index: usize) -> DashboardResult<()> {
        if index >= self.servers.len() {
            return Err(DashboardError::InvalidInput(format!(
                "server index {} out of range ({} servers)",
                index,
                self.servers.len()
            )));
        }
        self.selected_server = Some(index);
        Ok(())
    }

    pub fn selected_server(&self) -> Option<&LiveServer> {
        self.selected_server.and_then(|i| self.servers.get(i))
    }

    /// Witness of a monitor, if it has a non-empty one to show
    pub fn reveal_witness(&self, server_key: &str, id: usize) -> Option<&Witness> {
        self.server(server_key)
            .and_then(|s| s.monitor(id))
            .filter(|m| m.has_witness())
            .and_then(|m| m.witness.as_ref())
    }

    fn server_index_or_insert(&mut self, address: ServerAddress) -> usize {
        if let Some(index) = self.servers.iter().position(|s| s.address == address) {
            return index;
        }
        self.servers.push(LiveServer::new(address));
        if self.selected_server.is_none() {
            self.selected_server = Some(0);
        }
        self.servers.len() - 1
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new(&DashboardConfig::default())
    }
}
