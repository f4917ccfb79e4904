pub mod dashboard;
pub mod messages;
pub mod monitor;
pub mod server;

// Re-export common model types
pub use dashboard::{ConnectionDialog, DashboardState, Notification};
pub use messages::{ConnectRequest, ErrorResponse, MonitorUpdate, ServerList};
pub use monitor::{MonitorRecord, Verdict, Witness};
pub use server::{LiveServer, ServerAddress, MAX_MONITORS};
