pub mod config;
pub mod errors;
pub mod highlight;
pub mod implementations;
pub mod models;
pub mod traits;
#[cfg(test)]
mod tests;

// Re-export core components
pub use config::{ConfigError, DashboardConfig};
pub use errors::{DashboardError, DashboardResult, RecoverableError};
pub use highlight::highlight_property;
pub use highlight::markup::{parse_markup, plain_text, Segment, Style};
pub use implementations::{
    AnsiRenderer,
    DashboardClient,
    HtmlRenderer,
    PlainRenderer,
    RenderFormat,
};
pub use models::{
    dashboard::{ConnectionDialog, DashboardState, Notification},
    messages::{ConnectRequest, ErrorResponse, MonitorUpdate, ServerList},
    monitor::{MonitorRecord, Verdict, Witness},
    server::{LiveServer, ServerAddress, MAX_MONITORS},
};
pub use traits::{LiveMonitorSource, MarkupRenderer};
