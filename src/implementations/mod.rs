pub mod dashboard_client;
pub mod renderers;

pub use dashboard_client::DashboardClient;
pub use renderers::{AnsiRenderer, HtmlRenderer, PlainRenderer, RenderFormat};
