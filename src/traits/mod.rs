pub mod live_source;
pub mod markup_renderer;

// Re-export traits
pub use live_source::LiveMonitorSource;
pub use markup_renderer::MarkupRenderer;
