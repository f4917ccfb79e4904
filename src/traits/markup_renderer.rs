/// Turns highlighted property markup into output for a particular display
pub trait MarkupRenderer {
    /// Render markup produced by the highlighter
    fn render(&self, markup: &str) -> String;
}
