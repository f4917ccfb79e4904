use colored::{ColoredString, Colorize};
use std::fmt;
use std::str::FromStr;

use crate::errors::DashboardError;
use crate::highlight::markup::{parse_markup, plain_text, Segment, Style};
use crate::traits::markup_renderer::MarkupRenderer;

/// Markup as produced, for HTML embedders
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl MarkupRenderer for HtmlRenderer {
    fn render(&self, markup: &str) -> String {
        markup.to_string()
    }
}

/// ANSI colours for terminals
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiRenderer;

impl MarkupRenderer for AnsiRenderer {
    fn render(&self, markup: &str) -> String {
        parse_markup(markup)
            .iter()
            .map(|segment| paint(segment).to_string())
            .collect()
    }
}

fn paint(segment: &Segment) -> ColoredString {
    segment
        .styles
        .iter()
        .fold(segment.text.as_str().normal(), |text, style| match style {
            Style::Emphasis => text.bold(),
            Style::Channel => text.cyan(),
            Style::StringLiteral => text.green(),
            Style::Bool => text.magenta(),
            Style::Number => text.yellow(),
        })
}

/// Text only, markers removed
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainRenderer;

impl MarkupRenderer for PlainRenderer {
    fn render(&self, markup: &str) -> String {
        plain_text(markup)
    }
}

/// Output format selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderFormat {
    #[default]
    Ansi,
    Html,
    Plain,
}

impl RenderFormat {
    pub fn renderer(self) -> Box<dyn MarkupRenderer + Send + Sync> {
        match self {
            RenderFormat::Ansi => Box::new(AnsiRenderer),
            RenderFormat::Html => Box::new(HtmlRenderer),
            RenderFormat::Plain => Box::new(PlainRenderer),
        }
    }
}

impl FromStr for RenderFormat {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ansi" | "color" | "colour" => Ok(RenderFormat::Ansi),
            "html" => Ok(RenderFormat::Html),
            "plain" | "text" => Ok(RenderFormat::Plain),
            _ => Err(DashboardError::InvalidInput(format!("unsupported output format: {}", s))),
        }
    }
}

impl fmt::Display for RenderFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderFormat::Ansi => write!(f, "ansi"),
            RenderFormat::Html => write!(f, "html"),
            RenderFormat::Plain => write!(f, "plain"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::highlight_property;

    const PROPERTY: &str = "globally: /a {true} causes /b within 5 s";

    #[test]
    fn html_is_the_markup_itself() {
        let markup = highlight_property(PROPERTY);
        assert_eq!(HtmlRenderer.render(&markup), markup);
    }

    #[test]
    fn plain_restores_the_property() {
        let markup = highlight_property(PROPERTY);
        assert_eq!(PlainRenderer.render(&markup), PROPERTY);
    }

    #[test]
    fn ansi_emits_escape_codes_around_tokens() {
        colored::control::set_override(true);
        let rendered = AnsiRenderer.render(&highlight_property(PROPERTY));
        colored::control::unset_override();

        assert!(rendered.contains("\u{1b}[1mglobally\u{1b}[0m"));
        assert!(rendered.contains("/a"));
        assert!(!rendered.contains("<b>"));
    }

    #[test]
    fn parses_format_names() {
        assert_eq!("HTML".parse::<RenderFormat>().unwrap(), RenderFormat::Html);
        assert_eq!("text".parse::<RenderFormat>().unwrap(), RenderFormat::Plain);
        assert!("pdf".parse::<RenderFormat>().is_err());
    }
}
