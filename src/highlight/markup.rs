//! Presentation markers emitted by the highlighter, and a reader that turns
//! highlighted markup back into styled runs of text.

const SPAN_CLOSE: &str = "</span>";
const EMPHASIS_CLOSE: &str = "</b>";

/// Presentation style of a highlighted token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    Emphasis,      // keywords
    Channel,       // channel names
    StringLiteral, // quoted literals inside predicates
    Bool,          // true / false
    Number,
}

impl Style {
    pub const ALL: [Style; 5] = [
        Style::Emphasis,
        Style::Channel,
        Style::StringLiteral,
        Style::Bool,
        Style::Number,
    ];

    pub fn open_tag(self) -> &'static str {
        match self {
            Style::Emphasis => "<b>",
            Style::Channel => "<span class=\"special\">",
            Style::StringLiteral => "<span class=\"string\">",
            Style::Bool => "<span class=\"bool\">",
            Style::Number => "<span class=\"number\">",
        }
    }

    pub fn close_tag(self) -> &'static str {
        match self {
            Style::Emphasis => EMPHASIS_CLOSE,
            _ => SPAN_CLOSE,
        }
    }

    /// Wrap `text` in this style's markers
    pub fn wrap(self, text: &str) -> String {
        format!("{}{}{}", self.open_tag(), text, self.close_tag())
    }
}

/// A run of text with the styles active on it, outermost first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub styles: Vec<Style>,
}

impl Segment {
    pub fn has(&self, style: Style) -> bool {
        self.styles.contains(&style)
    }

    pub fn is_plain(&self) -> bool {
        self.styles.is_empty()
    }
}

/// Split highlighted markup into styled segments.
///
/// Only the markers the highlighter emits are recognised; any other `<`
/// is kept as text, and so is a closing marker with no open style of its
/// kind.
pub fn parse_markup(markup: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut stack: Vec<Style> = Vec::new();
    let mut text = String::new();
    let mut rest = markup;

    while let Some(pos) = rest.find('<') {
        text.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        if let Some(style) = Style::ALL.iter().copied().find(|s| tail.starts_with(s.open_tag())) {
            flush(&mut segments, &mut text, &stack);
            stack.push(style);
            rest = &tail[style.open_tag().len()..];
            continue;
        }

        let closing = [EMPHASIS_CLOSE, SPAN_CLOSE]
            .into_iter()
            .find(|tag| tail.starts_with(tag))
            .and_then(|tag| {
                stack
                    .iter()
                    .rposition(|s| s.close_tag() == tag)
                    .map(|index| (tag, index))
            });

        match closing {
            Some((tag, index)) => {
                flush(&mut segments, &mut text, &stack);
                stack.remove(index);
                rest = &tail[tag.len()..];
            }
            None => {
                text.push('<');
                rest = &tail[1..];
            }
        }
    }

    text.push_str(rest);
    flush(&mut segments, &mut text, &stack);
    segments
}

/// The text of highlighted markup with every marker removed
pub fn plain_text(markup: &str) -> String {
    parse_markup(markup).into_iter().map(|s| s.text).collect()
}

fn flush(segments: &mut Vec<Segment>, text: &mut String, stack: &[Style]) {
    if !text.is_empty() {
        segments.push(Segment {
            text: std::mem::take(text),
            styles: stack.to_vec(),
        });
    }
}
