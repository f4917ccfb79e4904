//! Regular expressions used by the property highlighter.
//!
//! Every pattern has three groups: leading context, the token, trailing
//! context. Only the middle group is ever wrapped. `\w`, `\d` and their
//! negations are spelled out as ASCII classes, and keywords fold case
//! over ASCII only. `\s` and `\S` are rewritten to [`WHITESPACE`] and
//! [`NON_WHITESPACE`] before compiling.

use once_cell::sync::Lazy;
use regex::Regex;

/// ECMAScript whitespace: includes U+FEFF, excludes U+0085.
pub const WHITESPACE: &str =
    r"[\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]";
pub const NON_WHITESPACE: &str =
    r"[^\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]";

/// Predicate bodies: `{` up to the first `}` on the same line.
pub static PREDICATE: Lazy<Regex> =
    Lazy::new(|| compile(r"(\S\s*)(\{[^\n\r\x{2028}\x{2029}]*?\})"));

/// Scope and pattern keywords, applied in this order.
pub static PROPERTY_KEYWORDS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        (r"^|\s", "globally", r"\s*:"),
        (r"^|\s", "after", r"\s+\S"),
        (r"^|\s", "until", r"\s+\S"),
        (r":\s*", "no", r"\s"),
        (r":\s*", "some", r"\s"),
        (r"\S\s+", "causes", r"\s+\S"),
        (r"\S\s+", "requires", r"\s+\S"),
        (r"\S\s+", "forbids", r"\s+\S"),
        (r"\S\s+", "or", r"\s+\S"),
        (r"\S\s+", "within", r"\s+[0-9]"),
        (r"[0-9]\s*", "s", r"\s|$"),
        (r"[0-9]\s*", "ms", r"\s|$"),
    ]
    .iter()
    .map(|(before, word, after)| keyword(before, word, after))
    .collect()
});

/// Connectives inside predicate bodies, applied in this order.
pub static PREDICATE_KEYWORDS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        (r"[^0-9A-Za-z_]", "not", r"\s"),
        (r"\s", "and", r"\s"),
        (r"\s", "or", r"\s"),
        (r"\s", "implies", r"\s"),
        (r"\s", "in", r"\s"),
    ]
    .iter()
    .map(|(before, word, after)| keyword(before, word, after))
    .collect()
});

pub static CHANNEL: Lazy<Regex> = Lazy::new(|| {
    compile(r"(:|\s)([a-zA-Z_\-/$#?][0-9A-Za-z_\-/$#?]*)(\s|\{|$)")
});

pub static NUMBER: Lazy<Regex> =
    Lazy::new(|| compile(r"([^0-9])([0-9]*\.?[0-9]+)([^0-9])"));

/// Double-quoted literal; a backslash escapes the next character.
pub static STRING: Lazy<Regex> = Lazy::new(|| compile(r#""(?:\\?(?s:.))*?""#));

pub static BOOLEAN: Lazy<Regex> =
    Lazy::new(|| compile(r"([^0-9A-Za-z_])((?i-u:true|false))([^0-9A-Za-z_])"));

fn keyword(before: &str, word: &str, after: &str) -> Regex {
    compile(&format!("({})((?i-u:{}))({})", before, word, after))
}

// Patterns are constants; a failure here is a programming error caught by
// the tests that force every table.
fn compile(pattern: &str) -> Regex {
    let pattern = pattern.replace(r"\S", NON_WHITESPACE).replace(r"\s", WHITESPACE);
    Regex::new(&pattern).unwrap_or_else(|e| panic!("invalid highlighter pattern {pattern}: {e}"))
}
