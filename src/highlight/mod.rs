//! Syntax highlighting for HPL property text.
//!
//! [`highlight_property`] decorates a property with the markers defined in
//! [`markup`]. It is a fixed pipeline of regex passes over the whole
//! string; predicate bodies are swapped out for placeholders while the
//! property-level passes run, then highlighted on their own and put back.

pub mod markup;
mod patterns;

use regex::{NoExpand, Regex};

use markup::Style;
use patterns::{
    BOOLEAN, CHANNEL, NUMBER, PREDICATE, PREDICATE_KEYWORDS, PROPERTY_KEYWORDS, STRING,
};

// Placeholders keep the outer characters of `{}` and `""` so the passes
// that run while they are in place see the same boundaries. The private-use
// code points keep literal `{}` and `""` in the input from being taken for
// a placeholder.
const PREDICATE_SLOT: &str = "{\u{E000}}";
const STRING_SLOT: &str = "\"\u{E001}\"";

/// Highlight an HPL property.
///
/// Total over all inputs: malformed properties simply get less
/// highlighting. The output contains every input character, in order.
pub fn highlight_property(property: &str) -> String {
    let extracted = PREDICATE.replace_all(property, format!("${{1}}{}", PREDICATE_SLOT));

    let mut text = extracted.into_owned();
    for keyword in PROPERTY_KEYWORDS.iter() {
        text = wrap_token(keyword, &text, Style::Emphasis);
    }
    text = wrap_token(&CHANNEL, &text, Style::Channel);

    // Predicates are taken from the original text, not from the first scan.
    let predicates = PREDICATE
        .captures_iter(property)
        .map(|caps| highlight_predicate(&caps[2]));
    text = fill_slots(&text, PREDICATE_SLOT, predicates);

    wrap_token(&NUMBER, &text, Style::Number)
}

/// Highlight the body of one predicate, braces included.
fn highlight_predicate(predicate: &str) -> String {
    let literals: Vec<String> = STRING
        .find_iter(predicate)
        .map(|m| Style::StringLiteral.wrap(m.as_str()))
        .collect();

    let mut text = STRING.replace_all(predicate, NoExpand(STRING_SLOT)).into_owned();
    for keyword in PREDICATE_KEYWORDS.iter() {
        text = wrap_token(keyword, &text, Style::Emphasis);
    }
    text = wrap_token(&BOOLEAN, &text, Style::Bool);

    fill_slots(&text, STRING_SLOT, literals)
}

/// Wrap the second group of every match of `re`, keeping the context
/// groups around it.
fn wrap_token(re: &Regex, text: &str, style: Style) -> String {
    let replacement = format!("${{1}}{}${{2}}{}${{3}}", style.open_tag(), style.close_tag());
    re.replace_all(text, replacement.as_str()).into_owned()
}

/// Replace occurrences of `slot` with `fillers`, one each, left to right.
///
/// The search resumes after the last inserted filler, so filler text is
/// never matched as a slot. Slots left over once `fillers` is exhausted
/// stay in place; fillers with no slot left are dropped.
fn fill_slots<I>(text: &str, slot: &str, fillers: I) -> String
where
    I: IntoIterator<Item = String>,
{
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    for filler in fillers {
        let Some(pos) = rest.find(slot) else {
            break;
        };
        out.push_str(&rest[..pos]);
        out.push_str(&filler);
        rest = &rest[pos + slot.len()..];
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_slots_is_sequential() {
        let filled = fill_slots("a # b # c", "#", vec!["#1".to_string(), "#2".to_string()]);
        assert_eq!(filled, "a #1 b #2 c");
    }

    #[test]
    fn fill_slots_keeps_unfilled_slots() {
        let filled = fill_slots("[] and []", "[]", vec!["x".to_string()]);
        assert_eq!(filled, "x and []");
    }

    #[test]
    fn predicate_body_is_highlighted_alone() {
        assert_eq!(
            highlight_predicate("{not a and b}"),
            "{<b>not</b> a <b>and</b> b}"
        );
    }

    #[test]
    fn keywords_inside_strings_are_left_alone() {
        assert_eq!(
            highlight_predicate("{x = \"a and true\"}"),
            "{x = <span class=\"string\">\"a and true\"</span>}"
        );
    }
}
