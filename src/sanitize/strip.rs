//! Markup-stripping clean: reduces markup-bearing text to plain text.

use regex::Regex;
use std::sync::OnceLock;

/// Tag-shaped substrings: `<`, a non-empty run of non-`>` characters,
/// then `>` or end of input (an unterminated trailing tag is still removed).
static TAG_REGEX: OnceLock<Regex> = OnceLock::new();

/// One-or-more whitespace characters, collapsed to a single space.
static WHITESPACE_REGEX: OnceLock<Regex> = OnceLock::new();

/// Tag-shaped content for classification: `<`, optional `/`, a letter,
/// anything (newlines included), then `>`.
static HTMLISH_TAG_REGEX: OnceLock<Regex> = OnceLock::new();

/// Entity-shaped content for classification: `&`, letters, `;`.
static HTMLISH_ENTITY_REGEX: OnceLock<Regex> = OnceLock::new();

fn tag_regex() -> &'static Regex {
    TAG_REGEX.get_or_init(|| {
        Regex::new(r"</?[^>]+(>|$)").expect("tag pattern is a valid static regex")
    })
}

fn whitespace_regex() -> &'static Regex {
    WHITESPACE_REGEX
        .get_or_init(|| Regex::new(r"\s+").expect("whitespace pattern is a valid static regex"))
}

fn htmlish_tag_regex() -> &'static Regex {
    HTMLISH_TAG_REGEX.get_or_init(|| {
        Regex::new(r"(?is)</?[a-z].*>").expect("tag classifier is a valid static regex")
    })
}

fn htmlish_entity_regex() -> &'static Regex {
    HTMLISH_ENTITY_REGEX.get_or_init(|| {
        Regex::new(r"(?i)&[a-z]+;").expect("entity classifier is a valid static regex")
    })
}

/// Strip all markup from `input`, returning plain text.
///
/// Removes every tag-shaped substring, decodes the six common entity codes
/// (`&nbsp;` `&amp;` `&lt;` `&gt;` `&quot;` `&#39;`) in that fixed order,
/// collapses whitespace runs to a single space, and trims. Empty input
/// returns an empty string.
///
/// The output contains no `<...>` tag syntax and none of the six entity
/// codes. Entities are decoded after tag removal, so text that encodes
/// literal angle brackets decodes to them rather than being stripped.
pub fn strip_all_markup(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    let text = tag_regex().replace_all(input, "");
    let text = text
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'");
    let text = whitespace_regex().replace_all(&text, " ");
    text.trim().to_string()
}

/// Whether `text` looks like it carries HTML: contains a tag-shaped or
/// entity-shaped substring.
///
/// Used at setup time to decide if a pre-populated field value needs a
/// proactive [`strip_all_markup`] pass.
pub fn looks_like_html(text: &str) -> bool {
    htmlish_tag_regex().is_match(text) || htmlish_entity_regex().is_match(text)
}
