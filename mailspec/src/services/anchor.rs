use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

use crate::domain::ports::secondary::{Anchor, LinkExtractor};

// Opening tags match quoted attribute values as a whole, so that a '>' in a
// value does not end the tag.
static ANCHOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?is)<a\b((?:[^>"']|"[^"]*"|'[^']*')*)>(.*?)</a\s*>"#).expect("anchor regex")
});

static IMG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?is)<img\b((?:[^>"']|"[^"]*"|'[^']*')*)>"#).expect("img regex")
});

static ATTRIBUTE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?s)([^\s"'>/=]+)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>]+)))?"#)
        .expect("attribute regex")
});

static COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<!--.*?-->").expect("comment regex"));

static TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?s)<(?:[^>"']|"[^"]*"|'[^']*')*>"#).expect("tag regex"));

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("whitespace regex"));

/// Removes markup tags and comments, leaving the text in between.
///
/// Entities are left as they are.
pub fn strip_tags(html: &str) -> String {
    let without_comments = COMMENT.replace_all(html, "");
    TAG.replace_all(&without_comments, "").into_owned()
}

fn normalize_space(text: &str) -> String {
    WHITESPACE.replace_all(text.trim(), " ").into_owned()
}

fn decode_entities(value: &str) -> Cow<'_, str> {
    if !value.contains('&') {
        return Cow::Borrowed(value);
    }
    // &amp; last, so that "&amp;lt;" becomes "&lt;" and not "<".
    Cow::Owned(
        value
            .replace("&quot;", "\"")
            .replace("&#39;", "'")
            .replace("&#039;", "'")
            .replace("&apos;", "'")
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&amp;", "&"),
    )
}

// The value of the attribute called `name`, matched on the whole attribute
// name so that `data-href` is not taken for `href`. An attribute without a
// value yields an empty string.
fn attribute(attributes: &str, name: &str) -> Option<String> {
    ATTRIBUTE
        .captures_iter(attributes)
        .find(|c| c.get(1).map_or(false, |n| n.as_str().eq_ignore_ascii_case(name)))
        .map(|c| {
            (2..=4)
                .find_map(|i| c.get(i))
                .map_or_else(String::new, |value| decode_entities(value.as_str()).into_owned())
        })
}

// Whole word sequence containment, the way a crawler selects links by text.
fn selects(text: &str, selector: &str) -> bool {
    let selector = normalize_space(selector);
    !selector.is_empty() && format!(" {text} ").contains(&format!(" {selector} "))
}

/// Finds links in an HTML fragment by scanning its anchor elements.
///
/// An anchor is selected when its text, or the `alt` text of an image it
/// wraps, contains the selector. The first selected anchor in document
/// order wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnchorExtractor;

impl LinkExtractor for AnchorExtractor {
    fn select_link(&self, html: &str, selector: &str) -> Option<Anchor> {
        ANCHOR.captures_iter(html).find_map(|captures| {
            let attributes = captures.get(1).map_or("", |m| m.as_str());
            let inner = captures.get(2).map_or("", |m| m.as_str());
            let text = normalize_space(&decode_entities(&strip_tags(inner)));
            let by_alt = || {
                IMG.captures_iter(inner)
                    .filter_map(|img| attribute(img.get(1).map_or("", |m| m.as_str()), "alt"))
                    .any(|alt| selects(&normalize_space(&alt), selector))
            };
            if selects(&text, selector) || by_alt() {
                Some(Anchor {
                    text,
                    href: attribute(attributes, "href"),
                })
            } else {
                None
            }
        })
    }
}
