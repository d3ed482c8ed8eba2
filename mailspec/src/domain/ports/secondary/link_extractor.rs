/// Interface to the component locating links in an HTML fragment.
#[cfg(test)]
use mockall::predicate::*;

/// A link found in an HTML fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    /// The text of the link, with markup removed and whitespace collapsed.
    pub text: String,
    /// The target of the link, if the anchor has one.
    pub href: Option<String>,
}

#[cfg_attr(test, mockall::automock)]
pub trait LinkExtractor {
    /// The first anchor in `html` selected by `selector`, a human readable
    /// link text (or image alt text).
    fn select_link(&self, html: &str, selector: &str) -> Option<Anchor>;
}
