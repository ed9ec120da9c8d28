//! URL templating for page links
//!
//! A template is plain text containing zero or more `__page__` tokens.
//! Every token is replaced with the decimal page number; nothing else in
//! the template is interpreted or escaped.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder substituted with the page number
pub const PAGE_PLACEHOLDER: &str = "__page__";

/// URL template for page links
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UrlTemplate(String);

impl UrlTemplate {
    /// Create a template from raw text
    pub fn new(template: impl Into<String>) -> Self {
        Self(template.into())
    }

    /// Raw template text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of placeholder occurrences
    pub fn placeholder_count(&self) -> usize {
        self.0.matches(PAGE_PLACEHOLDER).count()
    }

    /// Render the URL for a page number
    pub fn render(&self, page: usize) -> String {
        self.0.replace(PAGE_PLACEHOLDER, &page.to_string())
    }
}

impl fmt::Display for UrlTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for UrlTemplate {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for UrlTemplate {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("foo", 1, "foo"; "no placeholder")]
    #[test_case("__page__", 1, "1"; "bare placeholder")]
    #[test_case("__page__/__page__", 1, "1/1"; "every occurrence")]
    #[test_case("foo.com?page=__page__", 42, "foo.com?page=42"; "query string")]
    #[test_case("/a b/__page__?q=<x>", 3, "/a b/3?q=<x>"; "no escaping")]
    fn test_render(template: &str, page: usize, expected: &str) {
        assert_eq!(UrlTemplate::new(template).render(page), expected);
    }

    #[test]
    fn test_placeholder_count() {
        assert_eq!(UrlTemplate::new("foo").placeholder_count(), 0);
        assert_eq!(UrlTemplate::new("__page__-__page__").placeholder_count(), 2);
    }

    #[test]
    fn test_display_and_conversions() {
        let template: UrlTemplate = "x?p=__page__".into();
        assert_eq!(template.to_string(), "x?p=__page__");
        assert_eq!(template, UrlTemplate::from("x?p=__page__".to_string()));
        assert_eq!(template.as_str(), "x?p=__page__");
    }
}
