//! Owned element tree produced by the response parsers.
//!
//! The dispatcher only ever reads nodes, so elements are immutable once
//! built and shared through [`ElementRef`] handles. A constructed object
//! keeps its subtree alive for as long as its lazy children remain
//! unconsumed.

use std::collections::HashMap;
use std::sync::Arc;

/// Shared handle to a parsed element.
pub type ElementRef = Arc<Element>;

/// Which parser produced a tree, and therefore which case rule applies
/// to tag and attribute lookups on its nodes.
///
/// Strict XML preserves input case exactly; the tolerant HTML parser
/// normalizes tag and attribute names to lowercase, so lookups against
/// its nodes are case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParserMode {
    /// Case-sensitive lookups; input parsed as XML.
    #[default]
    Strict,
    /// Case-insensitive lookups; input parsed as HTML.
    Tolerant,
}

impl ParserMode {
    /// Check whether a schema key matches a node tag under this mode's
    /// case rule.
    #[must_use]
    pub fn tag_matches(&self, key: &str, tag: &str) -> bool {
        match self {
            Self::Strict => key == tag,
            Self::Tolerant => key.eq_ignore_ascii_case(tag),
        }
    }

    fn normalize(&self, name: &str) -> String {
        match self {
            Self::Strict => name.to_string(),
            Self::Tolerant => name.to_ascii_lowercase(),
        }
    }
}

/// An immutable parsed element: tag name, attribute mapping, and ordered
/// child elements.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: String,
    attributes: HashMap<String, String>,
    children: Vec<ElementRef>,
    mode: ParserMode,
}

impl Element {
    /// Create an element for the given parser mode.
    ///
    /// Under [`ParserMode::Tolerant`] the tag is stored lowercased, matching
    /// what the HTML parser itself produces.
    #[must_use]
    pub fn new(tag: impl AsRef<str>, mode: ParserMode) -> Self {
        Self {
            tag: mode.normalize(tag.as_ref()),
            attributes: HashMap::new(),
            children: Vec::new(),
            mode,
        }
    }

    /// Add an attribute, normalizing the key per the parser mode.
    #[must_use]
    pub fn with_attribute(mut self, name: impl AsRef<str>, value: impl Into<String>) -> Self {
        self.attributes
            .insert(self.mode.normalize(name.as_ref()), value.into());
        self
    }

    /// Append a child element.
    #[must_use]
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(Arc::new(child));
        self
    }

    /// Wrap this element into a shared handle.
    #[must_use]
    pub fn into_ref(self) -> ElementRef {
        Arc::new(self)
    }

    /// The element's tag name as stored (lowercase under tolerant mode).
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The parser mode this element was produced under.
    #[must_use]
    pub fn mode(&self) -> ParserMode {
        self.mode
    }

    /// Look up an attribute value, applying the mode's case rule to `name`.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attribute_entry(name).map(|(_, value)| value)
    }

    /// Look up an attribute and return `(stored_key, value)`.
    ///
    /// The stored key is what the parser recorded (lowercase under tolerant
    /// mode), which is the form consumed-key bookkeeping must use.
    #[must_use]
    pub fn attribute_entry(&self, name: &str) -> Option<(&str, &str)> {
        let key = self.mode.normalize(name);
        self.attributes
            .get_key_value(key.as_str())
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterate over all attributes as stored.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Child elements in document order.
    #[must_use]
    pub fn children(&self) -> &[ElementRef] {
        &self.children
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_mode_is_case_sensitive() {
        let node = Element::new("MediaContainer", ParserMode::Strict)
            .with_attribute("machineIdentifier", "abc");

        assert_eq!(node.tag(), "MediaContainer");
        assert_eq!(node.attribute("machineIdentifier"), Some("abc"));
        assert_eq!(node.attribute("machineidentifier"), None);
        assert!(ParserMode::Strict.tag_matches("MediaContainer", "MediaContainer"));
        assert!(!ParserMode::Strict.tag_matches("MediaContainer", "mediacontainer"));
    }

    #[test]
    fn test_tolerant_mode_normalizes_and_matches_any_case() {
        let node = Element::new("MEDIACONTAINER", ParserMode::Tolerant)
            .with_attribute("machineIdentifier", "abc");

        assert_eq!(node.tag(), "mediacontainer");
        assert_eq!(node.attribute("machineIdentifier"), Some("abc"));
        assert_eq!(node.attribute("MACHINEIDENTIFIER"), Some("abc"));
        assert!(ParserMode::Tolerant.tag_matches("MediaContainer", "mediacontainer"));
    }

    #[test]
    fn test_attribute_entry_reports_stored_key() {
        let node = Element::new("Setting", ParserMode::Tolerant)
            .with_attribute("enumValues", "0|1");

        let (key, value) = node.attribute_entry("enumValues").unwrap();
        assert_eq!(key, "enumvalues");
        assert_eq!(value, "0|1");
    }

    #[test]
    fn test_children_preserve_document_order() {
        let node = Element::new("parent", ParserMode::Strict)
            .with_child(Element::new("a", ParserMode::Strict))
            .with_child(Element::new("b", ParserMode::Strict))
            .with_child(Element::new("c", ParserMode::Strict));

        let tags: Vec<_> = node.children().iter().map(|c| c.tag()).collect();
        assert_eq!(tags, ["a", "b", "c"]);
    }
}
