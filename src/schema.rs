//! Declarative response schemas.
//!
//! A [`Schema`] maps tag names to construction rules. Each rule is a closed
//! [`SchemaEntry`] union: a bare descriptor reference (children are not
//! dispatched), a type-discriminated mapping over an attribute value, or a
//! descriptor paired with a separate schema for child nodes.

use std::collections::HashMap;
use std::sync::Arc;

use crate::node::ParserMode;

/// Attribute consulted by type-discriminated entries unless another key is
/// given.
pub const DEFAULT_TYPE_ATTRIBUTE: &str = "type";

/// A single construction rule for a tag.
#[derive(Debug, Clone)]
pub enum SchemaEntry {
    /// Construct via the named descriptor; the child sequence is empty
    /// regardless of raw child nodes.
    Descriptor(String),

    /// Pick a nested entry based on an attribute value of the node.
    Typed(TypedEntry),

    /// Construct via the named descriptor and dispatch children with the
    /// given schema.
    WithChildren(String, Arc<Schema>),
}

impl SchemaEntry {
    /// A bare descriptor reference.
    #[must_use]
    pub fn descriptor(name: impl Into<String>) -> Self {
        Self::Descriptor(name.into())
    }

    /// A descriptor reference with a schema for child nodes.
    #[must_use]
    pub fn with_children(name: impl Into<String>, children: Schema) -> Self {
        Self::WithChildren(name.into(), Arc::new(children))
    }

    /// A type-discriminated entry over the conventional `"type"` attribute.
    #[must_use]
    pub fn typed<I, K>(variants: I) -> Self
    where
        I: IntoIterator<Item = (K, SchemaEntry)>,
        K: Into<String>,
    {
        Self::typed_on(DEFAULT_TYPE_ATTRIBUTE, variants)
    }

    /// A type-discriminated entry over a specific attribute.
    #[must_use]
    pub fn typed_on<I, K>(attribute: impl Into<String>, variants: I) -> Self
    where
        I: IntoIterator<Item = (K, SchemaEntry)>,
        K: Into<String>,
    {
        Self::Typed(TypedEntry {
            attribute: attribute.into(),
            variants: variants
                .into_iter()
                .map(|(k, v)| (k.into(), v))
                .collect(),
        })
    }
}

/// The discriminator half of a [`SchemaEntry::Typed`] rule.
#[derive(Debug, Clone)]
pub struct TypedEntry {
    attribute: String,
    variants: HashMap<String, SchemaEntry>,
}

impl TypedEntry {
    /// The attribute consulted on the node.
    #[must_use]
    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    /// Resolve a discriminator value to its nested entry.
    ///
    /// Comparison is exact string match; the parser mode's case rule has
    /// already been applied when reading the attribute off the node.
    #[must_use]
    pub fn variant(&self, value: &str) -> Option<&SchemaEntry> {
        self.variants.get(value)
    }
}

/// A tag-to-rule mapping for one response shape.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    entries: HashMap<String, SchemaEntry>,
}

impl Schema {
    /// Create an empty schema.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry for a tag, builder style.
    #[must_use]
    pub fn with(mut self, tag: impl Into<String>, entry: SchemaEntry) -> Self {
        self.insert(tag, entry);
        self
    }

    /// Add an entry for a tag.
    pub fn insert(&mut self, tag: impl Into<String>, entry: SchemaEntry) {
        self.entries.insert(tag.into(), entry);
    }

    /// True when the schema holds no entries (dispatch short-circuits).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up the entry for a node tag under the given parser mode's case
    /// rule.
    ///
    /// Strict mode matches exactly; tolerant mode matches schema keys
    /// case-insensitively against the (lowercased) node tag. Schemas are
    /// small, so the tolerant fallback scan stays cheap.
    #[must_use]
    pub fn get(&self, tag: &str, mode: ParserMode) -> Option<&SchemaEntry> {
        if let Some(entry) = self.entries.get(tag) {
            return Some(entry);
        }

        match mode {
            ParserMode::Strict => None,
            ParserMode::Tolerant => self
                .entries
                .iter()
                .find(|(key, _)| mode.tag_matches(key, tag))
                .map(|(_, entry)| entry),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_schema() {
        let schema = Schema::new();
        assert!(schema.is_empty());
        assert!(schema.get("anything", ParserMode::Strict).is_none());
    }

    #[test]
    fn test_get_strict_is_case_sensitive() {
        let schema = Schema::new().with("Item", SchemaEntry::descriptor("Item"));

        assert!(schema.get("Item", ParserMode::Strict).is_some());
        assert!(schema.get("item", ParserMode::Strict).is_none());
    }

    #[test]
    fn test_get_tolerant_matches_any_case() {
        let schema = Schema::new().with("Item", SchemaEntry::descriptor("Item"));

        assert!(schema.get("item", ParserMode::Tolerant).is_some());
        assert!(schema.get("ITEM", ParserMode::Tolerant).is_some());
    }

    #[test]
    fn test_typed_entry_defaults_to_type_attribute() {
        let entry = SchemaEntry::typed([
            ("movie", SchemaEntry::descriptor("MovieSection")),
            ("show", SchemaEntry::descriptor("ShowSection")),
        ]);

        let SchemaEntry::Typed(typed) = entry else {
            unreachable!("typed() must build a Typed entry");
        };
        assert_eq!(typed.attribute(), DEFAULT_TYPE_ATTRIBUTE);
        assert!(typed.variant("movie").is_some());
        assert!(typed.variant("Movie").is_none());
        assert!(typed.variant("podcast").is_none());
    }

    #[test]
    fn test_typed_on_custom_attribute() {
        let entry = SchemaEntry::typed_on("kind", [("a", SchemaEntry::descriptor("A"))]);

        let SchemaEntry::Typed(typed) = entry else {
            unreachable!("typed_on() must build a Typed entry");
        };
        assert_eq!(typed.attribute(), "kind");
    }
}
