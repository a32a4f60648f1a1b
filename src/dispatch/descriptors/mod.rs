//! Shipped descriptors for the stock API objects.
//!
//! Each descriptor reads attributes off its node into the matching
//! [`types`](crate::types) struct, recording which keys it consumed.
//! Absent attributes become absent fields; descriptors never fail for
//! well-formed nodes.

mod container;
mod library;
mod server;
mod setting;

pub use container::ContainerDescriptor;
pub use library::{DirectoryDescriptor, SectionDescriptor};
pub use server::ServerDescriptor;
pub use setting::SettingDescriptor;

use std::collections::HashSet;
use std::str::FromStr;

use crate::node::Element;

/// Attribute reader that tracks consumed keys.
///
/// Lookups go through [`Element::attribute_entry`], so the parser mode's
/// case rule applies and keys are recorded as stored on the node.
pub(crate) struct AttrReader<'a> {
    node: &'a Element,
    consumed: HashSet<String>,
}

impl<'a> AttrReader<'a> {
    pub(crate) fn new(node: &'a Element) -> Self {
        Self {
            node,
            consumed: HashSet::new(),
        }
    }

    /// Read an attribute as an owned string.
    pub(crate) fn string(&mut self, name: &str) -> Option<String> {
        let (key, value) = self.node.attribute_entry(name)?;
        self.consumed.insert(key.to_string());
        Some(value.to_string())
    }

    /// Read and parse an attribute; unparseable values count as consumed
    /// but yield nothing.
    pub(crate) fn parse<V: FromStr>(&mut self, name: &str) -> Option<V> {
        self.string(name)?.parse().ok()
    }

    /// Read a boolean flag; the API encodes these as "1"/"0" or
    /// "true"/"false".
    pub(crate) fn flag(&mut self, name: &str) -> bool {
        matches!(self.string(name).as_deref(), Some("1" | "true"))
    }

    /// Finish reading and return the consumed-key set.
    pub(crate) fn finish(self) -> HashSet<String> {
        self.consumed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::ParserMode;

    #[test]
    fn test_reader_consumes_present_keys_only() {
        let node = Element::new("Server", ParserMode::Strict)
            .with_attribute("name", "den")
            .with_attribute("port", "32400");
        let mut reader = AttrReader::new(&node);

        assert_eq!(reader.string("name").as_deref(), Some("den"));
        assert_eq!(reader.parse::<u16>("port"), Some(32400));
        assert_eq!(reader.string("missing"), None);

        let consumed = reader.finish();
        assert_eq!(consumed.len(), 2);
        assert!(consumed.contains("name"));
        assert!(consumed.contains("port"));
    }

    #[test]
    fn test_reader_records_stored_keys_in_tolerant_mode() {
        let node =
            Element::new("Server", ParserMode::Tolerant).with_attribute("machineIdentifier", "x");
        let mut reader = AttrReader::new(&node);

        assert!(reader.string("machineIdentifier").is_some());
        assert!(reader.finish().contains("machineidentifier"));
    }

    #[test]
    fn test_reader_flag() {
        let node = Element::new("Setting", ParserMode::Strict)
            .with_attribute("hidden", "1")
            .with_attribute("advanced", "false");
        let mut reader = AttrReader::new(&node);

        assert!(reader.flag("hidden"));
        assert!(!reader.flag("advanced"));
        assert!(!reader.flag("missing"));
    }
}
