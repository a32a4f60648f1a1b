//! Descriptor capability trait.

use std::collections::HashSet;

use crate::http::HttpClient;
use crate::node::Element;

/// Result of a descriptor construction: the object plus the set of
/// attribute keys the descriptor consumed off the node.
///
/// Keys are recorded as stored on the node (lowercase under the tolerant
/// parser), so leftovers can be diffed against [`Element::attributes`].
#[derive(Debug, Clone)]
pub struct Construction<T> {
    /// Attribute keys the descriptor read.
    pub consumed: HashSet<String>,
    /// The constructed object.
    pub object: T,
}

impl<T> Construction<T> {
    /// Construction that consumed no attributes.
    #[must_use]
    pub fn new(object: T) -> Self {
        Self {
            consumed: HashSet::new(),
            object,
        }
    }

    /// Construction with an explicit consumed-key set.
    #[must_use]
    pub fn with_consumed(object: T, consumed: HashSet<String>) -> Self {
        Self { consumed, object }
    }
}

/// Capability that turns a node into a domain object.
///
/// Descriptors are registered by name in a
/// [`DescriptorTable`](super::DescriptorTable) and resolved by schema
/// entries. The dispatcher never looks inside them. A descriptor must not
/// fail for well-formed nodes matching its own tag, which is why
/// `construct` is infallible: absent attributes become absent fields, not
/// errors.
pub trait Descriptor<T>: Send + Sync {
    /// Build an object from a node.
    ///
    /// # Arguments
    /// * `client` - HTTP client, for objects that need to issue follow-up
    ///   requests
    /// * `node` - The element to construct from
    /// * `path` - Request path the response was fetched from
    fn construct(&self, client: &HttpClient, node: &Element, path: &str) -> Construction<T>;
}
