//! Descriptor table mapping names to capabilities.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use super::descriptor::Descriptor;

/// Capability table resolving descriptor names.
///
/// Populated before any dispatch and read-only afterwards, so concurrent
/// dispatches can share it freely. Passed explicitly to
/// [`SchemaDispatcher::new`](super::SchemaDispatcher::new) rather than
/// living in process-wide state.
pub struct DescriptorTable<T> {
    descriptors: HashMap<String, Arc<dyn Descriptor<T>>>,
}

impl<T> DescriptorTable<T> {
    /// Create a new empty table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            descriptors: HashMap::new(),
        }
    }

    /// Register a descriptor under a name.
    pub fn register(&mut self, name: impl Into<String>, descriptor: impl Descriptor<T> + 'static) {
        self.descriptors.insert(name.into(), Arc::new(descriptor));
    }

    /// Resolve a descriptor by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&dyn Descriptor<T>> {
        self.descriptors.get(name).map(|d| d.as_ref())
    }

    /// Check whether a name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.descriptors.contains_key(name)
    }

    /// Return the set of all registered names.
    #[must_use]
    pub fn names(&self) -> HashSet<&str> {
        self.descriptors.keys().map(|s| s.as_str()).collect()
    }
}

impl<T> Default for DescriptorTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for DescriptorTable<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DescriptorTable")
            .field("names", &self.names())
            .finish()
    }
}
