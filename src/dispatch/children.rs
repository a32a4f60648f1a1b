//! Lazy child construction.
//!
//! The source of truth for an object's children is the raw node tree; the
//! dispatcher only walks it when the consumer actually pulls. [`Children`]
//! owns shared handles to everything the walk needs, so the node tree
//! stays alive exactly as long as unconsumed children may still need it.

use std::collections::HashSet;
use std::sync::Arc;

use crate::error::Result;
use crate::http::HttpClient;
use crate::node::ElementRef;
use crate::schema::Schema;

use super::engine::SchemaDispatcher;

/// A descriptor-built object together with its consumed attribute keys and
/// lazy child sequence.
pub struct Constructed<T> {
    /// The object the descriptor built.
    pub object: T,
    /// Attribute keys the descriptor consumed (as stored on the node).
    pub consumed: HashSet<String>,
    /// Lazily-constructed children, in document order.
    pub children: Children<T>,
}

impl<T: std::fmt::Debug> std::fmt::Debug for Constructed<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Constructed")
            .field("object", &self.object)
            .field("consumed", &self.consumed)
            .field("children", &self.children)
            .finish()
    }
}

/// Pull-based, single-pass iterator over an object's children.
///
/// Each pull dispatches the next raw child node in document order; nodes
/// that resolve to no object are skipped entirely rather than yielded as
/// placeholders. Entries constructed from a bare descriptor reference
/// carry no child schema and the sequence is empty regardless of raw
/// children. Schema mismatches encountered mid-iteration are yielded as
/// errors.
pub struct Children<T> {
    dispatcher: SchemaDispatcher<T>,
    client: HttpClient,
    path: String,
    parent: ElementRef,
    schema: Option<Arc<Schema>>,
    index: usize,
}

impl<T> Children<T> {
    pub(crate) fn new(
        dispatcher: SchemaDispatcher<T>,
        client: HttpClient,
        path: &str,
        parent: ElementRef,
        schema: Option<Arc<Schema>>,
    ) -> Self {
        Self {
            dispatcher,
            client,
            path: path.to_string(),
            parent,
            schema,
            index: 0,
        }
    }

    /// Raw child nodes not yet visited (an upper bound on objects still to
    /// come).
    #[must_use]
    pub fn remaining_nodes(&self) -> usize {
        if self.schema.is_none() {
            return 0;
        }
        self.parent.children().len().saturating_sub(self.index)
    }
}

impl<T> Iterator for Children<T> {
    type Item = Result<Constructed<T>>;

    fn next(&mut self) -> Option<Self::Item> {
        let schema = self.schema.as_ref()?;

        while self.index < self.parent.children().len() {
            let child = Arc::clone(&self.parent.children()[self.index]);
            self.index += 1;

            match self
                .dispatcher
                .construct(&self.client, &self.path, &child, Some(schema.as_ref()))
            {
                Ok(Some(item)) => return Some(Ok(item)),
                Ok(None) => continue,
                Err(err) => return Some(Err(err)),
            }
        }

        None
    }
}

impl<T> std::fmt::Debug for Children<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Children")
            .field("parent", &self.parent.tag())
            .field("index", &self.index)
            .field("has_schema", &self.schema.is_some())
            .finish()
    }
}
