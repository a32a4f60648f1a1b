//! Schema dispatcher: the recursive node-to-object construction walk.

use std::sync::Arc;

use crate::error::{ClientError, Result};
use crate::http::{HttpClient, Response};
use crate::node::{Element, ElementRef};
use crate::parser::ResponseParser;
use crate::schema::{Schema, SchemaEntry};

use super::children::{Children, Constructed};
use super::descriptor::{Construction, Descriptor};
use super::table::DescriptorTable;

/// Engine that turns parsed nodes into domain objects by walking a
/// declarative schema.
///
/// The dispatch is a pure, synchronous structural transform: no I/O, no
/// retries, no state beyond the read-only descriptor table. Schema
/// mismatches (`UnknownNode`, `UnknownNodeType`, `UnknownDescriptor`) are
/// bugs in schema maintenance and propagate to the caller instead of being
/// masked.
pub struct SchemaDispatcher<T> {
    table: Arc<DescriptorTable<T>>,
}

impl<T> Clone for SchemaDispatcher<T> {
    fn clone(&self) -> Self {
        Self {
            table: Arc::clone(&self.table),
        }
    }
}

impl<T> std::fmt::Debug for SchemaDispatcher<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemaDispatcher")
            .field("table", &self.table)
            .finish()
    }
}

impl<T> SchemaDispatcher<T> {
    /// Create a dispatcher over the given capability table.
    #[must_use]
    pub fn new(table: DescriptorTable<T>) -> Self {
        Self {
            table: Arc::new(table),
        }
    }

    /// The capability table in use.
    #[must_use]
    pub fn table(&self) -> &DescriptorTable<T> {
        &self.table
    }

    /// Parse a response and construct the root object in one step.
    ///
    /// Returns `Ok(None)` when the response is non-2xx or its body failed
    /// to parse (already logged by the parser); construction errors
    /// propagate.
    pub fn parse(
        &self,
        client: &HttpClient,
        parser: &ResponseParser,
        response: &Response,
        schema: &Schema,
    ) -> Result<Option<Constructed<T>>> {
        let Some(root) = parser.parse(response) else {
            return Ok(None);
        };

        let path = response.path();
        self.construct(client, &path, &root, Some(schema))
    }

    /// Construct at most one object for a node.
    ///
    /// Resolves the node's tag in `schema` (case rule per the node's parser
    /// mode), unwraps type-discriminated entries against the node's
    /// attributes, invokes the resolved descriptor, and attaches the lazy
    /// child sequence.
    ///
    /// Returns `Ok(None)` when the schema is absent/empty, or when a
    /// type-discriminated entry finds no discriminator attribute on the
    /// node (the node is simply not applicable here).
    ///
    /// # Errors
    /// * [`ClientError::UnknownNode`] - the tag has no schema entry
    /// * [`ClientError::UnknownNodeType`] - the discriminator value is
    ///   unmapped
    /// * [`ClientError::UnknownDescriptor`] - a named descriptor is not
    ///   registered
    pub fn construct(
        &self,
        client: &HttpClient,
        path: &str,
        node: &ElementRef,
        schema: Option<&Schema>,
    ) -> Result<Option<Constructed<T>>> {
        let Some(schema) = schema.filter(|schema| !schema.is_empty()) else {
            return Ok(None);
        };

        let mut entry = schema.get(node.tag(), node.mode()).ok_or_else(|| {
            ClientError::UnknownNode {
                tag: node.tag().to_string(),
            }
        })?;

        // Unwrap type-discriminated layers against the same node; entries
        // may nest.
        let (name, child_schema) = loop {
            match entry {
                SchemaEntry::Descriptor(name) => break (name.as_str(), None),
                SchemaEntry::WithChildren(name, children) => break (name.as_str(), Some(children)),
                SchemaEntry::Typed(typed) => {
                    let Some(value) = node.attribute(typed.attribute()) else {
                        return Ok(None);
                    };
                    entry =
                        typed
                            .variant(value)
                            .ok_or_else(|| ClientError::UnknownNodeType {
                                tag: node.tag().to_string(),
                                value: value.to_string(),
                            })?;
                }
            }
        };

        let descriptor =
            self.table
                .get(name)
                .ok_or_else(|| ClientError::UnknownDescriptor {
                    name: name.to_string(),
                })?;

        let Construction { consumed, object } = descriptor.construct(client, node, path);
        log_unconsumed(node, &consumed);

        let children = Children::new(
            self.clone(),
            client.clone(),
            path,
            Arc::clone(node),
            child_schema.cloned(),
        );

        Ok(Some(Constructed {
            object,
            consumed,
            children,
        }))
    }
}

/// Debug-log attributes the descriptor did not consume.
fn log_unconsumed(node: &Element, consumed: &std::collections::HashSet<String>) {
    let leftover: Vec<&str> = node
        .attributes()
        .map(|(key, _)| key)
        .filter(|key| !consumed.contains(*key))
        .collect();

    if !leftover.is_empty() {
        tracing::debug!(
            tag = %node.tag(),
            attributes = ?leftover,
            "Descriptor left attributes unconsumed"
        );
    }
}
