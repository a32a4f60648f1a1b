//! MediaHub client - schema-driven XML client for the MediaHub remote API.
//!
//! This crate fetches XML responses from a MediaHub server and constructs
//! typed objects from them by walking a declarative schema: each tag maps
//! to a named descriptor capability (or a type-discriminated set of them),
//! and children are constructed lazily as the consumer iterates.
//!
//! # Example
//!
//! ```
//! use mediahub_client::dispatch::server_list_schema;
//! use mediahub_client::{default_table, HttpClient, ParserMode, ResponseParser, SchemaDispatcher};
//!
//! # fn main() -> mediahub_client::Result<()> {
//! let client = HttpClient::new("http://localhost:32400")?;
//! let parser = ResponseParser::new(ParserMode::Strict);
//! let dispatcher = SchemaDispatcher::new(default_table());
//!
//! let body = br#"<MediaContainer size="1"><Server name="den"/></MediaContainer>"#;
//! let root = parser.parse_content(body)?;
//!
//! let mut container = dispatcher
//!     .construct(&client, "/servers", &root, Some(&server_list_schema()))?
//!     .unwrap();
//! assert_eq!(container.object.kind(), "container");
//!
//! // Children are constructed lazily, in document order.
//! let server = container.children.next().unwrap()?;
//! assert_eq!(server.object.kind(), "server");
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! The client is organized into several modules:
//!
//! - [`error`]: Error types and Result alias
//! - [`http`]: HTTP collaborator (blocking client, response snapshots)
//! - [`node`]: Owned element tree and parser-mode case rules
//! - [`parser`]: Response parsing (strict XML / tolerant HTML)
//! - [`schema`]: Declarative tag-to-construction-rule schemas
//! - [`dispatch`]: Descriptor capabilities, table, and the dispatch engine
//! - [`types`]: Shipped domain objects
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod dispatch;
pub mod error;
pub mod http;
pub mod node;
pub mod parser;
pub mod schema;
pub mod types;

// Re-export commonly used items
pub use dispatch::{
    default_table, Children, Constructed, Construction, Descriptor, DescriptorTable,
    SchemaDispatcher,
};
pub use error::{ClientError, Result};
pub use http::{HttpClient, Response};
pub use node::{Element, ElementRef, ParserMode};
pub use parser::ResponseParser;
pub use schema::{Schema, SchemaEntry};
pub use types::MediaObject;
