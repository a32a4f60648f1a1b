//! Schema-driven construction of domain objects from parsed nodes.
//!
//! The dispatcher resolves each node's tag through a declarative
//! [`Schema`](crate::schema::Schema) to a named [`Descriptor`] capability,
//! invokes it, and attaches a lazy [`Children`] sequence. Descriptors are
//! resolved from an explicit [`DescriptorTable`] handed to the dispatcher
//! at construction time.

mod children;
mod config;
mod descriptor;
mod engine;
mod table;

pub mod descriptors;

pub use children::{Children, Constructed};
pub use config::{
    default_table, directory_list_schema, library_sections_schema, server_list_schema,
    settings_schema,
};
pub use descriptor::{Construction, Descriptor};
pub use engine::SchemaDispatcher;
pub use table::DescriptorTable;
