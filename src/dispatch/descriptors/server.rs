//! Descriptor for server list entries.

use crate::dispatch::descriptor::{Construction, Descriptor};
use crate::http::HttpClient;
use crate::node::Element;
use crate::types::{MediaObject, Server};

use super::AttrReader;

/// Builds [`Server`] from `<Server>` entries.
pub struct ServerDescriptor;

impl Descriptor<MediaObject> for ServerDescriptor {
    fn construct(
        &self,
        _client: &HttpClient,
        node: &Element,
        _path: &str,
    ) -> Construction<MediaObject> {
        let mut attrs = AttrReader::new(node);

        let server = Server {
            name: attrs.string("name"),
            host: attrs.string("host"),
            address: attrs.string("address"),
            port: attrs.parse("port"),
            machine_identifier: attrs.string("machineIdentifier"),
            version: attrs.string("version"),
        };

        Construction::with_consumed(MediaObject::Server(server), attrs.finish())
    }
}
