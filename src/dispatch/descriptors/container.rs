//! Descriptor for the response envelope element.

use crate::dispatch::descriptor::{Construction, Descriptor};
use crate::http::HttpClient;
use crate::node::Element;
use crate::types::{MediaContainer, MediaObject};

use super::AttrReader;

/// Builds [`MediaContainer`] from `<MediaContainer>` envelopes.
pub struct ContainerDescriptor;

impl Descriptor<MediaObject> for ContainerDescriptor {
    fn construct(
        &self,
        _client: &HttpClient,
        node: &Element,
        _path: &str,
    ) -> Construction<MediaObject> {
        let mut attrs = AttrReader::new(node);

        let container = MediaContainer {
            size: attrs.parse("size"),
            identifier: attrs.string("identifier"),
            title: attrs.string("title1"),
        };

        Construction::with_consumed(MediaObject::Container(container), attrs.finish())
    }
}
