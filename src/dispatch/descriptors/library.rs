//! Descriptors for directory listings and library sections.

use crate::dispatch::descriptor::{Construction, Descriptor};
use crate::http::HttpClient;
use crate::node::Element;
use crate::types::{Directory, MediaObject, Section, SectionKind};

use super::AttrReader;

/// Builds [`Directory`] from generic `<Directory>` listing entries.
pub struct DirectoryDescriptor;

impl Descriptor<MediaObject> for DirectoryDescriptor {
    fn construct(
        &self,
        _client: &HttpClient,
        node: &Element,
        _path: &str,
    ) -> Construction<MediaObject> {
        let mut attrs = AttrReader::new(node);

        let directory = Directory {
            key: attrs.string("key"),
            title: attrs.string("title"),
            count: attrs.parse("count"),
            art: attrs.string("art"),
            thumb: attrs.string("thumb"),
        };

        Construction::with_consumed(MediaObject::Directory(directory), attrs.finish())
    }
}

/// Builds [`Section`] from `<Directory type="...">` section entries.
///
/// One instance per section kind; the kind is fixed at registration so
/// the schema's type discrimination picks the right one.
pub struct SectionDescriptor {
    kind: SectionKind,
}

impl SectionDescriptor {
    /// Create a descriptor for one section kind.
    #[must_use]
    pub fn new(kind: SectionKind) -> Self {
        Self { kind }
    }
}

impl Descriptor<MediaObject> for SectionDescriptor {
    fn construct(
        &self,
        _client: &HttpClient,
        node: &Element,
        _path: &str,
    ) -> Construction<MediaObject> {
        let mut attrs = AttrReader::new(node);

        // The discriminator itself counts as consumed; it identified us.
        let _ = attrs.string("type");

        let section = Section {
            kind: self.kind,
            key: attrs.string("key"),
            title: attrs.string("title"),
            uuid: attrs.string("uuid"),
            agent: attrs.string("agent"),
            scanner: attrs.string("scanner"),
            language: attrs.string("language"),
        };

        Construction::with_consumed(MediaObject::Section(section), attrs.finish())
    }
}
