//! Core data types constructed from API responses.
//!
//! These are plain data carriers; all construction logic lives in the
//! shipped descriptors under [`dispatch::descriptors`](crate::dispatch::descriptors).

/// Closed union of the objects the shipped descriptors construct.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaObject {
    /// Response envelope element.
    Container(MediaContainer),
    /// A known media server.
    Server(Server),
    /// A generic directory listing entry.
    Directory(Directory),
    /// A library section.
    Section(Section),
    /// A server setting.
    Setting(Setting),
}

impl MediaObject {
    /// Short kind name, for display.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Container(_) => "container",
            Self::Server(_) => "server",
            Self::Directory(_) => "directory",
            Self::Section(_) => "section",
            Self::Setting(_) => "setting",
        }
    }

    /// Borrow as a container, if that is what this is.
    #[must_use]
    pub fn as_container(&self) -> Option<&MediaContainer> {
        match self {
            Self::Container(container) => Some(container),
            _ => None,
        }
    }

    /// Borrow as a server entry.
    #[must_use]
    pub fn as_server(&self) -> Option<&Server> {
        match self {
            Self::Server(server) => Some(server),
            _ => None,
        }
    }

    /// Borrow as a directory entry.
    #[must_use]
    pub fn as_directory(&self) -> Option<&Directory> {
        match self {
            Self::Directory(directory) => Some(directory),
            _ => None,
        }
    }

    /// Borrow as a library section.
    #[must_use]
    pub fn as_section(&self) -> Option<&Section> {
        match self {
            Self::Section(section) => Some(section),
            _ => None,
        }
    }

    /// Borrow as a setting.
    #[must_use]
    pub fn as_setting(&self) -> Option<&Setting> {
        match self {
            Self::Setting(setting) => Some(setting),
            _ => None,
        }
    }
}

/// The envelope element wrapping every API response payload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MediaContainer {
    /// Number of entries the server reports.
    pub size: Option<u32>,
    /// Content identifier.
    pub identifier: Option<String>,
    /// Display title.
    pub title: Option<String>,
}

/// A media server, as listed by the servers resource.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Server {
    pub name: Option<String>,
    pub host: Option<String>,
    pub address: Option<String>,
    pub port: Option<u16>,
    pub machine_identifier: Option<String>,
    pub version: Option<String>,
}

/// A generic directory entry in a listing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Directory {
    pub key: Option<String>,
    pub title: Option<String>,
    pub count: Option<u32>,
    pub art: Option<String>,
    pub thumb: Option<String>,
}

/// Kinds of library sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Movie,
    Show,
    Artist,
    Photo,
}

impl SectionKind {
    /// The discriminator value the API uses for this kind.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::Show => "show",
            Self::Artist => "artist",
            Self::Photo => "photo",
        }
    }
}

/// A library section (a typed directory).
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub kind: SectionKind,
    pub key: Option<String>,
    pub title: Option<String>,
    pub uuid: Option<String>,
    pub agent: Option<String>,
    pub scanner: Option<String>,
    pub language: Option<String>,
}

/// A server setting.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Setting {
    pub id: Option<String>,
    pub label: Option<String>,
    pub summary: Option<String>,
    /// Value type the server declares ("bool", "int", "text", ...).
    pub value_type: Option<String>,
    pub default: Option<String>,
    pub value: Option<String>,
    pub hidden: bool,
    pub advanced: bool,
    pub group: Option<String>,
    /// Allowed values for enumerated settings.
    pub enum_values: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_object_kind() {
        let object = MediaObject::Container(MediaContainer::default());
        assert_eq!(object.kind(), "container");
        assert!(object.as_container().is_some());
        assert!(object.as_setting().is_none());
    }

    #[test]
    fn test_section_kind_as_str() {
        assert_eq!(SectionKind::Movie.as_str(), "movie");
        assert_eq!(SectionKind::Photo.as_str(), "photo");
    }
}
