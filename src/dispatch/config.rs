//! Stock capability table and schemas for the known API resources.

use crate::schema::{Schema, SchemaEntry};
use crate::types::{MediaObject, SectionKind};

use super::descriptors::{
    ContainerDescriptor, DirectoryDescriptor, SectionDescriptor, ServerDescriptor,
    SettingDescriptor,
};
use super::table::DescriptorTable;

/// Create the capability table with all shipped descriptors registered.
#[must_use]
pub fn default_table() -> DescriptorTable<MediaObject> {
    let mut table = DescriptorTable::new();

    table.register("MediaContainer", ContainerDescriptor);
    table.register("Server", ServerDescriptor);
    table.register("Directory", DirectoryDescriptor);
    table.register("Setting", SettingDescriptor);

    // Section descriptors, one per discriminator value.
    table.register("MovieSection", SectionDescriptor::new(SectionKind::Movie));
    table.register("ShowSection", SectionDescriptor::new(SectionKind::Show));
    table.register("ArtistSection", SectionDescriptor::new(SectionKind::Artist));
    table.register("PhotoSection", SectionDescriptor::new(SectionKind::Photo));

    table
}

/// Schema for the server list resource.
#[must_use]
pub fn server_list_schema() -> Schema {
    Schema::new().with(
        "MediaContainer",
        SchemaEntry::with_children(
            "MediaContainer",
            Schema::new().with("Server", SchemaEntry::descriptor("Server")),
        ),
    )
}

/// Schema for the top-level directory listing.
#[must_use]
pub fn directory_list_schema() -> Schema {
    Schema::new().with(
        "MediaContainer",
        SchemaEntry::with_children(
            "MediaContainer",
            Schema::new().with("Directory", SchemaEntry::descriptor("Directory")),
        ),
    )
}

/// Schema for the library sections resource.
///
/// Sections arrive as `<Directory type="...">`; the type attribute picks
/// the concrete section descriptor.
#[must_use]
pub fn library_sections_schema() -> Schema {
    Schema::new().with(
        "MediaContainer",
        SchemaEntry::with_children(
            "MediaContainer",
            Schema::new().with(
                "Directory",
                SchemaEntry::typed([
                    ("movie", SchemaEntry::descriptor("MovieSection")),
                    ("show", SchemaEntry::descriptor("ShowSection")),
                    ("artist", SchemaEntry::descriptor("ArtistSection")),
                    ("photo", SchemaEntry::descriptor("PhotoSection")),
                ]),
            ),
        ),
    )
}

/// Schema for the settings resource.
#[must_use]
pub fn settings_schema() -> Schema {
    Schema::new().with(
        "MediaContainer",
        SchemaEntry::with_children(
            "MediaContainer",
            Schema::new().with("Setting", SchemaEntry::descriptor("Setting")),
        ),
    )
}
