//! Descriptor for server settings.

use crate::dispatch::descriptor::{Construction, Descriptor};
use crate::http::HttpClient;
use crate::node::Element;
use crate::types::{MediaObject, Setting};

use super::AttrReader;

/// Builds [`Setting`] from `<Setting>` entries.
///
/// Note that the `type` attribute here is the setting's value type, not a
/// schema discriminator; the settings schema references this descriptor
/// directly.
pub struct SettingDescriptor;

impl Descriptor<MediaObject> for SettingDescriptor {
    fn construct(
        &self,
        _client: &HttpClient,
        node: &Element,
        _path: &str,
    ) -> Construction<MediaObject> {
        let mut attrs = AttrReader::new(node);

        let setting = Setting {
            id: attrs.string("id"),
            label: attrs.string("label"),
            summary: attrs.string("summary"),
            value_type: attrs.string("type"),
            default: attrs.string("default"),
            value: attrs.string("value"),
            hidden: attrs.flag("hidden"),
            advanced: attrs.flag("advanced"),
            group: attrs.string("group"),
            enum_values: attrs
                .string("enumValues")
                .map(|values| values.split('|').map(str::to_string).collect())
                .unwrap_or_default(),
        };

        Construction::with_consumed(MediaObject::Setting(setting), attrs.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::ParserMode;

    #[test]
    fn test_construct_setting() {
        let client = HttpClient::new("http://localhost:32400").unwrap();
        let node = Element::new("Setting", ParserMode::Strict)
            .with_attribute("id", "FriendlyName")
            .with_attribute("label", "Friendly name")
            .with_attribute("type", "text")
            .with_attribute("default", "")
            .with_attribute("value", "den")
            .with_attribute("hidden", "0")
            .with_attribute("advanced", "1")
            .with_attribute("group", "general");

        let result = SettingDescriptor.construct(&client, &node, "/:/prefs");
        let setting = result.object.as_setting().unwrap();

        assert_eq!(setting.id.as_deref(), Some("FriendlyName"));
        assert_eq!(setting.value_type.as_deref(), Some("text"));
        assert_eq!(setting.value.as_deref(), Some("den"));
        assert!(!setting.hidden);
        assert!(setting.advanced);
        assert!(setting.enum_values.is_empty());
    }

    #[test]
    fn test_construct_setting_enum_values() {
        let client = HttpClient::new("http://localhost:32400").unwrap();
        let node = Element::new("Setting", ParserMode::Strict)
            .with_attribute("id", "logVerbose")
            .with_attribute("type", "bool")
            .with_attribute("enumValues", "0:off|1:on");

        let result = SettingDescriptor.construct(&client, &node, "/:/prefs");
        let setting = result.object.as_setting().unwrap();

        assert_eq!(setting.enum_values, ["0:off", "1:on"]);
    }
}
