use {
    super::{Field, IntoValue, ListEntry, Record},
    ash::vk,
    std::ffi::CStr,
};

fn to_string<E>(name: Result<&CStr, E>) -> String {
    name.map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// An instance or device extension; entries are labelled by extension name.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct ExtensionProperties {
    pub name: String,
    pub spec_version: u32,
}

impl Record for ExtensionProperties {
    const FIELDS: &'static [Field<Self>] = &[Field {
        label: "Spec version",
        get: |ext: &Self| ext.spec_version.to_value(),
    }];
}

impl ListEntry for ExtensionProperties {
    fn entry_label(&self, _idx: usize) -> String {
        self.name.clone()
    }
}

impl From<&vk::ExtensionProperties> for ExtensionProperties {
    fn from(ext: &vk::ExtensionProperties) -> Self {
        Self {
            name: to_string(ext.extension_name_as_c_str()),
            spec_version: ext.spec_version,
        }
    }
}

/// An instance layer; entries are labelled by layer name.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct LayerProperties {
    pub name: String,

    /// Packed Vulkan version the layer was written against.
    pub spec_version: u32,

    pub implementation_version: u32,
    pub description: String,
}

impl Record for LayerProperties {
    const FIELDS: &'static [Field<Self>] = &[
        Field {
            label: "Spec version",
            get: |layer: &Self| layer.spec_version.to_value(),
        },
        Field {
            label: "Implementation version",
            get: |layer: &Self| layer.implementation_version.to_value(),
        },
        Field {
            label: "Description",
            get: |layer: &Self| layer.description.to_value(),
        },
    ];
}

impl ListEntry for LayerProperties {
    fn entry_label(&self, _idx: usize) -> String {
        self.name.clone()
    }
}

impl From<&vk::LayerProperties> for LayerProperties {
    fn from(layer: &vk::LayerProperties) -> Self {
        Self {
            name: to_string(layer.layer_name_as_c_str()),
            spec_version: layer.spec_version,
            implementation_version: layer.implementation_version,
            description: to_string(layer.description_as_c_str()),
        }
    }
}
