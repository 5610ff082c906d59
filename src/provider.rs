use crate::{
    driver::DriverError,
    record::{
        DeviceProperties, ExtensionProperties, Features, InstanceInfo, LayerProperties,
        MemoryProperties, QueueFamilyProperties,
    },
};

/// A source of capability records, such as a Vulkan driver.
///
/// Each query returns `Ok(None)` when the record is not present on this provider, and an error
/// only when the provider itself cannot be used. Queries must be idempotent: asking twice of an
/// unchanged device returns identical records.
pub trait CapabilityProvider {
    /// Describes the instance used to answer queries.
    fn instance_info(&self) -> Result<Option<InstanceInfo>, DriverError>;

    /// General device properties, including the nested limits and sparse properties.
    fn device_properties(&self) -> Result<Option<DeviceProperties>, DriverError>;

    fn features(&self) -> Result<Option<Features>, DriverError>;

    /// Memory properties, including the nested memory types and heaps.
    fn memory_properties(&self) -> Result<Option<MemoryProperties>, DriverError>;

    fn queue_family_properties(&self) -> Result<Option<Vec<QueueFamilyProperties>>, DriverError>;

    fn instance_extensions(&self) -> Result<Option<Vec<ExtensionProperties>>, DriverError> {
        Ok(None)
    }

    fn instance_layers(&self) -> Result<Option<Vec<LayerProperties>>, DriverError> {
        Ok(None)
    }

    fn device_extensions(&self) -> Result<Option<Vec<ExtensionProperties>>, DriverError> {
        Ok(None)
    }
}

/// A provider which answers from records held in memory.
///
/// Useful as a stand-in for a driver in tests, or to freeze the answers of a live device with
/// [`RecordedProvider::capture`] so that they may be replayed later.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordedProvider {
    pub instance_info: Option<InstanceInfo>,
    pub device_properties: Option<DeviceProperties>,
    pub features: Option<Features>,
    pub memory_properties: Option<MemoryProperties>,
    pub queue_family_properties: Option<Vec<QueueFamilyProperties>>,
    pub instance_extensions: Option<Vec<ExtensionProperties>>,
    pub instance_layers: Option<Vec<LayerProperties>>,
    pub device_extensions: Option<Vec<ExtensionProperties>>,
}

impl RecordedProvider {
    /// Records every answer of `provider`.
    #[profiling::function]
    pub fn capture<P>(provider: &P) -> Result<Self, DriverError>
    where
        P: CapabilityProvider + ?Sized,
    {
        Ok(Self {
            instance_info: provider.instance_info()?,
            device_properties: provider.device_properties()?,
            features: provider.features()?,
            memory_properties: provider.memory_properties()?,
            queue_family_properties: provider.queue_family_properties()?,
            instance_extensions: provider.instance_extensions()?,
            instance_layers: provider.instance_layers()?,
            device_extensions: provider.device_extensions()?,
        })
    }
}

impl CapabilityProvider for RecordedProvider {
    fn instance_info(&self) -> Result<Option<InstanceInfo>, DriverError> {
        Ok(self.instance_info.clone())
    }

    fn device_properties(&self) -> Result<Option<DeviceProperties>, DriverError> {
        Ok(self.device_properties.clone())
    }

    fn features(&self) -> Result<Option<Features>, DriverError> {
        Ok(self.features.clone())
    }

    fn memory_properties(&self) -> Result<Option<MemoryProperties>, DriverError> {
        Ok(self.memory_properties.clone())
    }

    fn queue_family_properties(&self) -> Result<Option<Vec<QueueFamilyProperties>>, DriverError> {
        Ok(self.queue_family_properties.clone())
    }

    fn instance_extensions(&self) -> Result<Option<Vec<ExtensionProperties>>, DriverError> {
        Ok(self.instance_extensions.clone())
    }

    fn instance_layers(&self) -> Result<Option<Vec<LayerProperties>>, DriverError> {
        Ok(self.instance_layers.clone())
    }

    fn device_extensions(&self) -> Result<Option<Vec<ExtensionProperties>>, DriverError> {
        Ok(self.device_extensions.clone())
    }
}
