use {
    super::{DriverError, Instance},
    ash::vk,
    log::warn,
    std::fmt::{Debug, Formatter},
};

/// A physical device and the properties reported for it when it was enumerated.
#[derive(Clone)]
pub struct PhysicalDevice {
    /// Fine-grained features supported by the device.
    pub features: vk::PhysicalDeviceFeatures,

    /// Memory types and heaps of the device.
    pub memory_properties: vk::PhysicalDeviceMemoryProperties,

    physical_device: vk::PhysicalDevice,

    /// General properties, limits and sparse properties of the device.
    pub properties: vk::PhysicalDeviceProperties,

    queue_families: Box<[vk::QueueFamilyProperties]>,
}

impl PhysicalDevice {
    /// Reads the properties of a physical device enumerated from `instance`.
    pub fn new(
        instance: &Instance,
        physical_device: vk::PhysicalDevice,
    ) -> Result<Self, DriverError> {
        if physical_device == vk::PhysicalDevice::null() {
            return Err(DriverError::InvalidData);
        }

        let (properties, features, memory_properties, queue_families) = unsafe {
            (
                instance.get_physical_device_properties(physical_device),
                instance.get_physical_device_features(physical_device),
                instance.get_physical_device_memory_properties(physical_device),
                instance.get_physical_device_queue_family_properties(physical_device),
            )
        };

        Ok(Self {
            features,
            memory_properties,
            physical_device,
            properties,
            queue_families: queue_families.into_boxed_slice(),
        })
    }

    /// Returns the extensions supported by this device.
    #[profiling::function]
    pub fn extension_properties(
        this: &Self,
        instance: &Instance,
    ) -> Result<Vec<vk::ExtensionProperties>, DriverError> {
        unsafe { instance.enumerate_device_extension_properties(this.physical_device) }.map_err(
            |err| {
                warn!("unable to enumerate device extensions: {err}");

                DriverError::from_vk(err)
            },
        )
    }

    /// Returns the device name reported by the driver.
    pub fn name(this: &Self) -> String {
        this.properties
            .device_name_as_c_str()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Returns the properties of each queue family, indexed by queue family index.
    pub fn queue_families(this: &Self) -> &[vk::QueueFamilyProperties] {
        &this.queue_families
    }

    pub(super) fn score_device_type(ty: vk::PhysicalDeviceType) -> usize {
        match ty {
            vk::PhysicalDeviceType::DISCRETE_GPU => 1000,
            vk::PhysicalDeviceType::INTEGRATED_GPU => 200,
            vk::PhysicalDeviceType::VIRTUAL_GPU => 1,
            _ => 0,
        }
    }
}

impl Debug for PhysicalDevice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:?} ({:?})",
            Self::name(self),
            self.properties.device_type
        )
    }
}
