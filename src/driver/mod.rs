//! Thin `ash` wrappers used to answer capability queries from a live Vulkan driver.

mod instance;
mod physical_device;

pub use {
    self::{instance::Instance, physical_device::PhysicalDevice},
    ash::{self, vk},
};

use {
    crate::{
        provider::CapabilityProvider,
        record::{
            DeviceProperties, ExtensionProperties, Features, InstanceInfo, LayerProperties,
            MemoryProperties, QueueFamilyProperties,
        },
    },
    derive_builder::{Builder, UninitializedFieldError},
    log::{error, info, trace, warn},
    std::{
        error::Error,
        fmt::{Debug, Display, Formatter},
    },
};

/// Answers capability queries using the Vulkan loader installed on this machine.
///
/// The provider owns the `VkInstance` used for the queries and selects one physical device at
/// construction time. Every query reads from the driver again, so repeated queries return the
/// same data for as long as the device is unchanged.
pub struct VulkanProvider {
    instance: Instance,
    physical_devices: Vec<PhysicalDevice>,
    selected: Option<usize>,
}

impl VulkanProvider {
    /// Creates a Vulkan instance and selects a physical device using the given configuration.
    ///
    /// Having no physical devices is not an error: device queries then report their records as
    /// not present.
    #[profiling::function]
    pub fn new(cfg: impl Into<ProviderConfig>) -> Result<Self, DriverError> {
        let cfg = cfg.into();

        trace!("new {:?}", cfg);

        let instance = Instance::create(&cfg.app_name, &cfg.engine_name, cfg.debug)?;
        let physical_devices = Instance::physical_devices(&instance)?;

        info!(
            "Supported GPUs: {:#?}",
            physical_devices
                .iter()
                .map(PhysicalDevice::name)
                .collect::<Vec<_>>()
        );

        let device_types = physical_devices
            .iter()
            .map(|physical_device| physical_device.properties.device_type)
            .collect::<Box<[_]>>();
        let selected = select_device(&device_types, cfg.device_index)?;

        if let Some(idx) = selected {
            info!("Selected GPU: {:#?}", physical_devices[idx]);
        } else {
            warn!("no physical devices found");
        }

        Ok(Self {
            instance,
            physical_devices,
            selected,
        })
    }

    /// Returns the names of all physical devices, in enumeration order.
    pub fn device_names(this: &Self) -> impl Iterator<Item = String> + '_ {
        this.physical_devices.iter().map(PhysicalDevice::name)
    }

    /// Returns the physical device which device queries are answered from, if any.
    pub fn physical_device(this: &Self) -> Option<&PhysicalDevice> {
        this.selected.map(|idx| &this.physical_devices[idx])
    }
}

impl CapabilityProvider for VulkanProvider {
    fn instance_info(&self) -> Result<Option<InstanceInfo>, DriverError> {
        Ok(Some(InstanceInfo {
            app_name: Instance::app_name(&self.instance).to_owned(),
            engine_name: Instance::engine_name(&self.instance).to_owned(),
            api_version: Instance::version(&self.instance)?,
            device_count: device_count(self.physical_devices.len()),
        }))
    }

    fn device_properties(&self) -> Result<Option<DeviceProperties>, DriverError> {
        Ok(Self::physical_device(self)
            .map(|physical_device| DeviceProperties::from(&physical_device.properties)))
    }

    fn features(&self) -> Result<Option<Features>, DriverError> {
        Ok(Self::physical_device(self)
            .map(|physical_device| Features::from(&physical_device.features)))
    }

    fn memory_properties(&self) -> Result<Option<MemoryProperties>, DriverError> {
        Ok(Self::physical_device(self)
            .map(|physical_device| MemoryProperties::from(&physical_device.memory_properties)))
    }

    fn queue_family_properties(&self) -> Result<Option<Vec<QueueFamilyProperties>>, DriverError> {
        Ok(Self::physical_device(self).map(|physical_device| {
            PhysicalDevice::queue_families(physical_device)
                .iter()
                .map(QueueFamilyProperties::from)
                .collect()
        }))
    }

    fn instance_extensions(&self) -> Result<Option<Vec<ExtensionProperties>>, DriverError> {
        Ok(Some(
            Instance::extension_properties(&self.instance)?
                .iter()
                .map(ExtensionProperties::from)
                .collect(),
        ))
    }

    fn instance_layers(&self) -> Result<Option<Vec<LayerProperties>>, DriverError> {
        Ok(Some(
            Instance::layer_properties(&self.instance)?
                .iter()
                .map(LayerProperties::from)
                .collect(),
        ))
    }

    fn device_extensions(&self) -> Result<Option<Vec<ExtensionProperties>>, DriverError> {
        Self::physical_device(self)
            .map(|physical_device| {
                Ok(
                    PhysicalDevice::extension_properties(physical_device, &self.instance)?
                        .iter()
                        .map(ExtensionProperties::from)
                        .collect(),
                )
            })
            .transpose()
    }
}

impl Debug for VulkanProvider {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VulkanProvider")
            .field("debug", &Instance::is_debug(&self.instance))
            .field("physical_device", &Self::physical_device(self))
            .finish()
    }
}

fn device_count(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}

/// Returns the index of the device to query: `device_index` when given, otherwise the best scoring
/// device type with ties going to the earliest enumerated device.
fn select_device(
    device_types: &[vk::PhysicalDeviceType],
    device_index: Option<usize>,
) -> Result<Option<usize>, DriverError> {
    match device_index {
        Some(idx) if idx < device_types.len() => Ok(Some(idx)),
        Some(idx) => {
            error!(
                "device index {idx} is out of range ({} devices)",
                device_types.len()
            );

            Err(DriverError::InvalidData)
        }
        None => Ok(device_types
            .iter()
            .enumerate()
            // If there are multiple devices with the same score, `max_by_key` would choose the
            // last, and we want to preserve the order of devices from
            // `enumerate_physical_devices`.
            .rev()
            .max_by_key(|&(_, &ty)| PhysicalDevice::score_device_type(ty))
            .map(|(idx, _)| idx)),
    }
}

/// Describes how the Vulkan instance is created and which device is queried.
#[derive(Builder, Clone, Debug, Eq, Hash, PartialEq)]
#[builder(
    build_fn(private, name = "fallible_build", error = "UninitializedFieldError"),
    derive(Debug),
    pattern = "owned"
)]
pub struct ProviderConfig {
    /// Application name given to the Vulkan instance.
    #[builder(default = "String::from(\"Vulkan Info App\")", setter(into))]
    pub app_name: String,

    /// Enables the Khronos validation layer, routing its messages to the `log` crate.
    ///
    /// Requires a Vulkan SDK installation.
    #[builder(default)]
    pub debug: bool,

    /// Index of the physical device to query, in enumeration order.
    ///
    /// When unset the most capable device type is chosen: discrete, integrated, virtual, other.
    #[builder(default, setter(strip_option))]
    pub device_index: Option<usize>,

    /// Engine name given to the Vulkan instance.
    #[builder(default = "String::from(\"No engine\")", setter(into))]
    pub engine_name: String,
}

impl ProviderConfig {
    /// Specifies a default configuration.
    #[allow(clippy::new_ret_no_self)]
    pub fn new() -> ProviderConfigBuilder {
        Default::default()
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        ProviderConfigBuilder::default().build()
    }
}

impl From<ProviderConfigBuilder> for ProviderConfig {
    fn from(builder: ProviderConfigBuilder) -> Self {
        builder.build()
    }
}

impl ProviderConfigBuilder {
    /// Builds a new `ProviderConfig`.
    pub fn build(self) -> ProviderConfig {
        // Every field has a default value
        match self.fallible_build() {
            Ok(cfg) => cfg,
            Err(err) => unreachable!("{err}"),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DriverError {
    /// The input data, or referenced data, is not valid for the current state.
    InvalidData,

    /// The requested feature, or input configuration, is not supported for the current state.
    Unsupported,

    /// The device has run out of physical memory.
    OutOfMemory,
}

impl DriverError {
    fn from_vk(err: vk::Result) -> Self {
        match err {
            vk::Result::ERROR_OUT_OF_HOST_MEMORY | vk::Result::ERROR_OUT_OF_DEVICE_MEMORY => {
                Self::OutOfMemory
            }
            _ => Self::Unsupported,
        }
    }
}

impl Display for DriverError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Error for DriverError {}
