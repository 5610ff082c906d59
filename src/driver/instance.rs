use {
    super::{physical_device::PhysicalDevice, DriverError},
    ash::{ext, vk, Entry},
    log::{debug, error, trace, warn},
    std::{
        ffi::{c_void, CStr, CString},
        fmt::{Debug, Formatter},
        ops::Deref,
        os::raw::c_char,
        thread::panicking,
    },
};

unsafe extern "system" fn vulkan_debug_callback(
    message_severity: vk::DebugUtilsMessageSeverityFlagsEXT,
    _message_type: vk::DebugUtilsMessageTypeFlagsEXT,
    callback_data: *const vk::DebugUtilsMessengerCallbackDataEXT<'_>,
    _user_data: *mut c_void,
) -> vk::Bool32 {
    if panicking() || callback_data.is_null() {
        return vk::FALSE;
    }

    let message = unsafe { (*callback_data).p_message };

    if message.is_null() {
        return vk::FALSE;
    }

    let message = unsafe { CStr::from_ptr(message) }.to_string_lossy();

    if message_severity.contains(vk::DebugUtilsMessageSeverityFlagsEXT::ERROR) {
        error!("🆘 {message}");
    } else if message_severity.contains(vk::DebugUtilsMessageSeverityFlagsEXT::WARNING) {
        warn!("{message}");
    } else if message_severity.contains(vk::DebugUtilsMessageSeverityFlagsEXT::INFO) {
        debug!("{message}");
    } else {
        trace!("{message}");
    }

    vk::FALSE
}

/// There is no global state in Vulkan and all per-application state is stored in a VkInstance
/// object.
///
/// Creating an Instance initializes the Vulkan library and allows the application to pass
/// information about itself to the implementation.
pub struct Instance {
    app_name: String,
    debug_utils: Option<(ext::debug_utils::Instance, vk::DebugUtilsMessengerEXT)>,
    engine_name: String,
    entry: Entry,
    instance: ash::Instance,
}

impl Instance {
    /// Creates a new Vulkan instance which identifies itself using the given names.
    #[profiling::function]
    pub fn create(app_name: &str, engine_name: &str, debug: bool) -> Result<Self, DriverError> {
        let entry = unsafe {
            Entry::load().map_err(|err| {
                error!("Vulkan driver not found: {err}");

                DriverError::Unsupported
            })?
        };

        let app_name_c = CString::new(app_name).map_err(|_| {
            warn!("application name contains a nul byte");

            DriverError::InvalidData
        })?;
        let engine_name_c = CString::new(engine_name).map_err(|_| {
            warn!("engine name contains a nul byte");

            DriverError::InvalidData
        })?;
        let layer_names = Self::layer_names(debug)
            .iter()
            .map(|name| name.as_ptr())
            .collect::<Box<[_]>>();
        let extension_names = Self::extension_names(debug);
        let app_desc = vk::ApplicationInfo::default()
            .application_name(&app_name_c)
            .application_version(vk::make_api_version(0, 1, 0, 0))
            .engine_name(&engine_name_c)
            .engine_version(vk::make_api_version(0, 1, 0, 0))
            .api_version(vk::API_VERSION_1_0);
        let instance_desc = vk::InstanceCreateInfo::default()
            .application_info(&app_desc)
            .enabled_layer_names(&layer_names)
            .enabled_extension_names(&extension_names);

        let instance = unsafe {
            entry.create_instance(&instance_desc, None).map_err(|err| {
                if debug {
                    warn!("debug may only be enabled with a valid Vulkan SDK installation");
                }

                error!("unable to create Vulkan instance: {err}");

                for layer_name in Self::layer_names(debug) {
                    debug!("Layer: {:?}", layer_name);
                }

                DriverError::from_vk(err)
            })?
        };

        trace!("created a Vulkan instance");

        let debug_utils = if debug {
            let debug_utils = ext::debug_utils::Instance::new(&entry, &instance);
            let messenger_info = vk::DebugUtilsMessengerCreateInfoEXT::default()
                .message_severity(
                    vk::DebugUtilsMessageSeverityFlagsEXT::ERROR
                        | vk::DebugUtilsMessageSeverityFlagsEXT::WARNING
                        | vk::DebugUtilsMessageSeverityFlagsEXT::INFO
                        | vk::DebugUtilsMessageSeverityFlagsEXT::VERBOSE,
                )
                .message_type(
                    vk::DebugUtilsMessageTypeFlagsEXT::GENERAL
                        | vk::DebugUtilsMessageTypeFlagsEXT::VALIDATION
                        | vk::DebugUtilsMessageTypeFlagsEXT::PERFORMANCE,
                )
                .pfn_user_callback(Some(vulkan_debug_callback));

            match unsafe { debug_utils.create_debug_utils_messenger(&messenger_info, None) } {
                Ok(messenger) => Some((debug_utils, messenger)),
                Err(err) => {
                    error!("unable to create debug messenger: {err}");

                    unsafe {
                        instance.destroy_instance(None);
                    }

                    return Err(DriverError::from_vk(err));
                }
            }
        } else {
            None
        };

        Ok(Self {
            app_name: app_name.to_owned(),
            debug_utils,
            engine_name: engine_name.to_owned(),
            entry,
            instance,
        })
    }

    /// Returns the application name this instance was created with.
    pub fn app_name(this: &Self) -> &str {
        &this.app_name
    }

    /// Returns the engine name this instance was created with.
    pub fn engine_name(this: &Self) -> &str {
        &this.engine_name
    }

    fn extension_names(debug: bool) -> Vec<*const c_char> {
        let mut res = vec![];

        if debug {
            res.push(ext::debug_utils::NAME.as_ptr());
        }

        res
    }

    /// Returns the instance extensions offered by the loader and its implicit layers.
    #[profiling::function]
    pub fn extension_properties(this: &Self) -> Result<Vec<vk::ExtensionProperties>, DriverError> {
        unsafe { this.entry.enumerate_instance_extension_properties(None) }.map_err(|err| {
            warn!("unable to enumerate instance extensions: {err}");

            DriverError::from_vk(err)
        })
    }

    /// Returns `true` if this instance was created with debug layers enabled.
    pub fn is_debug(this: &Self) -> bool {
        this.debug_utils.is_some()
    }

    /// Returns the layers which may be enabled on an instance.
    #[profiling::function]
    pub fn layer_properties(this: &Self) -> Result<Vec<vk::LayerProperties>, DriverError> {
        unsafe { this.entry.enumerate_instance_layer_properties() }.map_err(|err| {
            warn!("unable to enumerate instance layers: {err}");

            DriverError::from_vk(err)
        })
    }

    fn layer_names(debug: bool) -> Vec<&'static CStr> {
        let mut res = vec![];

        if debug {
            res.push(c"VK_LAYER_KHRONOS_validation");
        }

        res
    }

    /// Returns the available physical devices of this instance.
    #[profiling::function]
    pub fn physical_devices(this: &Self) -> Result<Vec<PhysicalDevice>, DriverError> {
        let physical_devices = unsafe { this.enumerate_physical_devices() };

        Ok(physical_devices
            .map_err(|err| {
                error!("unable to enumerate physical devices: {err}");

                DriverError::from_vk(err)
            })?
            .into_iter()
            .enumerate()
            .filter_map(|(idx, physical_device)| {
                let res = PhysicalDevice::new(this, physical_device);

                if let Err(err) = &res {
                    warn!("unable to create physical device at index {idx}: {err}");
                }

                res.ok()
            })
            .collect())
    }

    /// Returns the packed instance-level version of Vulkan supported by the loader.
    ///
    /// Vulkan 1.0 loaders cannot report a version and are assumed to be 1.0.
    pub fn version(this: &Self) -> Result<u32, DriverError> {
        unsafe { this.entry.try_enumerate_instance_version() }
            .map(|version| version.unwrap_or(vk::API_VERSION_1_0))
            .map_err(|err| {
                warn!("unable to enumerate instance version: {err}");

                DriverError::from_vk(err)
            })
    }
}

impl Debug for Instance {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("Instance")
    }
}

impl Deref for Instance {
    type Target = ash::Instance;

    fn deref(&self) -> &Self::Target {
        &self.instance
    }
}

impl Drop for Instance {
    #[profiling::function]
    fn drop(&mut self) {
        if panicking() {
            return;
        }

        unsafe {
            if let Some((debug_utils, messenger)) = self.debug_utils.take() {
                debug_utils.destroy_debug_utils_messenger(messenger, None);
            }

            self.instance.destroy_instance(None);
        }
    }
}
