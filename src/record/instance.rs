use super::record;

record! {
    /// Describes the Vulkan instance which was used to query the device.
    pub struct InstanceInfo {
        app_name: String => "Application name",
        engine_name: String => "Engine name",

        /// Packed instance-level API version, as returned by `vkEnumerateInstanceVersion`.
        api_version: u32 => "Instance API version",

        device_count: u32 => "Number of devices",
    }
}

#[cfg(test)]
mod tests {
    use {super::*, crate::record::tests::assert_fields};

    #[test]
    pub fn fields() {
        assert_fields::<InstanceInfo>(4);
    }
}
