use {
    super::{record, Field, IntoValue, Record, SampleCounts, Value},
    ash::vk,
};

/// The kind of a physical device, stored as the raw ordinal reported by the driver so that
/// values unknown to this crate survive until they are formatted.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct DeviceType(pub i32);

impl DeviceType {
    /// Display names, indexed by `VkPhysicalDeviceType` ordinal.
    pub const NAMES: &'static [&'static str] = &[
        "Other",
        "Integrated GPU",
        "Discrete GPU",
        "Virtual GPU",
        "CPU",
    ];
}

impl From<vk::PhysicalDeviceType> for DeviceType {
    fn from(ty: vk::PhysicalDeviceType) -> Self {
        Self(ty.as_raw())
    }
}

impl IntoValue for DeviceType {
    fn to_value(&self) -> Value {
        Value::Enum {
            ordinal: self.0,
            names: Self::NAMES,
        }
    }
}

/// General properties of a physical device.
///
/// The device limits and sparse properties are reported by the same driver query and are nested
/// here; they are displayed as their own categories.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DeviceProperties {
    /// Packed version of Vulkan supported by the device.
    pub api_version: u32,

    /// Vendor-specified version of the driver.
    pub driver_version: u32,

    pub vendor_id: u32,
    pub device_id: u32,
    pub device_type: DeviceType,
    pub device_name: String,

    pub limits: DeviceLimits,
    pub sparse_properties: SparseProperties,
}

impl Record for DeviceProperties {
    const FIELDS: &'static [Field<Self>] = &[
        Field {
            label: "API Version",
            get: |props: &Self| props.api_version.to_value(),
        },
        Field {
            label: "Driver Version",
            get: |props: &Self| props.driver_version.to_value(),
        },
        Field {
            label: "Vendor ID",
            get: |props: &Self| props.vendor_id.to_value(),
        },
        Field {
            label: "Device ID",
            get: |props: &Self| props.device_id.to_value(),
        },
        Field {
            label: "Device Type",
            get: |props: &Self| props.device_type.to_value(),
        },
        Field {
            label: "Device Name",
            get: |props: &Self| props.device_name.to_value(),
        },
    ];
}

impl From<&vk::PhysicalDeviceProperties> for DeviceProperties {
    fn from(props: &vk::PhysicalDeviceProperties) -> Self {
        Self {
            api_version: props.api_version,
            driver_version: props.driver_version,
            vendor_id: props.vendor_id,
            device_id: props.device_id,
            device_type: props.device_type.into(),
            device_name: props
                .device_name_as_c_str()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default(),
            limits: (&props.limits).into(),
            sparse_properties: (&props.sparse_properties).into(),
        }
    }
}

record! {
    /// Implementation-dependent limits of a physical device, in `VkPhysicalDeviceLimits` order.
    pub struct DeviceLimits: vk::PhysicalDeviceLimits {
        max_image_dimension1_d: u32 => "Max image dimension 1D",
        max_image_dimension2_d: u32 => "Max image dimension 2D",
        max_image_dimension3_d: u32 => "Max image dimension 3D",
        max_image_dimension_cube: u32 => "Max image dimension cube",
        max_image_array_layers: u32 => "Max image array layers",
        max_texel_buffer_elements: u32 => "Max texel buffer elements",
        max_uniform_buffer_range: u32 => "Max uniform buffer range",
        max_storage_buffer_range: u32 => "Max storage buffer range",
        max_push_constants_size: u32 => "Max push constants size",
        max_memory_allocation_count: u32 => "Max memory allocation count",
        max_sampler_allocation_count: u32 => "Max sampler allocation count",
        buffer_image_granularity: u64 => "Buffer image granularity",
        sparse_address_space_size: u64 => "Sparse address space size",
        max_bound_descriptor_sets: u32 => "Max bound descriptor sets",
        max_per_stage_descriptor_samplers: u32 => "Max per-stage descriptor samplers",
        max_per_stage_descriptor_uniform_buffers: u32 => "Max per-stage descriptor uniform buffers",
        max_per_stage_descriptor_storage_buffers: u32 => "Max per-stage descriptor storage buffers",
        max_per_stage_descriptor_sampled_images: u32 => "Max per-stage descriptor sampled images",
        max_per_stage_descriptor_storage_images: u32 => "Max per-stage descriptor storage images",
        max_per_stage_descriptor_input_attachments: u32 => "Max per-stage descriptor input attachments",
        max_per_stage_resources: u32 => "Max per-stage resources",
        max_descriptor_set_samplers: u32 => "Max descriptor set samplers",
        max_descriptor_set_uniform_buffers: u32 => "Max descriptor set uniform buffers",
        max_descriptor_set_uniform_buffers_dynamic: u32 => "Max descriptor set uniform buffers dynamic",
        max_descriptor_set_storage_buffers: u32 => "Max descriptor set storage buffers",
        max_descriptor_set_storage_buffers_dynamic: u32 => "Max descriptor set storage buffers dynamic",
        max_descriptor_set_sampled_images: u32 => "Max descriptor set sampled images",
        max_descriptor_set_storage_images: u32 => "Max descriptor set storage images",
        max_descriptor_set_input_attachments: u32 => "Max descriptor set input attachments",
        max_vertex_input_attributes: u32 => "Max vertex input attributes",
        max_vertex_input_bindings: u32 => "Max vertex input bindings",
        max_vertex_input_attribute_offset: u32 => "Max vertex input attribute offset",
        max_vertex_input_binding_stride: u32 => "Max vertex input binding stride",
        max_vertex_output_components: u32 => "Max vertex output components",
        max_tessellation_generation_level: u32 => "Max tessellation generation level",
        max_tessellation_patch_size: u32 => "Max tessellation patch size",
        max_tessellation_control_per_vertex_input_components: u32 => "Max tessellation control per-vertex input components",
        max_tessellation_control_per_vertex_output_components: u32 => "Max tessellation control per-vertex output components",
        max_tessellation_control_per_patch_output_components: u32 => "Max tessellation control per-patch output components",
        max_tessellation_control_total_output_components: u32 => "Max tessellation control total output components",
        max_tessellation_evaluation_input_components: u32 => "Max tessellation evaluation input components",
        max_tessellation_evaluation_output_components: u32 => "Max tessellation evaluation output components",
        max_geometry_shader_invocations: u32 => "Max geometry shader invocations",
        max_geometry_input_components: u32 => "Max geometry input components",
        max_geometry_output_components: u32 => "Max geometry output components",
        max_geometry_output_vertices: u32 => "Max geometry output vertices",
        max_geometry_total_output_components: u32 => "Max geometry total output components",
        max_fragment_input_components: u32 => "Max fragment input components",
        max_fragment_output_attachments: u32 => "Max fragment output attachments",
        max_fragment_dual_src_attachments: u32 => "Max fragment dual src attachments",
        max_fragment_combined_output_resources: u32 => "Max fragment combined output resources",
        max_compute_shared_memory_size: u32 => "Max compute shared memory size",
        max_compute_work_group_count: [u32; 3] => "Max compute work group count",
        max_compute_work_group_invocations: u32 => "Max compute work group invocations",
        max_compute_work_group_size: [u32; 3] => "Max compute work group size",
        sub_pixel_precision_bits: u32 => "Sub-pixel precision bits",
        sub_texel_precision_bits: u32 => "Sub-texel precision bits",
        mipmap_precision_bits: u32 => "Mipmap precision bits",
        max_draw_indexed_index_value: u32 => "Max draw indexed index value",
        max_draw_indirect_count: u32 => "Max draw indirect count",
        max_sampler_lod_bias: f32 => "Max sampler LOD bias",
        max_sampler_anisotropy: f32 => "Max sampler anisotropy",
        max_viewports: u32 => "Max viewports",
        max_viewport_dimensions: [u32; 2] => "Max viewport dimensions",
        viewport_bounds_range: [f32; 2] => "Viewport bounds range",
        viewport_sub_pixel_bits: u32 => "Viewport sub-pixel bits",
        min_memory_map_alignment: u64 => "Min memory map alignment",
        min_texel_buffer_offset_alignment: u64 => "Min texel buffer offset alignment",
        min_uniform_buffer_offset_alignment: u64 => "Min uniform buffer offset alignment",
        min_storage_buffer_offset_alignment: u64 => "Min storage buffer offset alignment",
        min_texel_offset: i32 => "Min texel offset",
        max_texel_offset: u32 => "Max texel offset",
        min_texel_gather_offset: i32 => "Min texel gather offset",
        max_texel_gather_offset: u32 => "Max texel gather offset",
        min_interpolation_offset: f32 => "Min interpolation offset",
        max_interpolation_offset: f32 => "Max interpolation offset",
        sub_pixel_interpolation_offset_bits: u32 => "Sub-pixel interpolation offset bits",
        max_framebuffer_width: u32 => "Max framebuffer width",
        max_framebuffer_height: u32 => "Max framebuffer height",
        max_framebuffer_layers: u32 => "Max framebuffer layers",
        framebuffer_color_sample_counts: SampleCounts => "Framebuffer color sample counts",
        framebuffer_depth_sample_counts: SampleCounts => "Framebuffer depth sample counts",
        framebuffer_stencil_sample_counts: SampleCounts => "Framebuffer stencil sample counts",
        framebuffer_no_attachments_sample_counts: SampleCounts => "Framebuffer no attachments sample counts",
        max_color_attachments: u32 => "Max color attachments",
        sampled_image_color_sample_counts: SampleCounts => "Sampled image color sample counts",
        sampled_image_integer_sample_counts: SampleCounts => "Sampled image integer sample counts",
        sampled_image_depth_sample_counts: SampleCounts => "Sampled image depth sample counts",
        sampled_image_stencil_sample_counts: SampleCounts => "Sampled image stencil sample counts",
        storage_image_sample_counts: SampleCounts => "Storage image sample counts",
        max_sample_mask_words: u32 => "Max sample mask words",
        timestamp_compute_and_graphics: bool => "Timestamp compute & graphics",
        timestamp_period: f32 => "Timestamp period",
        max_clip_distances: u32 => "Max clip distances",
        max_cull_distances: u32 => "Max cull distances",
        max_combined_clip_and_cull_distances: u32 => "Max combined clip & cull distances",
        discrete_queue_priorities: u32 => "Discrete queue priorities",
        point_size_range: [f32; 2] => "Point size range",
        line_width_range: [f32; 2] => "Line width range",
        point_size_granularity: f32 => "Point size granularity",
        line_width_granularity: f32 => "Line width granularity",
        strict_lines: bool => "Strict lines",
        standard_sample_locations: bool => "Standard sample locations",
        optimal_buffer_copy_offset_alignment: u64 => "Optimal buffer copy offset alignment",
        optimal_buffer_copy_row_pitch_alignment: u64 => "Optimal buffer copy row pitch alignment",
        non_coherent_atom_size: u64 => "Non-coherent atom size",
    }
}

record! {
    /// Sparse resource support of a physical device.
    pub struct SparseProperties: vk::PhysicalDeviceSparseProperties {
        residency_standard2_d_block_shape: bool => "Residency standard 2D block shape",
        residency_standard2_d_multisample_block_shape: bool => "Residency standard 2D multi-sample block shape",
        residency_standard3_d_block_shape: bool => "Residency standard 3D block shape",
        residency_aligned_mip_size: bool => "Residency aligned mip size",
        residency_non_resident_strict: bool => "Residency non-resident strict",
    }
}

#[cfg(test)]
mod tests {
    use {super::*, crate::record::tests::assert_fields};

    #[test]
    pub fn fields() {
        assert_fields::<DeviceProperties>(6);
        assert_fields::<DeviceLimits>(106);
        assert_fields::<SparseProperties>(5);
    }

    #[test]
    pub fn device_types_match_vulkan() {
        let name = |ty: vk::PhysicalDeviceType| {
            DeviceType::from(ty).to_value().format().unwrap()
        };

        assert_eq!(name(vk::PhysicalDeviceType::OTHER), "Other");
        assert_eq!(name(vk::PhysicalDeviceType::INTEGRATED_GPU), "Integrated GPU");
        assert_eq!(name(vk::PhysicalDeviceType::DISCRETE_GPU), "Discrete GPU");
        assert_eq!(name(vk::PhysicalDeviceType::VIRTUAL_GPU), "Virtual GPU");
        assert_eq!(name(vk::PhysicalDeviceType::CPU), "CPU");
    }

    #[test]
    pub fn limits_from_vk() {
        let limits = vk::PhysicalDeviceLimits {
            max_viewport_dimensions: [4096, 4096],
            min_memory_map_alignment: 64,
            min_texel_offset: -8,
            framebuffer_color_sample_counts: vk::SampleCountFlags::TYPE_1
                | vk::SampleCountFlags::TYPE_4,
            strict_lines: vk::TRUE,
            ..Default::default()
        };
        let limits = DeviceLimits::from(&limits);

        assert_eq!(limits.max_viewport_dimensions, [4096, 4096]);
        assert_eq!(limits.min_memory_map_alignment, 64);
        assert_eq!(limits.min_texel_offset, -8);
        assert_eq!(limits.framebuffer_color_sample_counts, SampleCounts(0b101));
        assert!(limits.strict_lines);
        assert!(!limits.standard_sample_locations);
    }

    #[test]
    pub fn properties_from_vk() {
        let mut props = vk::PhysicalDeviceProperties {
            api_version: vk::make_api_version(0, 1, 1, 128),
            device_type: vk::PhysicalDeviceType::INTEGRATED_GPU,
            ..Default::default()
        };

        for (dst, src) in props.device_name.iter_mut().zip(b"Adreno 640") {
            *dst = *src as _;
        }

        let props = DeviceProperties::from(&props);

        assert_eq!(props.api_version, 4198528);
        assert_eq!(props.device_type, DeviceType(1));
        assert_eq!(props.device_name, "Adreno 640");
    }
}
