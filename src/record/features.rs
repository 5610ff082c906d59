use {super::record, ash::vk};

record! {
    /// Fine-grained features supported by a physical device.
    pub struct Features: vk::PhysicalDeviceFeatures {
        robust_buffer_access: bool => "Robust buffer access",
        full_draw_index_uint32: bool => "Full draw index uint 32",
        image_cube_array: bool => "Image cube array",
        independent_blend: bool => "Independent blend",
        geometry_shader: bool => "Geometry shader",
        tessellation_shader: bool => "Tessellation shader",
        sample_rate_shading: bool => "Sample rate shading",
        dual_src_blend: bool => "Dual src blend",
        logic_op: bool => "Logic op",
        multi_draw_indirect: bool => "Multi draw indirect",
        draw_indirect_first_instance: bool => "Draw indirect first instance",
        depth_clamp: bool => "Depth clamp",
        depth_bias_clamp: bool => "Depth bias clamp",
        fill_mode_non_solid: bool => "Fill mode non-solid",
        depth_bounds: bool => "Depth bounds",
        wide_lines: bool => "Wide lines",
        large_points: bool => "Large points",
        alpha_to_one: bool => "Alpha to one",
        multi_viewport: bool => "Multi-viewport",
        sampler_anisotropy: bool => "Sampler anisotropy",
        texture_compression_etc2: bool => "Texture compression ETC2",
        texture_compression_astc_ldr: bool => "Texture compression ASTC-LDR",
        texture_compression_bc: bool => "Texture compression BC",
        occlusion_query_precise: bool => "Occlusion query precise",
        pipeline_statistics_query: bool => "Pipeline statistics query",
        vertex_pipeline_stores_and_atomics: bool => "Vertex pipeline stores & atomics",
        fragment_stores_and_atomics: bool => "Fragment stores & atomics",
        shader_tessellation_and_geometry_point_size: bool => "Shader tessellation & geometry point size",
        shader_image_gather_extended: bool => "Shader image gather extended",
        shader_storage_image_extended_formats: bool => "Shader storage image extended formats",
        shader_storage_image_multisample: bool => "Shader storage image multi-sample",
        shader_storage_image_read_without_format: bool => "Shader storage image read without format",
        shader_storage_image_write_without_format: bool => "Shader storage image write without format",
        shader_uniform_buffer_array_dynamic_indexing: bool => "Shader uniform buffer array dynamic indexing",
        shader_sampled_image_array_dynamic_indexing: bool => "Shader sampled image array dynamic indexing",
        shader_storage_buffer_array_dynamic_indexing: bool => "Shader storage buffer array dynamic indexing",
        shader_storage_image_array_dynamic_indexing: bool => "Shader storage image array dynamic indexing",
        shader_clip_distance: bool => "Shader clip distance",
        shader_cull_distance: bool => "Shader cull distance",
        shader_float64: bool => "Shader float 64",
        shader_int64: bool => "Shader int 64",
        shader_int16: bool => "Shader int 16",
        shader_resource_residency: bool => "Shader resource residency",
        shader_resource_min_lod: bool => "Shader resource min lod",
        sparse_binding: bool => "Sparse binding",
        sparse_residency_buffer: bool => "Sparse residency buffer",
        sparse_residency_image2_d: bool => "Sparse residency image 2D",
        sparse_residency_image3_d: bool => "Sparse residency image 3D",
        sparse_residency2_samples: bool => "Sparse residency 2 samples",
        sparse_residency4_samples: bool => "Sparse residency 4 samples",
        sparse_residency8_samples: bool => "Sparse residency 8 samples",
        sparse_residency16_samples: bool => "Sparse residency 16 samples",
        sparse_residency_aliased: bool => "Sparse residency aliased",
        variable_multisample_rate: bool => "Variable multi-sample rate",
        inherited_queries: bool => "Inherited queries",
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::record::{tests::assert_fields, Record},
    };

    #[test]
    pub fn fields() {
        assert_fields::<Features>(55);
    }

    #[test]
    pub fn from_vk() {
        let features = Features::from(&vk::PhysicalDeviceFeatures {
            geometry_shader: vk::FALSE,
            sampler_anisotropy: vk::TRUE,
            ..Default::default()
        });
        let values = features
            .values()
            .filter(|(label, _)| label.starts_with("Geometry") || label.starts_with("Sampler"))
            .map(|(label, value)| (label, value.format().unwrap()))
            .collect::<Vec<_>>();

        assert_eq!(
            values,
            vec![
                ("Geometry shader", "false".to_owned()),
                ("Sampler anisotropy", "true".to_owned()),
            ]
        );
    }
}
