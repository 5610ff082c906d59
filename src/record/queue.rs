use {
    super::{record, FromVk, IntoValue, ListEntry, Value},
    ash::vk,
};

/// Capabilities of the queues in a queue family.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct QueueFlags(pub u32);

impl QueueFlags {
    const NAMES: &'static [(u32, &'static str)] = &[
        (vk::QueueFlags::GRAPHICS.as_raw(), "Graphics"),
        (vk::QueueFlags::COMPUTE.as_raw(), "Compute"),
        (vk::QueueFlags::TRANSFER.as_raw(), "Transfer"),
        (vk::QueueFlags::SPARSE_BINDING.as_raw(), "Sparse binding"),
        (vk::QueueFlags::PROTECTED.as_raw(), "Protected"),
        (vk::QueueFlags::VIDEO_DECODE_KHR.as_raw(), "Video decode"),
        (vk::QueueFlags::VIDEO_ENCODE_KHR.as_raw(), "Video encode"),
        (vk::QueueFlags::OPTICAL_FLOW_NV.as_raw(), "Optical flow"),
    ];
}

impl FromVk<vk::QueueFlags> for QueueFlags {
    fn from_vk(value: vk::QueueFlags) -> Self {
        Self(value.as_raw())
    }
}

impl IntoValue for QueueFlags {
    fn to_value(&self) -> Value {
        Value::Flags {
            bits: self.0,
            names: Self::NAMES,
        }
    }
}

impl FromVk<vk::Extent3D> for [u32; 3] {
    fn from_vk(value: vk::Extent3D) -> Self {
        [value.width, value.height, value.depth]
    }
}

record! {
    /// Properties of one queue family of a physical device.
    pub struct QueueFamilyProperties: vk::QueueFamilyProperties {
        queue_flags: QueueFlags => "Queue flags",
        queue_count: u32 => "Queue count",
        timestamp_valid_bits: u32 => "Timestamp valid bits",
        min_image_transfer_granularity: [u32; 3] => "Min image transfer granularity",
    }
}

impl ListEntry for QueueFamilyProperties {
    fn entry_label(&self, idx: usize) -> String {
        format!("Queue family {idx}")
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
        assert_fields::<QueueFamilyProperties>(4);
    }

    #[test]
    pub fn from_vk() {
        let props = QueueFamilyProperties::from(&vk::QueueFamilyProperties {
            queue_flags: vk::QueueFlags::GRAPHICS | vk::QueueFlags::COMPUTE,
            queue_count: 3,
            timestamp_valid_bits: 64,
            min_image_transfer_granularity: vk::Extent3D {
                width: 1,
                height: 1,
                depth: 1,
            },
        });
        let values = props
            .values()
            .map(|(label, value)| (label, value.format().unwrap()))
            .collect::<Vec<_>>();

        assert_eq!(
            values,
            vec![
                ("Queue flags", "{Graphics, Compute}".to_owned()),
                ("Queue count", "3".to_owned()),
                ("Timestamp valid bits", "64".to_owned()),
                ("Min image transfer granularity", "{1, 1, 1}".to_owned()),
            ]
        );
        assert_eq!(props.entry_label(2), "Queue family 2");
    }
}
