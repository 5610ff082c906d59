use {
    super::{record, Field, FromVk, IntoValue, ListEntry, Record, Value},
    ash::vk,
};

/// Memory property flags of a memory type.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct MemoryPropertyFlags(pub u32);

impl MemoryPropertyFlags {
    const NAMES: &'static [(u32, &'static str)] = &[
        (vk::MemoryPropertyFlags::DEVICE_LOCAL.as_raw(), "Device local"),
        (vk::MemoryPropertyFlags::HOST_VISIBLE.as_raw(), "Host visible"),
        (vk::MemoryPropertyFlags::HOST_COHERENT.as_raw(), "Host coherent"),
        (vk::MemoryPropertyFlags::HOST_CACHED.as_raw(), "Host cached"),
        (vk::MemoryPropertyFlags::LAZILY_ALLOCATED.as_raw(), "Lazily allocated"),
        (vk::MemoryPropertyFlags::PROTECTED.as_raw(), "Protected"),
        (vk::MemoryPropertyFlags::DEVICE_COHERENT_AMD.as_raw(), "Device coherent"),
        (vk::MemoryPropertyFlags::DEVICE_UNCACHED_AMD.as_raw(), "Device uncached"),
        (vk::MemoryPropertyFlags::RDMA_CAPABLE_NV.as_raw(), "RDMA capable"),
    ];
}

impl FromVk<vk::MemoryPropertyFlags> for MemoryPropertyFlags {
    fn from_vk(value: vk::MemoryPropertyFlags) -> Self {
        Self(value.as_raw())
    }
}

impl IntoValue for MemoryPropertyFlags {
    fn to_value(&self) -> Value {
        Value::Flags {
            bits: self.0,
            names: Self::NAMES,
        }
    }
}

/// Flags of a memory heap.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct HeapFlags(pub u32);

impl HeapFlags {
    const NAMES: &'static [(u32, &'static str)] = &[
        (vk::MemoryHeapFlags::DEVICE_LOCAL.as_raw(), "Device local"),
        (vk::MemoryHeapFlags::MULTI_INSTANCE.as_raw(), "Multi-instance"),
    ];
}

impl FromVk<vk::MemoryHeapFlags> for HeapFlags {
    fn from_vk(value: vk::MemoryHeapFlags) -> Self {
        Self(value.as_raw())
    }
}

impl IntoValue for HeapFlags {
    fn to_value(&self) -> Value {
        Value::Flags {
            bits: self.0,
            names: Self::NAMES,
        }
    }
}

record! {
    /// One memory type of a physical device.
    pub struct MemoryType: vk::MemoryType {
        property_flags: MemoryPropertyFlags => "Property flags",

        /// Index of the heap this memory type corresponds to.
        heap_index: u32 => "Heap index",
    }
}

impl ListEntry for MemoryType {
    fn entry_label(&self, idx: usize) -> String {
        format!("Memory type {idx}")
    }
}

record! {
    /// One memory heap of a physical device.
    pub struct MemoryHeap: vk::MemoryHeap {
        /// Total size in bytes.
        size: u64 => "Size",
        flags: HeapFlags => "Flags",
    }
}

impl ListEntry for MemoryHeap {
    fn entry_label(&self, idx: usize) -> String {
        format!("Memory heap {idx}")
    }
}

/// Memory types and heaps of a physical device.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MemoryProperties {
    pub memory_types: Vec<MemoryType>,
    pub memory_heaps: Vec<MemoryHeap>,
}

impl Record for MemoryProperties {
    const FIELDS: &'static [Field<Self>] = &[
        Field {
            label: "Memory type count",
            get: |props: &Self| Value::Unsigned(props.memory_types.len() as _),
        },
        Field {
            label: "Memory heap count",
            get: |props: &Self| Value::Unsigned(props.memory_heaps.len() as _),
        },
    ];
}

impl From<&vk::PhysicalDeviceMemoryProperties> for MemoryProperties {
    fn from(props: &vk::PhysicalDeviceMemoryProperties) -> Self {
        Self {
            memory_types: props
                .memory_types
                .iter()
                .take(props.memory_type_count as _)
                .map(MemoryType::from)
                .collect(),
            memory_heaps: props
                .memory_heaps
                .iter()
                .take(props.memory_heap_count as _)
                .map(MemoryHeap::from)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use {super::*, crate::record::tests::assert_fields};

    #[test]
    pub fn fields() {
        assert_fields::<MemoryProperties>(2);
        assert_fields::<MemoryType>(2);
        assert_fields::<MemoryHeap>(2);
    }

    #[test]
    pub fn from_vk_respects_counts() {
        let mut props = vk::PhysicalDeviceMemoryProperties {
            memory_type_count: 2,
            memory_heap_count: 1,
            ..Default::default()
        };
        props.memory_types[0] = vk::MemoryType {
            property_flags: vk::MemoryPropertyFlags::DEVICE_LOCAL,
            heap_index: 0,
        };
        props.memory_types[1] = vk::MemoryType {
            property_flags: vk::MemoryPropertyFlags::HOST_VISIBLE
                | vk::MemoryPropertyFlags::HOST_COHERENT,
            heap_index: 0,
        };
        props.memory_heaps[0] = vk::MemoryHeap {
            size: 1 << 32,
            flags: vk::MemoryHeapFlags::DEVICE_LOCAL,
        };

        let props = MemoryProperties::from(&props);

        assert_eq!(props.memory_types.len(), 2);
        assert_eq!(props.memory_heaps.len(), 1);
        assert_eq!(
            props.memory_types[1].property_flags.to_value().format().unwrap(),
            "{Host visible, Host coherent}"
        );
        assert_eq!(
            props.memory_heaps[0].values().collect::<Vec<_>>(),
            vec![
                ("Size", Value::Unsigned(4294967296)),
                (
                    "Flags",
                    Value::Flags {
                        bits: 1,
                        names: HeapFlags::NAMES,
                    }
                ),
            ]
        );
    }
}
