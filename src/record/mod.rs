//! Strongly typed capability records.
//!
//! Each record type carries a descriptor table, [`Record::FIELDS`], which pairs every display
//! label with the accessor for its value. Labels and values are declared side by side in a single
//! list, so a record can never render a label against the wrong field.

mod device;
mod extension;
mod features;
mod instance;
mod memory;
mod queue;
mod value;

pub use self::{
    device::{DeviceLimits, DeviceProperties, DeviceType, SparseProperties},
    extension::{ExtensionProperties, LayerProperties},
    features::Features,
    instance::InstanceInfo,
    memory::{HeapFlags, MemoryHeap, MemoryProperties, MemoryPropertyFlags, MemoryType},
    queue::{QueueFamilyProperties, QueueFlags},
    value::{FromVk, IntoValue, SampleCounts, UnknownEnumValue, Value},
};

use std::fmt::{Debug, Formatter};

/// One labelled field of a record.
pub struct Field<R> {
    /// Human-readable display name.
    pub label: &'static str,

    /// Reads the value of this field from a record.
    pub get: fn(&R) -> Value,
}

impl<R> Debug for Field<R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Field").field("label", &self.label).finish()
    }
}

/// A fixed-shape capability record.
pub trait Record: Sized + 'static {
    /// Every field of the record, in display order.
    const FIELDS: &'static [Field<Self>];

    /// Iterates the `(label, value)` pairs of this record in display order.
    fn values(&self) -> impl Iterator<Item = (&'static str, Value)> + '_ {
        Self::FIELDS
            .iter()
            .map(move |field| (field.label, (field.get)(self)))
    }
}

/// A record which is reported as one entry of a list, such as a queue family.
pub trait ListEntry: Record {
    /// Returns the name used to prefix the labels of this entry.
    fn entry_label(&self, idx: usize) -> String;
}

/// Declares a record struct together with its descriptor table.
///
/// Each field is written once: name, type, display label. When a `vk` type is given the record
/// also converts from it, reading the identically named `ash` field through [`FromVk`].
macro_rules! record {
    (
        $(#[$attr:meta])*
        pub struct $name:ident: $vk:ty {
            $(
                $(#[$field_attr:meta])*
                $field:ident: $ty:ty => $label:literal,
            )*
        }
    ) => {
        $crate::record::record! {
            $(#[$attr])*
            pub struct $name {
                $(
                    $(#[$field_attr])*
                    $field: $ty => $label,
                )*
            }
        }

        impl From<&$vk> for $name {
            fn from(value: &$vk) -> Self {
                Self {
                    $(
                        $field: $crate::record::FromVk::from_vk(value.$field),
                    )*
                }
            }
        }
    };
    (
        $(#[$attr:meta])*
        pub struct $name:ident {
            $(
                $(#[$field_attr:meta])*
                $field:ident: $ty:ty => $label:literal,
            )*
        }
    ) => {
        $(#[$attr])*
        #[derive(Clone, Debug, Default, PartialEq)]
        pub struct $name {
            $(
                $(#[$field_attr])*
                pub $field: $ty,
            )*
        }

        impl $crate::record::Record for $name {
            const FIELDS: &'static [$crate::record::Field<Self>] = &[
                $(
                    $crate::record::Field {
                        label: $label,
                        get: |record: &Self| $crate::record::IntoValue::to_value(&record.$field),
                    },
                )*
            ];
        }
    };
}

pub(crate) use record;
