use {
    ash::vk,
    std::{
        error::Error,
        fmt::{Display, Formatter, Write},
    },
};

/// A single capability value, as returned by a record field accessor.
///
/// Every variant has exactly one canonical text form; see [`Value::format`].
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Rendered as `true` or `false`.
    Bool(bool),

    /// Rendered as a plain decimal number.
    Unsigned(u64),

    /// Rendered as a plain decimal number with a leading `-` when negative.
    Signed(i64),

    /// Rendered using the shortest representation which round-trips.
    Float(f32),

    /// Passed through unchanged.
    Text(String),

    /// Small fixed-size vectors such as `{4096, 4096}`.
    Tuple(Vec<Value>),

    /// An ordinal looked up in a parallel name table.
    Enum {
        /// The raw value reported by the driver.
        ordinal: i32,

        /// Display names indexed by ordinal.
        names: &'static [&'static str],
    },

    /// A bitmask rendered as the list of names of its set bits, such as `{Graphics, Compute}`.
    Flags {
        /// The raw value reported by the driver.
        bits: u32,

        /// Display names of the known bits, in display order.
        names: &'static [(u32, &'static str)],
    },
}

impl Value {
    /// Returns the canonical text form of this value.
    ///
    /// Fails only for [`Value::Enum`] values which have no entry in their name table.
    pub fn format(&self) -> Result<String, UnknownEnumValue> {
        let mut res = String::new();
        self.write(&mut res)?;

        Ok(res)
    }

    fn write(&self, buf: &mut String) -> Result<(), UnknownEnumValue> {
        // Writing into a String cannot fail
        let _ = match self {
            Self::Bool(value) => write!(buf, "{value}"),
            Self::Unsigned(value) => write!(buf, "{value}"),
            Self::Signed(value) => write!(buf, "{value}"),
            Self::Float(value) => write!(buf, "{value}"),
            Self::Text(value) => buf.write_str(value),
            Self::Tuple(values) => {
                buf.push('{');

                for (idx, value) in values.iter().enumerate() {
                    if idx > 0 {
                        buf.push_str(", ");
                    }

                    value.write(buf)?;
                }

                buf.write_char('}')
            }
            Self::Enum { ordinal, names } => {
                let name = usize::try_from(*ordinal)
                    .ok()
                    .and_then(|idx| names.get(idx))
                    .ok_or(UnknownEnumValue { ordinal: *ordinal })?;

                buf.write_str(name)
            }
            Self::Flags { bits, names } => {
                let mut remaining = *bits;
                let mut first = true;

                buf.push('{');

                for &(bit, name) in names.iter() {
                    if bits & bit == bit && bit != 0 {
                        if !first {
                            buf.push_str(", ");
                        }

                        buf.push_str(name);
                        remaining &= !bit;
                        first = false;
                    }
                }

                if remaining != 0 {
                    if !first {
                        buf.push_str(", ");
                    }

                    let _ = write!(buf, "{remaining:#x}");
                }

                buf.write_char('}')
            }
        };

        Ok(())
    }
}

/// An enumerated value whose ordinal is outside of its name table.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct UnknownEnumValue {
    /// The raw value reported by the driver.
    pub ordinal: i32,
}

impl Display for UnknownEnumValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown enum value {}", self.ordinal)
    }
}

impl Error for UnknownEnumValue {}

/// Converts a record field into its [`Value`].
pub trait IntoValue {
    /// Returns the value of this field.
    fn to_value(&self) -> Value;
}

impl IntoValue for bool {
    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }
}

impl IntoValue for u32 {
    fn to_value(&self) -> Value {
        Value::Unsigned(*self as _)
    }
}

impl IntoValue for u64 {
    fn to_value(&self) -> Value {
        Value::Unsigned(*self)
    }
}

impl IntoValue for i32 {
    fn to_value(&self) -> Value {
        Value::Signed(*self as _)
    }
}

impl IntoValue for f32 {
    fn to_value(&self) -> Value {
        Value::Float(*self)
    }
}

impl IntoValue for String {
    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }
}

impl<T, const N: usize> IntoValue for [T; N]
where
    T: IntoValue,
{
    fn to_value(&self) -> Value {
        Value::Tuple(self.iter().map(IntoValue::to_value).collect())
    }
}

/// Converts a raw `ash` field into the type stored by a record.
pub trait FromVk<T> {
    /// Converts the raw value.
    fn from_vk(value: T) -> Self;
}

macro_rules! from_vk_identity {
    ($($ty:ty),*) => {
        $(
            impl FromVk<$ty> for $ty {
                fn from_vk(value: $ty) -> Self {
                    value
                }
            }
        )*
    };
}

from_vk_identity!(u32, u64, i32, f32, [u32; 2], [u32; 3], [f32; 2]);

// vk::Bool32 is a u32 alias, so booleans are converted through the field type instead
impl FromVk<vk::Bool32> for bool {
    fn from_vk(value: vk::Bool32) -> Self {
        value != vk::FALSE
    }
}

impl FromVk<usize> for u64 {
    fn from_vk(value: usize) -> Self {
        value as _
    }
}

impl FromVk<vk::SampleCountFlags> for SampleCounts {
    fn from_vk(value: vk::SampleCountFlags) -> Self {
        Self(value.as_raw())
    }
}

/// The set of sample counts supported for some kind of image or attachment.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct SampleCounts(pub u32);

impl SampleCounts {
    const NAMES: &'static [(u32, &'static str)] = &[
        (vk::SampleCountFlags::TYPE_1.as_raw(), "1"),
        (vk::SampleCountFlags::TYPE_2.as_raw(), "2"),
        (vk::SampleCountFlags::TYPE_4.as_raw(), "4"),
        (vk::SampleCountFlags::TYPE_8.as_raw(), "8"),
        (vk::SampleCountFlags::TYPE_16.as_raw(), "16"),
        (vk::SampleCountFlags::TYPE_32.as_raw(), "32"),
        (vk::SampleCountFlags::TYPE_64.as_raw(), "64"),
    ];
}

impl IntoValue for SampleCounts {
    fn to_value(&self) -> Value {
        Value::Flags {
            bits: self.0,
            names: Self::NAMES,
        }
    }
}
