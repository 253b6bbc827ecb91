use crate::value::Value;

///
/// ValueTag
///
/// Stable value-variant tag used for diagnostics and key rendering.
///

#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ValueTag {
    Null = 0,
    Bool = 1,
    Int16 = 2,
    Int32 = 3,
    Int64 = 4,
    Float32 = 5,
    Float64 = 6,
    Decimal = 7,
    DateTime = 8,
    DateTimeOffset = 9,
    Text = 10,
    Bytes = 11,
    Opaque = 12,
}

impl ValueTag {
    #[must_use]
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Stable human-readable value kind label for diagnostics.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Null => "Null",
            Self::Bool => "Bool",
            Self::Int16 => "Int16",
            Self::Int32 => "Int32",
            Self::Int64 => "Int64",
            Self::Float32 => "Float32",
            Self::Float64 => "Float64",
            Self::Decimal => "Decimal",
            Self::DateTime => "DateTime",
            Self::DateTimeOffset => "DateTimeOffset",
            Self::Text => "Text",
            Self::Bytes => "Bytes",
            Self::Opaque => "Opaque",
        }
    }
}

#[must_use]
pub(super) const fn canonical_tag(value: &Value) -> ValueTag {
    match value {
        Value::Null => ValueTag::Null,
        Value::Bool(_) => ValueTag::Bool,
        Value::Int16(_) => ValueTag::Int16,
        Value::Int32(_) => ValueTag::Int32,
        Value::Int64(_) => ValueTag::Int64,
        Value::Float32(_) => ValueTag::Float32,
        Value::Float64(_) => ValueTag::Float64,
        Value::Decimal(_) => ValueTag::Decimal,
        Value::DateTime(_) => ValueTag::DateTime,
        Value::DateTimeOffset(_) => ValueTag::DateTimeOffset,
        Value::Text(_) => ValueTag::Text,
        Value::Bytes(_) => ValueTag::Bytes,
        Value::Opaque(_) => ValueTag::Opaque,
    }
}
