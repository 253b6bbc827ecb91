//! Type-tagged property values.
//!
//! `Value` is the single currency between value sources (state entries, row
//! readers) and the key factories. Equality is variant-sensitive:
//! `Int32(7)` and `Int64(7)` are different values.

mod field;
mod float;
mod opaque;
mod tag;

#[cfg(test)]
mod tests;

use crate::{
    error::{ErrorClass, ErrorDetail, ErrorOrigin, InternalError},
    model::RuntimeType,
};
use keel_primitives::RuntimeKind;
use rust_decimal::Decimal;
use std::fmt::{self, Display};
use thiserror::Error as ThisError;
use time::{OffsetDateTime, PrimitiveDateTime};

// re-exports
pub use field::FieldValue;
pub use float::{Float32, Float64};
pub use opaque::OpaqueValue;
pub use tag::ValueTag;

///
/// ValueError
///

#[derive(Debug, ThisError)]
pub enum ValueError {
    #[error("expected {expected} value, found {found}")]
    TypeMismatch { expected: String, found: String },

    #[error("non-finite floating point values are not storable")]
    NonFinite,
}

impl ValueError {
    pub(crate) fn mismatch(expected: &RuntimeType, found: &Value) -> Self {
        Self::TypeMismatch {
            expected: expected.display_name().to_string(),
            found: found.describe(),
        }
    }

    /// Attach the origin that observed this failure.
    pub(crate) fn at(self, origin: ErrorOrigin, context: impl Display) -> InternalError {
        InternalError {
            class: ErrorClass::TypeMismatch,
            origin,
            message: format!("{context}: {self}"),
            detail: Some(ErrorDetail::Value(self)),
        }
    }
}

///
/// Value
///
/// Null  → the property holds no value (SQL NULL).
///

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Float32(Float32),
    Float64(Float64),
    Decimal(Decimal),
    DateTime(PrimitiveDateTime),
    DateTimeOffset(OffsetDateTime),
    Text(String),
    Bytes(Vec<u8>),
    /// Application value of a custom type, compared by identity.
    Opaque(OpaqueValue),
}

impl Value {
    #[must_use]
    pub fn opaque<T: std::any::Any + Send + Sync>(value: T) -> Self {
        Self::Opaque(OpaqueValue::new(value))
    }

    #[must_use]
    pub const fn tag(&self) -> ValueTag {
        tag::canonical_tag(self)
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Runtime type of the held value; `None` for `Null`.
    #[must_use]
    pub fn runtime_type(&self) -> Option<RuntimeType> {
        let kind = match self {
            Self::Null => return None,
            Self::Opaque(v) => return Some(v.runtime_type()),
            Self::Bool(_) => RuntimeKind::Bool,
            Self::Int16(_) => RuntimeKind::Int16,
            Self::Int32(_) => RuntimeKind::Int32,
            Self::Int64(_) => RuntimeKind::Int64,
            Self::Float32(_) => RuntimeKind::Float32,
            Self::Float64(_) => RuntimeKind::Float64,
            Self::Decimal(_) => RuntimeKind::Decimal,
            Self::DateTime(_) => RuntimeKind::DateTime,
            Self::DateTimeOffset(_) => RuntimeKind::DateTimeOffset,
            Self::Text(_) => RuntimeKind::Text,
            Self::Bytes(_) => RuntimeKind::Bytes,
        };

        Some(RuntimeType::Scalar(kind))
    }

    /// Whether this value may be stored in a property of `expected` type.
    /// `Null` is accepted everywhere.
    #[must_use]
    pub fn is_instance_of(&self, expected: &RuntimeType) -> bool {
        match (self, expected) {
            (Self::Null, _) => true,
            (Self::Opaque(v), RuntimeType::Custom(name)) => {
                let actual = v.type_name();

                // short names match by display name; qualified paths must agree
                if actual.contains("::") && name.contains("::") {
                    actual == name.as_ref()
                } else {
                    v.runtime_type().display_name() == expected.display_name()
                }
            }
            (_, RuntimeType::Scalar(_)) => self.runtime_type().as_ref() == Some(expected),
            _ => false,
        }
    }

    /// Require the value to be an instance of `expected`.
    pub fn expect_instance_of(&self, expected: &RuntimeType) -> Result<(), ValueError> {
        if self.is_instance_of(expected) {
            Ok(())
        } else {
            Err(ValueError::mismatch(expected, self))
        }
    }

    /// Short label for diagnostics (`Int32`, `Null`, or the custom type name).
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Opaque(v) => v.runtime_type().display_name().to_string(),
            _ => self.tag().label().to_string(),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int16(v) => write!(f, "{v}"),
            Self::Int32(v) => write!(f, "{v}"),
            Self::Int64(v) => write!(f, "{v}"),
            Self::Float32(v) => write!(f, "{v}"),
            Self::Float64(v) => write!(f, "{v}"),
            Self::Decimal(v) => write!(f, "{v}"),
            Self::DateTime(v) => write!(f, "{v}"),
            Self::DateTimeOffset(v) => write!(f, "{v}"),
            Self::Text(v) => write!(f, "{v:?}"),
            Self::Bytes(v) => {
                f.write_str("0x")?;
                for byte in v {
                    write!(f, "{byte:02x}")?;
                }
                Ok(())
            }
            Self::Opaque(v) => write!(f, "<{}>", v.runtime_type().display_name()),
        }
    }
}

macro_rules! value_from {
    ( $( $ty:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Self::$variant(v)
                }
            }
        )*
    };
}

value_from! {
    bool => Bool,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    Float32 => Float32,
    Float64 => Float64,
    Decimal => Decimal,
    PrimitiveDateTime => DateTime,
    OffsetDateTime => DateTimeOffset,
    String => Text,
    Vec<u8> => Bytes,
    OpaqueValue => Opaque,
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl TryFrom<f32> for Value {
    type Error = ValueError;

    fn try_from(v: f32) -> Result<Self, Self::Error> {
        Float32::try_from(v).map(Self::Float32)
    }
}

impl TryFrom<f64> for Value {
    type Error = ValueError;

    fn try_from(v: f64) -> Result<Self, Self::Error> {
        Float64::try_from(v).map(Self::Float64)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}
