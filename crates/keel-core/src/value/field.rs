use crate::{
    model::RuntimeType,
    value::{Float32, Float64, Value},
};
use rust_decimal::Decimal;
use time::{OffsetDateTime, PrimitiveDateTime};

///
/// FieldValue
///
/// Conversion boundary between Rust types and [`Value`].
/// `from_value` is strict: no widening between variants, and `Null` never
/// converts.
///

pub trait FieldValue: Sized {
    fn runtime_type() -> RuntimeType;

    fn to_value(&self) -> Value;

    #[must_use]
    fn from_value(value: &Value) -> Option<Self>;
}

macro_rules! impl_field_value {
    ( $( $ty:ty => $variant:ident as $runtime:ident ),* $(,)? ) => {
        $(
            impl FieldValue for $ty {
                fn runtime_type() -> RuntimeType {
                    RuntimeType::$runtime
                }

                fn to_value(&self) -> Value {
                    Value::$variant(self.clone())
                }

                fn from_value(value: &Value) -> Option<Self> {
                    match value {
                        Value::$variant(v) => Some(v.clone()),
                        _ => None,
                    }
                }
            }
        )*
    };
}

impl_field_value! {
    bool => Bool as BOOL,
    i16 => Int16 as INT16,
    i32 => Int32 as INT32,
    i64 => Int64 as INT64,
    Float32 => Float32 as FLOAT32,
    Float64 => Float64 as FLOAT64,
    Decimal => Decimal as DECIMAL,
    PrimitiveDateTime => DateTime as DATE_TIME,
    OffsetDateTime => DateTimeOffset as DATE_TIME_OFFSET,
    String => Text as TEXT,
    Vec<u8> => Bytes as BYTES,
}

impl FieldValue for f32 {
    fn runtime_type() -> RuntimeType {
        RuntimeType::FLOAT32
    }

    /// Non-finite values become `Null`; use `Value::try_from` to reject them.
    fn to_value(&self) -> Value {
        Float32::try_new(*self).map_or(Value::Null, Value::Float32)
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Float32(v) => Some(v.get()),
            _ => None,
        }
    }
}

impl FieldValue for f64 {
    fn runtime_type() -> RuntimeType {
        RuntimeType::FLOAT64
    }

    /// Non-finite values become `Null`; use `Value::try_from` to reject them.
    fn to_value(&self) -> Value {
        Float64::try_new(*self).map_or(Value::Null, Value::Float64)
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Float64(v) => Some(v.get()),
            _ => None,
        }
    }
}
