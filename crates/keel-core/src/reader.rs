//! Positional access to a materialized row of values.
//!
//! Key construction only needs "the value at slot N"; this boundary keeps it
//! independent of whether the row came from storage or from a live entry.

use crate::{
    error::{ErrorOrigin, InternalError},
    value::{FieldValue, Value, ValueError},
};

///
/// ValueReader
///

pub trait ValueReader {
    /// Number of addressable slots.
    fn count(&self) -> usize;

    /// Borrow the value at `index`; out-of-range slots are a lookup failure.
    fn read(&self, index: usize) -> Result<&Value, InternalError>;

    fn is_null(&self, index: usize) -> Result<bool, InternalError> {
        self.read(index).map(Value::is_null)
    }
}

///
/// ValueReaderExt
///
/// Typed reads on top of any [`ValueReader`].
///

pub trait ValueReaderExt: ValueReader {
    /// Read the value at `index` coerced to `T`.
    fn read_value<T: FieldValue>(&self, index: usize) -> Result<T, InternalError> {
        let value = self.read(index)?;

        T::from_value(value).ok_or_else(|| {
            ValueError::mismatch(&T::runtime_type(), value)
                .at(ErrorOrigin::Reader, format_args!("slot {index}"))
        })
    }
}

impl<R: ValueReader + ?Sized> ValueReaderExt for R {}

///
/// RowValueReader
/// Reader over an owned row of values.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RowValueReader {
    values: Vec<Value>,
}

impl RowValueReader {
    #[must_use]
    pub const fn new(values: Vec<Value>) -> Self {
        Self { values }
    }

    #[must_use]
    pub fn into_values(self) -> Vec<Value> {
        self.values
    }
}

impl ValueReader for RowValueReader {
    fn count(&self) -> usize {
        self.values.len()
    }

    fn read(&self, index: usize) -> Result<&Value, InternalError> {
        self.values.get(index).ok_or_else(|| {
            InternalError::not_found(
                ErrorOrigin::Reader,
                format!(
                    "slot {index} is out of range for a row of {} values",
                    self.values.len()
                ),
            )
        })
    }
}

impl From<Vec<Value>> for RowValueReader {
    fn from(values: Vec<Value>) -> Self {
        Self::new(values)
    }
}

impl FromIterator<Value> for RowValueReader {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

///
/// TESTS
///
