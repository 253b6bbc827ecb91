//! Relational type mapping.
//!
//! Decides how a property's runtime type is stored: the store type name used
//! in DDL and the parameter type used when binding values.

mod mapper;


use crate::error::{ErrorClass, ErrorDetail, ErrorOrigin, InternalError};
use derive_more::Display;
use std::{
    borrow::Cow,
    fmt::{self, Display as FmtDisplay},
};
use thiserror::Error as ThisError;

// re-exports
pub use mapper::RelationalTypeMapper;

///
/// TypeMappingError
///

#[derive(Debug, ThisError)]
pub enum TypeMappingError {
    #[error("storage name is empty")]
    EmptyStorageName,

    #[error("property '{storage_name}' has a custom type with an empty name")]
    EmptyTypeName { storage_name: String },

    #[error("no type mapping for property '{storage_name}' of type '{type_name}'")]
    UnsupportedType {
        storage_name: String,
        type_name: String,
    },
}

impl From<TypeMappingError> for InternalError {
    fn from(err: TypeMappingError) -> Self {
        let class = match err {
            TypeMappingError::EmptyStorageName | TypeMappingError::EmptyTypeName { .. } => {
                ErrorClass::InvalidArgument
            }
            TypeMappingError::UnsupportedType { .. } => ErrorClass::Unsupported,
        };

        Self {
            class,
            origin: ErrorOrigin::Mapping,
            message: err.to_string(),
            detail: Some(ErrorDetail::Mapping(err)),
        }
    }
}

///
/// DbType
/// Parameter type used when binding a value to a command.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum DbType {
    AnsiString,
    Binary,
    Boolean,
    DateTime,
    DateTimeOffset,
    Decimal,
    Double,
    Int16,
    Int32,
    Int64,
    Single,
}

///
/// MappingFacet
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum MappingFacet {
    None,
    /// Fixed capacity in characters or bytes.
    Sized { size: u32 },
    Decimal { precision: u8, scale: u8 },
}

///
/// RelationalTypeMapping
///

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct RelationalTypeMapping {
    store_type: Cow<'static, str>,
    db_type: DbType,
    facet: MappingFacet,
}

impl RelationalTypeMapping {
    #[must_use]
    pub const fn new(store_type: &'static str, db_type: DbType) -> Self {
        Self {
            store_type: Cow::Borrowed(store_type),
            db_type,
            facet: MappingFacet::None,
        }
    }

    pub fn sized(store_type: impl Into<Cow<'static, str>>, db_type: DbType, size: u32) -> Self {
        Self {
            store_type: store_type.into(),
            db_type,
            facet: MappingFacet::Sized { size },
        }
    }

    #[must_use]
    pub fn decimal(precision: u8, scale: u8) -> Self {
        Self {
            store_type: Cow::Owned(format!("decimal({precision}, {scale})")),
            db_type: DbType::Decimal,
            facet: MappingFacet::Decimal { precision, scale },
        }
    }

    #[must_use]
    pub fn store_type(&self) -> &str {
        &self.store_type
    }

    #[must_use]
    pub const fn db_type(&self) -> DbType {
        self.db_type
    }

    #[must_use]
    pub const fn facet(&self) -> MappingFacet {
        self.facet
    }

    #[must_use]
    pub const fn size(&self) -> Option<u32> {
        match self.facet {
            MappingFacet::Sized { size } => Some(size),
            _ => None,
        }
    }

    #[must_use]
    pub const fn precision(&self) -> Option<u8> {
        match self.facet {
            MappingFacet::Decimal { precision, .. } => Some(precision),
            _ => None,
        }
    }

    #[must_use]
    pub const fn scale(&self) -> Option<u8> {
        match self.facet {
            MappingFacet::Decimal { scale, .. } => Some(scale),
            _ => None,
        }
    }
}

impl FmtDisplay for RelationalTypeMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.store_type, self.db_type)
    }
}
