use crate::{mapping::TypeMappingError, value::ValueError};
use keel_config::ConfigError;
use std::fmt;
use thiserror::Error as ThisError;

///
/// InternalError
///
/// Structured runtime error with a stable classification.
/// Every fallible operation in this crate returns it; module-level errors
/// convert into it and pick the class.
///

#[derive(Debug, ThisError)]
#[error("{message}")]
pub struct InternalError {
    pub class: ErrorClass,
    pub origin: ErrorOrigin,
    pub message: String,

    /// Optional structured error detail.
    /// The variant (if present) must correspond to `origin`.
    pub detail: Option<ErrorDetail>,
}

impl InternalError {
    pub fn new(class: ErrorClass, origin: ErrorOrigin, message: impl Into<String>) -> Self {
        Self {
            class,
            origin,
            message: message.into(),
            detail: None,
        }
    }

    /// Construct an error for a missing or empty required input.
    pub(crate) fn invalid_argument(origin: ErrorOrigin, message: impl Into<String>) -> Self {
        Self::new(ErrorClass::InvalidArgument, origin, message)
    }

    /// Construct a lookup failure.
    pub(crate) fn not_found(origin: ErrorOrigin, message: impl Into<String>) -> Self {
        Self::new(ErrorClass::NotFound, origin, message)
    }

    /// Construct an entry-origin invariant violation.
    pub(crate) fn entry_invariant(message: impl Into<String>) -> Self {
        Self::new(
            ErrorClass::InvariantViolation,
            ErrorOrigin::Entry,
            message.into(),
        )
    }

    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self.class, ErrorClass::InvalidArgument)
    }

    #[must_use]
    pub const fn is_unsupported_type(&self) -> bool {
        matches!(
            self.detail,
            Some(ErrorDetail::Mapping(TypeMappingError::UnsupportedType { .. }))
        )
    }

    #[must_use]
    pub const fn is_type_mismatch(&self) -> bool {
        matches!(self.class, ErrorClass::TypeMismatch)
    }

    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self.class, ErrorClass::NotFound)
    }

    #[must_use]
    pub fn display_with_class(&self) -> String {
        format!("{}:{}: {}", self.origin, self.class, self.message)
    }
}

///
/// ErrorDetail
///
/// Structured, origin-specific error detail carried by [`InternalError`].
///

#[derive(Debug, ThisError)]
pub enum ErrorDetail {
    #[error("{0}")]
    Mapping(TypeMappingError),

    #[error("{0}")]
    Value(ValueError),

    #[error("{0}")]
    Config(ConfigError),
}

impl From<ConfigError> for InternalError {
    fn from(err: ConfigError) -> Self {
        let class = match err {
            ConfigError::Io { .. } => ErrorClass::NotFound,
            ConfigError::Parse(_) | ConfigError::Invalid { .. } => ErrorClass::InvalidArgument,
        };

        Self {
            class,
            origin: ErrorOrigin::Config,
            message: err.to_string(),
            detail: Some(ErrorDetail::Config(err)),
        }
    }
}

///
/// ErrorClass
/// Error taxonomy for runtime classification.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorClass {
    /// A required input was missing or empty; always a caller bug.
    InvalidArgument,
    /// No mapping exists for a runtime type.
    Unsupported,
    /// A value could not be coerced to the expected runtime type.
    TypeMismatch,
    /// A property or positional slot could not be located.
    NotFound,
    InvariantViolation,
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::InvalidArgument => "invalid_argument",
            Self::Unsupported => "unsupported",
            Self::TypeMismatch => "type_mismatch",
            Self::NotFound => "not_found",
            Self::InvariantViolation => "invariant_violation",
        };
        write!(f, "{label}")
    }
}

///
/// ErrorOrigin
/// Origin taxonomy for runtime classification.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorOrigin {
    Model,
    Mapping,
    Key,
    Reader,
    Entry,
    Config,
}

impl fmt::Display for ErrorOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Model => "model",
            Self::Mapping => "mapping",
            Self::Key => "key",
            Self::Reader => "reader",
            Self::Entry => "entry",
            Self::Config => "config",
        };
        write!(f, "{label}")
    }
}
