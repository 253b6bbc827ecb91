//! Closed set of scalar runtime types understood by the keel runtime.
//!
//! Everything that needs to reason about "what kind of value lives in this
//! property" (value tagging, key factories, relational type mapping) routes
//! through [`RuntimeKind`] and its registry metadata.

#[macro_use]
mod macros;

use std::fmt::{self, Display};

///
/// RuntimeKind
///
/// Canonical scalar runtime type of an entity property.
///

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum RuntimeKind {
    Bool,
    Int16,
    Int32,
    Int64,
    Float32,
    Float64,
    Decimal,
    DateTime,
    DateTimeOffset,
    Text,
    Bytes,
}

impl RuntimeKind {
    /// Return the full metadata descriptor for one runtime kind.
    #[must_use]
    pub const fn metadata(self) -> RuntimeMetadata {
        runtime_kind_registry!(metadata_from_registry, self)
    }

    /// Short display name used in diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.metadata().name
    }

    #[must_use]
    pub const fn family(self) -> RuntimeFamily {
        self.metadata().family
    }

    /// Fixed in-memory payload width, or `None` for variable-length kinds.
    #[must_use]
    pub const fn byte_width(self) -> Option<u8> {
        self.metadata().byte_width
    }

    #[must_use]
    pub const fn is_variable_length(self) -> bool {
        self.byte_width().is_none()
    }
}

impl Display for RuntimeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

///
/// RuntimeMetadata
///
/// Registry metadata shared by the value and mapping layers.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RuntimeMetadata {
    pub name: &'static str,
    pub family: RuntimeFamily,
    pub byte_width: Option<u8>,
}

///
/// RuntimeFamily
///
/// Coarse grouping of runtime kinds, used for diagnostics only.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum RuntimeFamily {
    Boolean,
    Integer,
    Float,
    Decimal,
    Temporal,
    Textual,
    Binary,
}

impl Display for RuntimeFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Decimal => "decimal",
            Self::Temporal => "temporal",
            Self::Textual => "textual",
            Self::Binary => "binary",
        };
        write!(f, "{label}")
    }
}

/// Ordered list of all runtime kinds in registry order.
pub const ALL_RUNTIME_KINDS: [RuntimeKind; 11] = runtime_kind_registry!(all_kinds_from_registry);

///
/// TESTS
///
