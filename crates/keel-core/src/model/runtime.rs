use keel_primitives::RuntimeKind;
use std::{
    borrow::Cow,
    fmt::{self, Display},
};

///
/// RuntimeType
///
/// Runtime value type of a property: one of the scalar kinds, or a named
/// application type the runtime treats as opaque.
///

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum RuntimeType {
    Scalar(RuntimeKind),
    Custom(Cow<'static, str>),
}

impl RuntimeType {
    pub const BOOL: Self = Self::Scalar(RuntimeKind::Bool);
    pub const INT16: Self = Self::Scalar(RuntimeKind::Int16);
    pub const INT32: Self = Self::Scalar(RuntimeKind::Int32);
    pub const INT64: Self = Self::Scalar(RuntimeKind::Int64);
    pub const FLOAT32: Self = Self::Scalar(RuntimeKind::Float32);
    pub const FLOAT64: Self = Self::Scalar(RuntimeKind::Float64);
    pub const DECIMAL: Self = Self::Scalar(RuntimeKind::Decimal);
    pub const DATE_TIME: Self = Self::Scalar(RuntimeKind::DateTime);
    pub const DATE_TIME_OFFSET: Self = Self::Scalar(RuntimeKind::DateTimeOffset);
    pub const TEXT: Self = Self::Scalar(RuntimeKind::Text);
    pub const BYTES: Self = Self::Scalar(RuntimeKind::Bytes);

    /// Named application type.
    pub fn custom(name: impl Into<Cow<'static, str>>) -> Self {
        Self::Custom(name.into())
    }

    /// Application type named after the Rust type `T`.
    #[must_use]
    pub fn custom_of<T: ?Sized + 'static>() -> Self {
        Self::Custom(Cow::Borrowed(std::any::type_name::<T>()))
    }

    #[must_use]
    pub const fn kind(&self) -> Option<RuntimeKind> {
        match self {
            Self::Scalar(kind) => Some(*kind),
            Self::Custom(_) => None,
        }
    }

    #[must_use]
    pub const fn is_custom(&self) -> bool {
        matches!(self, Self::Custom(_))
    }

    /// Fully qualified name (the registry name for scalar kinds).
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Scalar(kind) => kind.name(),
            Self::Custom(name) => name.as_ref(),
        }
    }

    /// Short name for diagnostics: the last path segment, generics dropped.
    #[must_use]
    pub fn display_name(&self) -> &str {
        let name = self.name();
        let base = name.split('<').next().unwrap_or(name);

        base.rsplit("::").next().unwrap_or(base)
    }
}

impl Display for RuntimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl From<RuntimeKind> for RuntimeType {
    fn from(kind: RuntimeKind) -> Self {
        Self::Scalar(kind)
    }
}
