use crate::model::RuntimeType;
use std::{
    any::Any,
    fmt,
    hash::{Hash, Hasher},
    sync::Arc,
};

///
/// OpaqueValue
///
/// Shared handle to an application value the runtime cannot inspect.
/// Equality and hashing follow reference identity: two handles are equal
/// only when they point at the same allocation.
///

#[derive(Clone)]
pub struct OpaqueValue {
    type_name: &'static str,
    inner: Arc<dyn Any + Send + Sync>,
}

impl OpaqueValue {
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self::from_arc(Arc::new(value))
    }

    #[must_use]
    pub fn from_arc<T: Any + Send + Sync>(value: Arc<T>) -> Self {
        Self {
            type_name: std::any::type_name::<T>(),
            inner: value,
        }
    }

    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }

    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    #[must_use]
    pub fn runtime_type(&self) -> RuntimeType {
        RuntimeType::custom(self.type_name)
    }

    fn addr(&self) -> usize {
        Arc::as_ptr(&self.inner).cast::<()>().addr()
    }
}

impl Eq for OpaqueValue {}

impl PartialEq for OpaqueValue {
    fn eq(&self, other: &Self) -> bool {
        self.addr() == other.addr()
    }
}

impl Hash for OpaqueValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.addr().hash(state);
    }
}

impl fmt::Debug for OpaqueValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OpaqueValue({}@{:#x})", self.type_name, self.addr())
    }
}
