//! Entity identity keys.
//!
//! An `EntityKey` is a transient value derived from an entity's property
//! values. It is the map key of any identity map built on top of this crate,
//! so `Eq` and `Hash` must agree and never change for a given instance.
//!
//! Invariants:
//! - A key always belongs to exactly one entity type.
//! - Two keys are equal iff they have the same entity type name, the same
//!   variant, and element-wise equal values in the same order.
//! - Composite keys keep the order the caller supplied the properties in.

mod factory;


use crate::{
    error::{ErrorClass, ErrorOrigin, InternalError},
    model::EntityType,
    value::Value,
};
use std::{
    fmt::{self, Display},
    hash::{Hash, Hasher},
    slice,
    sync::Arc,
};
use thiserror::Error as ThisError;

// re-exports
pub use factory::{CompositeEntityKeyFactory, EntityKeyFactory, KeyFactory, SimpleEntityKeyFactory};

///
/// KeyError
///
/// Errors raised while binding property values into a key.
///

#[derive(Debug, ThisError)]
pub enum KeyError {
    #[error("key requires at least one property")]
    EmptyProperties,

    #[error("key property '{entity}.{property}' is null")]
    NullKeyValue { entity: String, property: String },
}

impl From<KeyError> for InternalError {
    fn from(err: KeyError) -> Self {
        Self::new(ErrorClass::InvalidArgument, ErrorOrigin::Key, err.to_string())
    }
}

///
/// EntityKey
///

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum EntityKey {
    Simple(SimpleEntityKey),
    Composite(CompositeEntityKey),
}

impl EntityKey {
    #[must_use]
    pub const fn entity_type(&self) -> &Arc<EntityType> {
        match self {
            Self::Simple(key) => &key.entity_type,
            Self::Composite(key) => &key.entity_type,
        }
    }

    /// Key values in key order; a simple key yields one value.
    #[must_use]
    pub fn values(&self) -> &[Value] {
        match self {
            Self::Simple(key) => slice::from_ref(&key.value),
            Self::Composite(key) => &key.values,
        }
    }

    #[must_use]
    pub const fn is_composite(&self) -> bool {
        matches!(self, Self::Composite(_))
    }

    #[must_use]
    pub const fn as_simple(&self) -> Option<&SimpleEntityKey> {
        match self {
            Self::Simple(key) => Some(key),
            Self::Composite(_) => None,
        }
    }

    #[must_use]
    pub const fn as_composite(&self) -> Option<&CompositeEntityKey> {
        match self {
            Self::Composite(key) => Some(key),
            Self::Simple(_) => None,
        }
    }
}

impl Display for EntityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.entity_type().name())?;
        for (i, value) in self.values().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str(")")
    }
}

///
/// SimpleEntityKey
/// Key over a single property value.
///

#[derive(Clone)]
pub struct SimpleEntityKey {
    entity_type: Arc<EntityType>,
    value: Value,
}

impl SimpleEntityKey {
    #[must_use]
    pub const fn new(entity_type: Arc<EntityType>, value: Value) -> Self {
        Self { entity_type, value }
    }

    #[must_use]
    pub const fn entity_type(&self) -> &Arc<EntityType> {
        &self.entity_type
    }

    #[must_use]
    pub const fn value(&self) -> &Value {
        &self.value
    }
}

impl Eq for SimpleEntityKey {}

impl PartialEq for SimpleEntityKey {
    fn eq(&self, other: &Self) -> bool {
        self.entity_type.name() == other.entity_type.name() && self.value == other.value
    }
}

impl Hash for SimpleEntityKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.entity_type.name().hash(state);
        self.value.hash(state);
    }
}

impl fmt::Debug for SimpleEntityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimpleEntityKey")
            .field("entity", &self.entity_type.name())
            .field("value", &self.value)
            .finish()
    }
}

///
/// CompositeEntityKey
/// Key over an ordered sequence of property values.
///

#[derive(Clone)]
pub struct CompositeEntityKey {
    entity_type: Arc<EntityType>,
    values: Box<[Value]>,
}

impl CompositeEntityKey {
    #[must_use]
    pub fn new(entity_type: Arc<EntityType>, values: Vec<Value>) -> Self {
        Self {
            entity_type,
            values: values.into_boxed_slice(),
        }
    }

    #[must_use]
    pub const fn entity_type(&self) -> &Arc<EntityType> {
        &self.entity_type
    }

    #[must_use]
    pub fn values(&self) -> &[Value] {
        &self.values
    }
}

impl Eq for CompositeEntityKey {}

impl PartialEq for CompositeEntityKey {
    fn eq(&self, other: &Self) -> bool {
        self.entity_type.name() == other.entity_type.name() && self.values == other.values
    }
}

impl Hash for CompositeEntityKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.entity_type.name().hash(state);
        self.values.hash(state);
    }
}

impl fmt::Debug for CompositeEntityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeEntityKey")
            .field("entity", &self.entity_type.name())
            .field("values", &self.values)
            .finish()
    }
}
