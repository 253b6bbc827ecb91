use crate::{
    entry::StateEntry,
    error::{ErrorOrigin, InternalError},
    key::{CompositeEntityKey, EntityKey, KeyError, SimpleEntityKey},
    model::{EntityType, Property, RuntimeType},
    reader::ValueReader,
    value::{FieldValue, Value},
};
use std::sync::Arc;
use tracing::{trace, warn};

///
/// EntityKeyFactory
///
/// Builds an [`EntityKey`] for `entity_type` from one value per requested
/// property, read in the order given. Both sources must yield equal keys for
/// equal values. Factories do not check that `properties` belong to
/// `entity_type`; the source reports any mismatch.
///

pub trait EntityKeyFactory {
    fn create_from_entry(
        &self,
        entity_type: &Arc<EntityType>,
        properties: &[&Property],
        entry: &StateEntry,
    ) -> Result<EntityKey, InternalError>;

    fn create_from_reader(
        &self,
        entity_type: &Arc<EntityType>,
        properties: &[&Property],
        reader: &dyn ValueReader,
    ) -> Result<EntityKey, InternalError>;
}

///
/// KeyFactory
/// Closed set of key factory variants.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum KeyFactory {
    Simple(SimpleEntityKeyFactory),
    Composite(CompositeEntityKeyFactory),
}

impl KeyFactory {
    /// Pick the factory for a key over `properties`: one property gets a
    /// simple key of that property's type, several get a composite key.
    pub fn for_properties(properties: &[&Property]) -> Result<Self, InternalError> {
        match properties {
            [] => Err(KeyError::EmptyProperties.into()),
            [single] => Ok(Self::Simple(SimpleEntityKeyFactory::new(
                single.runtime_type().clone(),
            ))),
            _ => Ok(Self::Composite(CompositeEntityKeyFactory)),
        }
    }
}

impl EntityKeyFactory for KeyFactory {
    fn create_from_entry(
        &self,
        entity_type: &Arc<EntityType>,
        properties: &[&Property],
        entry: &StateEntry,
    ) -> Result<EntityKey, InternalError> {
        match self {
            Self::Simple(factory) => factory.create_from_entry(entity_type, properties, entry),
            Self::Composite(factory) => factory.create_from_entry(entity_type, properties, entry),
        }
    }

    fn create_from_reader(
        &self,
        entity_type: &Arc<EntityType>,
        properties: &[&Property],
        reader: &dyn ValueReader,
    ) -> Result<EntityKey, InternalError> {
        match self {
            Self::Simple(factory) => factory.create_from_reader(entity_type, properties, reader),
            Self::Composite(factory) => {
                factory.create_from_reader(entity_type, properties, reader)
            }
        }
    }
}

impl From<SimpleEntityKeyFactory> for KeyFactory {
    fn from(factory: SimpleEntityKeyFactory) -> Self {
        Self::Simple(factory)
    }
}

impl From<CompositeEntityKeyFactory> for KeyFactory {
    fn from(factory: CompositeEntityKeyFactory) -> Self {
        Self::Composite(factory)
    }
}

///
/// SimpleEntityKeyFactory
///
/// Single-value keys of one runtime type. Only the first requested property
/// is read; any further properties are ignored.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SimpleEntityKeyFactory {
    key_type: RuntimeType,
}

impl SimpleEntityKeyFactory {
    #[must_use]
    pub const fn new(key_type: RuntimeType) -> Self {
        Self { key_type }
    }

    /// Factory for keys whose value is a `K`.
    #[must_use]
    pub fn of<K: FieldValue>() -> Self {
        Self::new(K::runtime_type())
    }

    #[must_use]
    pub const fn key_type(&self) -> &RuntimeType {
        &self.key_type
    }

    fn key_property<'a>(
        entity_type: &EntityType,
        properties: &[&'a Property],
    ) -> Result<&'a Property, InternalError> {
        let (&first, rest) = properties
            .split_first()
            .ok_or(KeyError::EmptyProperties)?;

        if !rest.is_empty() {
            warn!(
                entity = entity_type.name(),
                property = first.name(),
                ignored = rest.len(),
                "simple key factory reads only the first property"
            );
        }

        Ok(first)
    }

    fn bind(
        &self,
        entity_type: &Arc<EntityType>,
        property: &Property,
        value: &Value,
        origin: ErrorOrigin,
    ) -> Result<EntityKey, InternalError> {
        let value = require_non_null(entity_type, property, value)?;
        value.expect_instance_of(&self.key_type).map_err(|err| {
            err.at(
                origin,
                format_args!("key property '{}.{}'", entity_type.name(), property.name()),
            )
        })?;

        let key = EntityKey::Simple(SimpleEntityKey::new(Arc::clone(entity_type), value.clone()));
        trace!(entity = entity_type.name(), key = %key, "simple entity key created");

        Ok(key)
    }
}

impl EntityKeyFactory for SimpleEntityKeyFactory {
    fn create_from_entry(
        &self,
        entity_type: &Arc<EntityType>,
        properties: &[&Property],
        entry: &StateEntry,
    ) -> Result<EntityKey, InternalError> {
        let property = Self::key_property(entity_type, properties)?;
        let value = entry.property_value(property)?;

        self.bind(entity_type, property, value, ErrorOrigin::Entry)
    }

    fn create_from_reader(
        &self,
        entity_type: &Arc<EntityType>,
        properties: &[&Property],
        reader: &dyn ValueReader,
    ) -> Result<EntityKey, InternalError> {
        let property = Self::key_property(entity_type, properties)?;
        let value = reader.read(property.index())?;

        self.bind(entity_type, property, value, ErrorOrigin::Reader)
    }
}

///
/// CompositeEntityKeyFactory
///
/// Multi-value keys; the value order is the order of the requested
/// properties, which need not match the entity's declared key.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct CompositeEntityKeyFactory;

impl CompositeEntityKeyFactory {
    fn build<'v>(
        entity_type: &Arc<EntityType>,
        properties: &[&Property],
        mut read: impl FnMut(&Property) -> Result<&'v Value, InternalError>,
    ) -> Result<EntityKey, InternalError> {
        if properties.is_empty() {
            return Err(KeyError::EmptyProperties.into());
        }

        let values = properties
            .iter()
            .map(|&property| {
                let value = read(property)?;
                require_non_null(entity_type, property, value).cloned()
            })
            .collect::<Result<Vec<_>, _>>()?;

        let key = EntityKey::Composite(CompositeEntityKey::new(Arc::clone(entity_type), values));
        trace!(
            entity = entity_type.name(),
            arity = properties.len(),
            key = %key,
            "composite entity key created"
        );

        Ok(key)
    }
}

impl EntityKeyFactory for CompositeEntityKeyFactory {
    fn create_from_entry(
        &self,
        entity_type: &Arc<EntityType>,
        properties: &[&Property],
        entry: &StateEntry,
    ) -> Result<EntityKey, InternalError> {
        Self::build(entity_type, properties, |property| {
            entry.property_value(property)
        })
    }

    fn create_from_reader(
        &self,
        entity_type: &Arc<EntityType>,
        properties: &[&Property],
        reader: &dyn ValueReader,
    ) -> Result<EntityKey, InternalError> {
        Self::build(entity_type, properties, |property| {
            reader.read(property.index())
        })
    }
}

// Every key component must hold a value.
fn require_non_null<'v>(
    entity_type: &EntityType,
    property: &Property,
    value: &'v Value,
) -> Result<&'v Value, InternalError> {
    if value.is_null() {
        return Err(KeyError::NullKeyValue {
            entity: entity_type.name().to_string(),
            property: property.name().to_string(),
        }
        .into());
    }

    Ok(value)
}
