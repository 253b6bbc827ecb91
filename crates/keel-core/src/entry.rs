//! Tracked entity instances.
//!
//! A `StateEntry` owns the current value snapshot for one entity under a
//! unit of work. Key factories only ever read from it.

use crate::{
    error::{ErrorOrigin, InternalError},
    key::{EntityKey, EntityKeyFactory, KeyFactory},
    model::{EntityType, Property},
    reader::ValueReader,
    value::Value,
};
use derive_more::Display;
use std::sync::Arc;
use tracing::debug;

///
/// EntityState
///

#[derive(Clone, Copy, Debug, Default, Display, Eq, Hash, PartialEq)]
pub enum EntityState {
    /// Not tracked (never attached, or detached after deletion was accepted).
    #[default]
    Unknown,
    Unchanged,
    Added,
    Modified,
    Deleted,
}

impl EntityState {
    /// Whether key properties may still be assigned.
    #[must_use]
    pub const fn allows_key_changes(self) -> bool {
        matches!(self, Self::Unknown | Self::Added)
    }
}

///
/// StateEntry
///

#[derive(Clone, Debug)]
pub struct StateEntry {
    entity_type: Arc<EntityType>,
    values: Vec<Value>,
    modified: Vec<bool>,
    state: EntityState,
}

impl StateEntry {
    /// Start tracking an entity whose values are all `Null`.
    #[must_use]
    pub fn new(entity_type: Arc<EntityType>, state: EntityState) -> Self {
        let len = entity_type.property_count();

        Self {
            entity_type,
            values: vec![Value::Null; len],
            modified: vec![false; len],
            state,
        }
    }

    /// Start tracking an entity with a full value snapshot in property order.
    pub fn from_values(
        entity_type: Arc<EntityType>,
        values: Vec<Value>,
        state: EntityState,
    ) -> Result<Self, InternalError> {
        let expected = entity_type.property_count();
        if values.len() != expected {
            return Err(InternalError::invalid_argument(
                ErrorOrigin::Entry,
                format!(
                    "entity '{}' has {expected} properties, got {} values",
                    entity_type.name(),
                    values.len()
                ),
            ));
        }

        for property in entity_type.properties() {
            values[property.index()]
                .expect_instance_of(property.runtime_type())
                .map_err(|err| err.at(ErrorOrigin::Entry, qualified(&entity_type, property)))?;
        }

        Ok(Self {
            modified: vec![false; expected],
            entity_type,
            values,
            state,
        })
    }

    /// Track an entity materialized from a storage row; the entry starts `Unchanged`.
    pub fn from_reader(
        entity_type: Arc<EntityType>,
        reader: &dyn ValueReader,
    ) -> Result<Self, InternalError> {
        let values = entity_type
            .properties()
            .iter()
            .map(|property| reader.read(property.index()).cloned())
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_values(entity_type, values, EntityState::Unchanged)
    }

    #[must_use]
    pub const fn entity_type(&self) -> &Arc<EntityType> {
        &self.entity_type
    }

    #[must_use]
    pub const fn state(&self) -> EntityState {
        self.state
    }

    pub fn set_state(&mut self, state: EntityState) {
        if self.state != state {
            debug!(
                entity = self.entity_type.name(),
                from = %self.state,
                to = %state,
                "entity state changed"
            );
            self.state = state;
        }
    }

    /// Current value of `property`.
    pub fn property_value(&self, property: &Property) -> Result<&Value, InternalError> {
        self.slot(property)?;

        Ok(&self.values[property.index()])
    }

    pub fn property_value_by_name(&self, name: &str) -> Result<&Value, InternalError> {
        let property = self.entity_type.property(name).ok_or_else(|| {
            InternalError::not_found(
                ErrorOrigin::Entry,
                format!(
                    "entity '{}' has no property '{name}'",
                    self.entity_type.name()
                ),
            )
        })?;

        Ok(&self.values[property.index()])
    }

    /// Assign a property value, recording the change.
    pub fn set_property_value(
        &mut self,
        property: &Property,
        value: Value,
    ) -> Result<(), InternalError> {
        let index = self.slot(property)?;
        let entity_type = Arc::clone(&self.entity_type);
        let own = &entity_type.properties()[index];

        value
            .expect_instance_of(own.runtime_type())
            .map_err(|err| err.at(ErrorOrigin::Entry, qualified(&entity_type, own)))?;

        if self.values[index] == value {
            return Ok(());
        }
        if own.is_key() && !self.state.allows_key_changes() {
            return Err(InternalError::entry_invariant(format!(
                "key property {} cannot change while the entity is {}",
                qualified(&entity_type, own),
                self.state
            )));
        }

        self.values[index] = value;
        self.modified[index] = true;
        if self.state == EntityState::Unchanged {
            self.set_state(EntityState::Modified);
        }

        Ok(())
    }

    #[must_use]
    pub fn is_property_modified(&self, property: &Property) -> bool {
        self.slot(property).is_ok_and(|index| self.modified[index])
    }

    /// Properties changed since the entry was last accepted.
    #[must_use]
    pub fn modified_properties(&self) -> Vec<&Property> {
        self.entity_type
            .properties()
            .iter()
            .filter(|p| self.modified[p.index()])
            .collect()
    }

    /// Fold pending changes into the snapshot at the end of a unit of work.
    pub fn accept_changes(&mut self) {
        let next = match self.state {
            EntityState::Added | EntityState::Modified => EntityState::Unchanged,
            EntityState::Deleted => EntityState::Unknown,
            other => other,
        };

        self.modified.fill(false);
        self.set_state(next);
    }

    /// Primary key of this entry over its type's declared key.
    pub fn primary_key(&self) -> Result<EntityKey, InternalError> {
        let key = self.entity_type.key();
        let factory = KeyFactory::for_properties(&key)?;

        factory.create_from_entry(&self.entity_type, &key, self)
    }

    /// Resolve the slot for `property`, rejecting properties of other types.
    fn slot(&self, property: &Property) -> Result<usize, InternalError> {
        if self.entity_type.contains(property) {
            Ok(property.index())
        } else {
            Err(InternalError::not_found(
                ErrorOrigin::Entry,
                format!(
                    "property '{}' is not defined on entity '{}'",
                    property.name(),
                    self.entity_type.name()
                ),
            ))
        }
    }
}

/// Read-only row view of the entry's current values.
impl ValueReader for StateEntry {
    fn count(&self) -> usize {
        self.values.len()
    }

    fn read(&self, index: usize) -> Result<&Value, InternalError> {
        self.values.get(index).ok_or_else(|| {
            InternalError::not_found(
                ErrorOrigin::Entry,
                format!(
                    "slot {index} is out of range for entity '{}'",
                    self.entity_type.name()
                ),
            )
        })
    }
}

fn qualified(entity_type: &EntityType, property: &Property) -> String {
    format!("'{}.{}'", entity_type.name(), property.name())
}

///
/// TESTS
///
