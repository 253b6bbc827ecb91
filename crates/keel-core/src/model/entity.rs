use crate::{
    error::{ErrorClass, ErrorOrigin, InternalError},
    model::{Property, RuntimeType},
};
use std::{collections::HashSet, sync::Arc};
use thiserror::Error as ThisError;

///
/// ModelError
///

#[derive(Debug, ThisError)]
pub enum ModelError {
    #[error("entity name is empty")]
    EmptyEntityName,

    #[error("entity '{entity}' declares a property with an empty name")]
    EmptyPropertyName { entity: String },

    #[error("property '{entity}.{property}' has a custom type with an empty name")]
    EmptyTypeName { entity: String, property: String },

    #[error("entity '{entity}' declares property '{property}' more than once")]
    DuplicateProperty { entity: String, property: String },

    #[error("entity '{entity}' declares no key")]
    MissingKey { entity: String },

    #[error("key of '{entity}' names unknown property '{property}'")]
    UnknownKeyProperty { entity: String, property: String },

    #[error("key of '{entity}' names property '{property}' more than once")]
    DuplicateKeyProperty { entity: String, property: String },
}

impl From<ModelError> for InternalError {
    fn from(err: ModelError) -> Self {
        Self::new(
            ErrorClass::InvalidArgument,
            ErrorOrigin::Model,
            err.to_string(),
        )
    }
}

///
/// EntityType
///
/// Read-only metadata for one entity kind. Built once through
/// [`EntityTypeBuilder`] and shared behind an `Arc`.
///

#[derive(Debug, Eq, PartialEq)]
pub struct EntityType {
    name: String,
    properties: Vec<Property>,
    /// Positions of the key properties, in declared key order.
    key: Vec<usize>,
}

impl EntityType {
    pub fn builder(name: impl Into<String>) -> EntityTypeBuilder {
        EntityTypeBuilder {
            name: name.into(),
            properties: Vec::new(),
            key: Vec::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All properties, ordered by index.
    #[must_use]
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    #[must_use]
    pub const fn property_count(&self) -> usize {
        self.properties.len()
    }

    /// Key properties in declared key order.
    #[must_use]
    pub fn key(&self) -> Vec<&Property> {
        self.key.iter().map(|&i| &self.properties[i]).collect()
    }

    #[must_use]
    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.name == name)
    }

    #[must_use]
    pub fn property_at(&self, index: usize) -> Option<&Property> {
        self.properties.get(index)
    }

    /// Whether `property` is one of this type's properties. Name, slot, type
    /// and flags must all match.
    #[must_use]
    pub fn contains(&self, property: &Property) -> bool {
        self.property_at(property.index)
            .is_some_and(|own| own == property)
    }
}

///
/// EntityTypeBuilder
///

#[derive(Debug)]
pub struct EntityTypeBuilder {
    name: String,
    properties: Vec<(String, RuntimeType, bool)>,
    key: Vec<String>,
}

impl EntityTypeBuilder {
    /// Append a property; its index is its declaration position.
    #[must_use]
    pub fn property(mut self, name: impl Into<String>, runtime_type: RuntimeType) -> Self {
        self.properties.push((name.into(), runtime_type, false));
        self
    }

    /// Append a property used for optimistic concurrency checks.
    #[must_use]
    pub fn concurrency_token(mut self, name: impl Into<String>, runtime_type: RuntimeType) -> Self {
        self.properties.push((name.into(), runtime_type, true));
        self
    }

    /// Declare the key; order is significant.
    #[must_use]
    pub fn key<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.key = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn build(self) -> Result<Arc<EntityType>, InternalError> {
        let entity = self.name.trim().to_string();
        if entity.is_empty() {
            return Err(ModelError::EmptyEntityName.into());
        }

        // Phase 1: validate property declarations.
        let mut seen = HashSet::new();
        for (name, runtime_type, _) in &self.properties {
            if name.trim().is_empty() {
                return Err(ModelError::EmptyPropertyName { entity }.into());
            }
            if runtime_type.is_custom() && runtime_type.name().trim().is_empty() {
                return Err(ModelError::EmptyTypeName {
                    entity,
                    property: name.clone(),
                }
                .into());
            }
            if !seen.insert(name.as_str()) {
                return Err(ModelError::DuplicateProperty {
                    entity,
                    property: name.clone(),
                }
                .into());
            }
        }

        // Phase 2: resolve the key to property positions.
        if self.key.is_empty() {
            return Err(ModelError::MissingKey { entity }.into());
        }

        let mut key = Vec::with_capacity(self.key.len());
        for key_name in &self.key {
            let Some(index) = self.properties.iter().position(|(n, _, _)| n == key_name) else {
                return Err(ModelError::UnknownKeyProperty {
                    entity,
                    property: key_name.clone(),
                }
                .into());
            };
            if key.contains(&index) {
                return Err(ModelError::DuplicateKeyProperty {
                    entity,
                    property: key_name.clone(),
                }
                .into());
            }
            key.push(index);
        }

        // Phase 3: materialize indexed property metadata.
        let properties = self
            .properties
            .into_iter()
            .enumerate()
            .map(|(index, (name, runtime_type, is_concurrency_token))| Property {
                name,
                runtime_type,
                index,
                is_key: key.contains(&index),
                is_concurrency_token,
            })
            .collect();

        Ok(Arc::new(EntityType {
            name: entity,
            properties,
            key,
        }))
    }
}
