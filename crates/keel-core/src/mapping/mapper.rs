use crate::{
    error::InternalError,
    mapping::{DbType, RelationalTypeMapping, TypeMappingError},
    model::{Property, RuntimeType},
};
use keel_config::TypeMapperConfig;
use keel_primitives::RuntimeKind;
use tracing::trace;

///
/// RelationalTypeMapper
///
/// Resolves the storage mapping for a property's runtime type.
/// All tables are built in the constructor and never change afterwards, so a
/// mapper can be shared freely across threads.
///

#[derive(Clone, Debug)]
pub struct RelationalTypeMapper {
    // Invariant mappings: one store type per runtime kind, whatever the
    // property's role. Kinds whose mapping depends on usage are resolved
    // in `type_mapping` instead.
    invariant: [(RuntimeKind, RelationalTypeMapping); 8],
    decimal: RelationalTypeMapping,
    key_string: RelationalTypeMapping,
    non_key_string: RelationalTypeMapping,
    row_version: RelationalTypeMapping,
}

impl RelationalTypeMapper {
    #[must_use]
    pub fn new() -> Self {
        Self::build(&TypeMapperConfig::default())
    }

    /// Build a mapper whose sized and decimal facets come from `config`.
    pub fn with_config(config: &TypeMapperConfig) -> Result<Self, InternalError> {
        config.validate()?;

        Ok(Self::build(config))
    }

    fn build(config: &TypeMapperConfig) -> Self {
        Self {
            invariant: [
                (
                    RuntimeKind::Int32,
                    RelationalTypeMapping::new("integer", DbType::Int32),
                ),
                (
                    RuntimeKind::DateTime,
                    RelationalTypeMapping::new("timestamp", DbType::DateTime),
                ),
                (
                    RuntimeKind::Bool,
                    RelationalTypeMapping::new("boolean", DbType::Boolean),
                ),
                (
                    RuntimeKind::Float64,
                    RelationalTypeMapping::new("double precision", DbType::Double),
                ),
                (
                    RuntimeKind::Int16,
                    RelationalTypeMapping::new("smallint", DbType::Int16),
                ),
                (
                    RuntimeKind::Int64,
                    RelationalTypeMapping::new("bigint", DbType::Int64),
                ),
                (
                    RuntimeKind::Float32,
                    RelationalTypeMapping::new("real", DbType::Single),
                ),
                (
                    RuntimeKind::DateTimeOffset,
                    RelationalTypeMapping::new("timestamp with time zone", DbType::DateTimeOffset),
                ),
            ],
            decimal: RelationalTypeMapping::decimal(
                config.decimal_precision,
                config.decimal_scale,
            ),
            key_string: varchar(config.key_string_capacity),
            non_key_string: varchar(config.non_key_string_capacity),
            row_version: RelationalTypeMapping::sized(
                "rowversion",
                DbType::Binary,
                config.row_version_size,
            ),
        }
    }

    /// Resolve the mapping for one property.
    ///
    /// `specified_type` is the store type declared in the model, if any. It
    /// is accepted for API stability and does not take part in resolution.
    pub fn type_mapping(
        &self,
        specified_type: Option<&str>,
        storage_name: &str,
        property_type: &RuntimeType,
        is_key: bool,
        is_concurrency_token: bool,
    ) -> Result<&RelationalTypeMapping, InternalError> {
        let _ = specified_type;

        if storage_name.trim().is_empty() {
            return Err(TypeMappingError::EmptyStorageName.into());
        }
        if property_type.name().trim().is_empty() {
            return Err(TypeMappingError::EmptyTypeName {
                storage_name: storage_name.to_string(),
            }
            .into());
        }

        let mapping = property_type
            .kind()
            .and_then(|kind| self.resolve(kind, is_key, is_concurrency_token))
            .ok_or_else(|| TypeMappingError::UnsupportedType {
                storage_name: storage_name.to_string(),
                type_name: property_type.display_name().to_string(),
            })?;

        trace!(
            storage_name,
            type_name = property_type.display_name(),
            store_type = mapping.store_type(),
            "type mapping resolved"
        );

        Ok(mapping)
    }

    /// Resolve the mapping for a model property from its own name and flags.
    pub fn mapping_for_property(
        &self,
        property: &Property,
    ) -> Result<&RelationalTypeMapping, InternalError> {
        self.type_mapping(
            None,
            property.name(),
            property.runtime_type(),
            property.is_key(),
            property.is_concurrency_token(),
        )
    }

    fn resolve(
        &self,
        kind: RuntimeKind,
        is_key: bool,
        is_concurrency_token: bool,
    ) -> Option<&RelationalTypeMapping> {
        if let Some((_, mapping)) = self.invariant.iter().find(|(k, _)| *k == kind) {
            return Some(mapping);
        }

        match kind {
            // configured per-property precision/scale is not consulted
            RuntimeKind::Decimal => Some(&self.decimal),
            RuntimeKind::Text if is_key => Some(&self.key_string),
            RuntimeKind::Text => Some(&self.non_key_string),
            RuntimeKind::Bytes if is_concurrency_token => Some(&self.row_version),
            _ => None,
        }
    }
}

impl Default for RelationalTypeMapper {
    fn default() -> Self {
        Self::new()
    }
}

fn varchar(size: u32) -> RelationalTypeMapping {
    RelationalTypeMapping::sized(format!("varchar({size})"), DbType::AnsiString, size)
}
