//! Runtime model metadata.
//!
//! Entity types and their properties are produced once by a model-building
//! layer and then shared read-only by entries, key factories and the type
//! mapper. Nothing in this module is mutated after `build()`.

mod entity;
mod property;
mod runtime;

#[cfg(test)]
mod tests;

pub use entity::{EntityType, EntityTypeBuilder, ModelError};
pub use property::Property;
pub use runtime::RuntimeType;
