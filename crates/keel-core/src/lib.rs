//! Core runtime for Keel: entity metadata, property values, identity keys,
//! state entries, and the relational type mapper.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod entry;
pub mod error;
pub mod key;
pub mod mapping;
pub mod model;
pub mod reader;
pub mod value;

// test
#[cfg(test)]
pub(crate) mod test_fixtures;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, readers, or mapper internals are re-exported here.
///

pub mod prelude {
    pub use crate::{
        entry::{EntityState, StateEntry},
        key::{EntityKey, EntityKeyFactory, KeyFactory},
        model::{EntityType, Property, RuntimeType},
        value::Value,
    };
}
