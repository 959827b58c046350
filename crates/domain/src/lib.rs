//! Domain layer for Skycast
//!
//! Contains the core weather-lookup vocabulary: value objects, entities,
//! and cache key derivation. This layer has no I/O dependencies.

pub mod entities;
pub mod value_objects;

pub use entities::*;
pub use value_objects::*;
