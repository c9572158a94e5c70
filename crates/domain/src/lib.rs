//! Domain layer for MapLauncher
//!
//! Contains the value objects shared by the launcher and its front ends:
//! coordinates, directions endpoints, map app identifiers and directions modes.
//! This layer performs no I/O and knows nothing about URL schemes.

pub mod errors;
pub mod value_objects;

pub use errors::DomainError;
pub use value_objects::*;
