//! Domain entities and value objects for docman.

pub mod entities;
pub mod value_objects;

pub use entities::*;
pub use value_objects::*;
