//! # Docman Core
//!
//! Core types and error definitions for docman.
//! This crate provides the domain model and the unified error type shared
//! by every layer of the document-management backend.

pub mod domain;
pub mod error;
pub mod id;
pub mod result;
pub mod validation;

pub use domain::*;
pub use error::*;
pub use id::*;
pub use result::*;
pub use validation::*;
