//! # Docman REST
//!
//! REST API layer using Axum for docman.
//! Provides the document and user endpoints, bearer-token authentication,
//! health checks and the OpenAPI document.

pub mod controllers;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod responses;
pub mod router;
pub mod state;

pub use router::*;
pub use state::*;
