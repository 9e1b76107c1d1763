//! REST API controllers.

pub mod auth_controller;
pub mod document_controller;
pub mod health_controller;

pub use health_controller::*;
