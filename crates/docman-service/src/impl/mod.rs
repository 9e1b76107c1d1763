//! Service implementations.
//!
//! This module contains the concrete implementations of service traits.
//! Trait definitions live in the parent module (e.g. `document_service.rs`).

pub mod document_service_impl;

pub use document_service_impl::DocumentServiceImpl;
