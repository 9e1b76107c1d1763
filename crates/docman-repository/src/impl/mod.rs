//! Repository layer implementations.
//!
//! Trait definitions live in the parent module (`traits.rs`).
//! This module contains concrete structs that implement those traits.

pub mod document_repository_impl;
pub mod user_repository_impl;

pub use document_repository_impl::DocumentRepositoryImpl;
pub use user_repository_impl::UserRepositoryImpl;
