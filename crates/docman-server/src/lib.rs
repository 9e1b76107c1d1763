//! # Docman Server Library
//!
//! Wiring and startup helpers for the docman server binary.

pub mod di;
pub mod startup;
