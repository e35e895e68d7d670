//! Identifiers, source spans, errors, and persistent collections for citegraph.
//!
//! This crate provides:
//! - [`EntityId`] - Namespaced identifiers for entities and statements
//! - [`Span`] - Source positions used for provenance and diagnostics
//! - [`Error`] - Rich error types with context
//! - [`CgVec`] - Persistent vector used for shareable parse fragments

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod collections;
pub mod entity;
pub mod error;
pub mod span;

pub use collections::CgVec;
pub use entity::{EntityId, ReificationRole};
pub use error::{Error, ErrorContext, ErrorKind, SemanticLimit};
pub use span::Span;

/// Result alias used across every citegraph layer.
pub type Result<T> = std::result::Result<T, Error>;
