//! Triple store, identifier allocation, and statement reification for citegraph.
//!
//! This crate provides:
//! - [`Triple`] - One identified subject/predicate/object statement
//! - [`Property`] - A predicate/object pair waiting for a subject
//! - [`GraphStore`] - Ordered triples, provenance, and id counters
//! - [`attach`] - Materializes a property, and its citations, onto a subject

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod materialize;
pub mod property;
pub mod store;
pub mod triple;

pub use materialize::{DEFAULT_MAX_CITATION_DEPTH, attach, attach_with_limit};
pub use property::Property;
pub use store::{ANONYMOUS_MARKER, GraphStore};
pub use triple::Triple;
