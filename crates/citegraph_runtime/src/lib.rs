//! Command-line compiler, rendering, and snapshots for citegraph.
//!
//! This crate provides:
//! - [`compile_file`] - Compile a source file into an isolated store
//! - [`render_store`] - One line per triple, optionally with provenance
//! - [`GraphSnapshot`] - `MessagePack` snapshots of compiled graphs
//! - [`logging`] - The `tracing` subscriber used by the `citegraph` binary

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod logging;
pub mod render;
pub mod serialize;
pub mod source;

pub use render::{RenderOptions, render_store, render_triple};
pub use serialize::{GraphSnapshot, from_bytes, load_from_file, save_to_file, to_bytes};
pub use source::{compile_file, parse_subject};
