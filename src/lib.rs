//! citegraph - compile relationship notation into reified triples
//!
//! This crate re-exports all layers of the citegraph system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: citegraph_runtime    - CLI, rendering, MessagePack snapshots
//! Layer 2: citegraph_language   - Lexer, precedence-climbing parser, grammar
//! Layer 1: citegraph_store      - Triples, reification, materialization
//! Layer 0: citegraph_foundation - Core types (EntityId, Span, Error, CgVec)
//! ```

pub use citegraph_foundation as foundation;
pub use citegraph_language as language;
pub use citegraph_runtime as runtime;
pub use citegraph_store as store;

pub use citegraph_language::{Compilation, ParseConfig, compile, compile_with_config};
