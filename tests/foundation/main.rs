//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: EntityId, Span, Error, and persistent collections.

mod errors;
mod ids;
