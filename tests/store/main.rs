//! Integration tests for Layer 1: Store
//!
//! Tests for id allocation, triple storage, reification, and materialization.
