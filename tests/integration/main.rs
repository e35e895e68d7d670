//! Integration tests across all layers
//!
//! Compiles notation end to end and checks the resulting triples.

mod scenarios;
