//! Lexer, parser, and graph-building grammar for citegraph notation.
//!
//! This crate provides:
//! - [`Lexer`] - Ordered regex tokenization of citegraph source
//! - [`Parser`] - A precedence-climbing parser driven by a [`Grammar`]
//! - [`GraphBuilder`] - The citegraph grammar, emitting triples as it parses
//! - [`compile`] - Source text in, parse results and a [`GraphStore`] out
//!
//! ```
//! let compilation = citegraph_language::compile("ent1 => pred: ent2").unwrap();
//! assert_eq!(compilation.store.len(), 1);
//! ```
//!
//! [`GraphStore`]: citegraph_store::GraphStore

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod compile;
pub mod config;
pub mod env;
pub mod grammar;
pub mod lexer;
pub mod node;
pub mod parser;
pub mod token;

pub use compile::{Compilation, compile, compile_with_config};
pub use config::ParseConfig;
pub use env::Environment;
pub use grammar::{GraphBuilder, GraphParser, binding_power};
pub use lexer::Lexer;
pub use node::Node;
pub use parser::{DEFAULT_MAX_DEPTH, Grammar, InfixRule, Parser, PrefixRule, SymbolDef, SymbolTable};
pub use token::{Token, TokenKind};
