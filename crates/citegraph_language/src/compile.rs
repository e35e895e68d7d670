//! Compiling source text into a graph store.

use tracing::{debug, debug_span};

use citegraph_foundation::Result;
use citegraph_store::GraphStore;

use crate::config::ParseConfig;
use crate::grammar::{GraphBuilder, GraphParser};
use crate::node::Node;

/// The result of compiling one source text.
#[derive(Debug)]
pub struct Compilation {
    /// Top-level parse results, in source order.
    pub nodes: Vec<Node>,
    /// Every triple the source produced.
    pub store: GraphStore,
}

/// Compiles `source` with the default limits.
///
/// # Errors
///
/// Returns the first lexical, syntactic, or semantic error. Nothing from a
/// failed compile is kept.
pub fn compile(source: &str) -> Result<Compilation> {
    compile_with_config(source, &ParseConfig::default())
}

/// Compiles `source` with the limits in `config`.
///
/// Each call starts from an empty store and environment, so compiles are
/// independent of each other.
///
/// # Errors
///
/// Returns the first lexical, syntactic, or semantic error.
pub fn compile_with_config(source: &str, config: &ParseConfig) -> Result<Compilation> {
    let span = debug_span!("compile", bytes = source.len());
    let _enter = span.enter();

    let mut parser =
        GraphParser::new(source, GraphBuilder::new(config)).with_max_depth(config.max_depth);
    let nodes = parser.parse()?;
    let (store, env) = parser.into_grammar().into_parts();

    debug!(
        nodes = nodes.len(),
        triples = store.len(),
        variables = env.len(),
        "compiled"
    );
    Ok(Compilation { nodes, store })
}
