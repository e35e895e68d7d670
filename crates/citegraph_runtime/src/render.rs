//! Plain-text rendering of compiled graphs.
//!
//! One triple per line, `id subject predicate object`, optionally followed
//! by the `line:column` the statement was written at.

use std::fmt::Write;

use citegraph_store::{GraphStore, Triple};

/// Rendering switches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Append each statement's source position.
    pub provenance: bool,
}

impl RenderOptions {
    /// Sets whether source positions are shown.
    #[must_use]
    pub const fn with_provenance(mut self, provenance: bool) -> Self {
        self.provenance = provenance;
        self
    }
}

/// Renders one triple of `store`.
#[must_use]
pub fn render_triple(store: &GraphStore, triple: &Triple, options: RenderOptions) -> String {
    if !options.provenance {
        return triple.to_string();
    }
    match store.provenance(&triple.id) {
        Some(span) => format!("{triple} {span}"),
        None => triple.to_string(),
    }
}

/// Renders every triple of `store`, one per line, in insertion order.
#[must_use]
pub fn render_store(store: &GraphStore, options: RenderOptions) -> String {
    let mut out = String::new();
    for triple in store.triples() {
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{}", render_triple(store, triple, options));
    }
    out
}
