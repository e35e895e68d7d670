//! Variable bindings for one compile.

use std::collections::HashMap;

use tracing::debug;

use citegraph_foundation::{Error, Result, Span};

use crate::node::Node;

/// Single-assignment map from variable names to parse results.
///
/// A binding holds an immutable node, so resolving it twice yields the same
/// value no matter what the first use was extended with.
#[derive(Clone, Debug, Default)]
pub struct Environment {
    bindings: HashMap<String, Node>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` to `value`.
    ///
    /// # Errors
    ///
    /// Returns an error if `name` is already bound.
    pub fn define(&mut self, name: &str, value: Node, span: Span) -> Result<()> {
        if self.bindings.contains_key(name) {
            return Err(Error::variable_redefined(name, span));
        }
        debug!(name, kind = value.kind_name(), "variable defined");
        self.bindings.insert(name.to_string(), value);
        Ok(())
    }

    /// Returns the value bound to `name`.
    ///
    /// # Errors
    ///
    /// Returns an error if `name` is not bound.
    pub fn resolve(&self, name: &str, span: Span) -> Result<Node> {
        self.bindings
            .get(name)
            .cloned()
            .ok_or_else(|| Error::undefined_variable(name, span))
    }

    /// Returns true if `name` is bound.
    #[must_use]
    pub fn is_defined(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Returns the number of bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns true if nothing is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
