//! Compile configuration.

use citegraph_store::DEFAULT_MAX_CITATION_DEPTH;

use crate::parser::DEFAULT_MAX_DEPTH;

/// Limits applied while compiling one source text.
///
/// Both limits exist so that hostile or generated input fails with an error
/// instead of exhausting the stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseConfig {
    /// Maximum expression nesting depth.
    pub max_depth: usize,
    /// Maximum citation chain depth during materialization.
    pub max_citation_depth: usize,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_citation_depth: DEFAULT_MAX_CITATION_DEPTH,
        }
    }
}

impl ParseConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum expression nesting depth.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Sets the maximum citation chain depth.
    #[must_use]
    pub const fn with_max_citation_depth(mut self, max_citation_depth: usize) -> Self {
        self.max_citation_depth = max_citation_depth;
        self
    }
}
