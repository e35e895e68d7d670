//! Positions in notation source.
//!
//! Tokens and parse nodes carry a [`Span`] for diagnostics, and the graph
//! store keeps the span of every statement it emits as that statement's
//! provenance.

use std::fmt;

/// Where a token or statement was written.
///
/// `line` and `column` are 1-based and point at the first non-whitespace
/// character of the token, even when the matched text starts with
/// whitespace.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    /// Byte offset of the matched text.
    pub start: usize,
    /// Byte offset just past the matched text.
    pub end: usize,
    /// Line of the first significant character.
    pub line: u32,
    /// Column of the first significant character, in characters.
    pub column: u32,
}

impl Span {
    /// Creates a span.
    #[must_use]
    pub const fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// The empty span at line 1, column 1.
    #[must_use]
    pub const fn at_start() -> Self {
        Self::new(0, 0, 1, 1)
    }
}

/// Renders as `line:column`, the form used in messages and provenance output.
impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
