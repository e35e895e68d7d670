//! Token types for citegraph notation.
//!
//! Tokens are the output of the lexer and input to the parser.

use std::fmt;

use citegraph_foundation::Span;

/// A token from lexical analysis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// The kind of this token.
    pub kind: TokenKind,
    /// The full text the rule matched, including absorbed whitespace.
    pub text: String,
    /// The semantically relevant part of the match (identifier text,
    /// variable name without its sigil).
    pub value: Option<String>,
    /// Source location of this token.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>, value: Option<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            value,
            span,
        }
    }

    /// Creates the synthetic end-of-input token.
    #[must_use]
    pub fn eof(span: Span) -> Self {
        Self::new(TokenKind::Eof, "", None, span)
    }

    /// Returns the textual form used in diagnostics, e.g. `identifier:foo`.
    #[must_use]
    pub fn describe(&self) -> String {
        match &self.value {
            Some(value) => format!("{}:{value}", self.kind),
            None => self.kind.to_string(),
        }
    }
}

/// Token kinds of citegraph notation.
///
/// The kind selects the symbol definition (binding power and rules) that
/// every token of that kind shares.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    /// `@name`, the target of an assignment
    Variable,
    /// `*name`, a reference to a bound variable
    Reference,
    /// Entity literal like `ent1`, `abc&def`, or `&`
    Identifier,
    /// `:=`
    Assign,
    /// `=>`
    Arrow,
    /// `:`
    Colon,
    /// `!`
    Bang,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// Whitespace and `;` between operands
    Terminator,
    /// End of input
    Eof,
}

impl TokenKind {
    /// Returns a human-readable name for this token kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Variable => "variable",
            Self::Reference => "reference",
            Self::Identifier => "identifier",
            Self::Assign => ":=",
            Self::Arrow => "=>",
            Self::Colon => ":",
            Self::Bang => "!",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::Terminator => "terminator",
            Self::Eof => "end of input",
        }
    }

    /// Returns true if this kind closes the construct being parsed.
    #[must_use]
    pub const fn ends_construct(self) -> bool {
        matches!(self, Self::Eof | Self::RParen)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
