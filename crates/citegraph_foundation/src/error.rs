//! Error types for the citegraph system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//! Every error is fatal to the compile that raised it.

use std::fmt;

use thiserror::Error;

use crate::span::Span;

/// The main error type for citegraph operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a lexical error for input no rule matches.
    #[must_use]
    pub fn lexical(offset: usize, line: u32, column: u32, snippet: impl Into<String>) -> Self {
        Self::new(ErrorKind::Lexical {
            offset,
            line,
            column,
            snippet: snippet.into(),
        })
    }

    /// Creates an unexpected-symbol error.
    ///
    /// `expected` lists the kinds the rule accepts, `found` is the textual
    /// form of the offending symbol.
    #[must_use]
    pub fn unexpected_symbol(
        context: impl Into<String>,
        expected: &[&str],
        found: impl Into<String>,
        span: Span,
    ) -> Self {
        Self::new(ErrorKind::UnexpectedSymbol {
            context: context.into(),
            expected: expected.iter().map(ToString::to_string).collect(),
            found: found.into(),
            line: span.line,
            column: span.column,
        })
    }

    /// Creates an error for advancing past the end of input.
    #[must_use]
    pub fn advance_past_end(span: Span) -> Self {
        Self::new(ErrorKind::AdvancePastEnd {
            line: span.line,
            column: span.column,
        })
    }

    /// Creates an error for advancing over a token of the wrong kind.
    #[must_use]
    pub fn advance_mismatch(expected: impl Into<String>, found: impl Into<String>, span: Span) -> Self {
        Self::new(ErrorKind::AdvanceMismatch {
            expected: expected.into(),
            found: found.into(),
            line: span.line,
            column: span.column,
        })
    }

    /// Creates a variable redefinition error.
    #[must_use]
    pub fn variable_redefined(name: impl Into<String>, span: Span) -> Self {
        Self::new(ErrorKind::VariableRedefined {
            name: name.into(),
            line: span.line,
            column: span.column,
        })
    }

    /// Creates an undefined variable error.
    #[must_use]
    pub fn undefined_variable(name: impl Into<String>, span: Span) -> Self {
        Self::new(ErrorKind::UndefinedVariable {
            name: name.into(),
            line: span.line,
            column: span.column,
        })
    }

    /// Creates an error for a label applied to a descriptor without exactly one property.
    #[must_use]
    pub fn label_target_arity(count: usize, span: Span) -> Self {
        Self::new(ErrorKind::LabelTargetArity {
            count,
            line: span.line,
            column: span.column,
        })
    }

    /// Creates an error for a label that does not name exactly one entity.
    #[must_use]
    pub fn label_source_arity(count: usize, span: Span) -> Self {
        Self::new(ErrorKind::LabelSourceArity {
            count,
            line: span.line,
            column: span.column,
        })
    }

    /// Creates an error for a label reusing an existing statement id.
    #[must_use]
    pub fn duplicate_statement_id(id: impl Into<String>, span: Span) -> Self {
        Self::new(ErrorKind::DuplicateStatementId {
            id: id.into(),
            line: span.line,
            column: span.column,
        })
    }

    /// Creates a semantic limit exceeded error.
    #[must_use]
    pub fn limit_exceeded(limit: SemanticLimit) -> Self {
        Self::new(ErrorKind::LimitExceeded(limit))
    }

    /// Creates an error for text that is not a valid identifier.
    #[must_use]
    pub fn invalid_identifier(text: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidIdentifier(text.into()))
    }

    /// Returns the source line and column this error points at, if any.
    #[must_use]
    pub fn position(&self) -> Option<(u32, u32)> {
        match &self.kind {
            ErrorKind::Lexical { line, column, .. }
            | ErrorKind::UnexpectedSymbol { line, column, .. }
            | ErrorKind::AdvancePastEnd { line, column }
            | ErrorKind::AdvanceMismatch { line, column, .. }
            | ErrorKind::VariableRedefined { line, column, .. }
            | ErrorKind::UndefinedVariable { line, column, .. }
            | ErrorKind::LabelTargetArity { line, column, .. }
            | ErrorKind::LabelSourceArity { line, column, .. }
            | ErrorKind::DuplicateStatementId { line, column, .. } => Some((*line, *column)),
            _ => None,
        }
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// No lexical rule matches at an offset.
    #[error("lexical error at {line}:{column} (offset {offset}): unexpected input '{snippet}'")]
    Lexical {
        /// Byte offset of the unmatched input.
        offset: usize,
        /// Line number (1-indexed).
        line: u32,
        /// Column number (1-indexed).
        column: u32,
        /// A short excerpt of the unmatched input.
        snippet: String,
    },

    /// A grammar rule found a symbol it does not accept.
    #[error(
        "Invalid {context}: expected {}, but found {found} at {line}:{column}",
        expected_list(.expected)
    )]
    UnexpectedSymbol {
        /// What the rule was parsing.
        context: String,
        /// The kinds the rule accepts.
        expected: Vec<String>,
        /// Textual form of the symbol found instead.
        found: String,
        /// Line number (1-indexed).
        line: u32,
        /// Column number (1-indexed).
        column: u32,
    },

    /// Advance was called after the end-of-input token.
    #[error("cannot advance, already at the end of input ({line}:{column})")]
    AdvancePastEnd {
        /// Line number (1-indexed).
        line: u32,
        /// Column number (1-indexed).
        column: u32,
    },

    /// Advance expected a different token kind.
    #[error("expected a token of type '{expected}', found {found} at {line}:{column}")]
    AdvanceMismatch {
        /// The expected token kind.
        expected: String,
        /// The token found instead.
        found: String,
        /// Line number (1-indexed).
        line: u32,
        /// Column number (1-indexed).
        column: u32,
    },

    /// A variable name was bound twice.
    #[error("variable '{name}' is already defined, cannot redefine it at {line}:{column}")]
    VariableRedefined {
        /// The variable name.
        name: String,
        /// Line number (1-indexed).
        line: u32,
        /// Column number (1-indexed).
        column: u32,
    },

    /// A variable was referenced before being bound.
    #[error("undefined variable '{name}' at {line}:{column}")]
    UndefinedVariable {
        /// The variable name.
        name: String,
        /// Line number (1-indexed).
        line: u32,
        /// Column number (1-indexed).
        column: u32,
    },

    /// A label was applied to a descriptor without exactly one property.
    #[error(
        "a label must name exactly one property, but the descriptor has {count} at {line}:{column}"
    )]
    LabelTargetArity {
        /// Number of properties found.
        count: usize,
        /// Line number (1-indexed).
        line: u32,
        /// Column number (1-indexed).
        column: u32,
    },

    /// A label did not resolve to exactly one entity.
    #[error("a label must be exactly one identifier, but found {count} at {line}:{column}")]
    LabelSourceArity {
        /// Number of identifiers found.
        count: usize,
        /// Line number (1-indexed).
        line: u32,
        /// Column number (1-indexed).
        column: u32,
    },

    /// A label names a statement id the store already holds.
    #[error("statement id '{id}' is already in use, cannot label another statement with it at {line}:{column}")]
    DuplicateStatementId {
        /// Canonical text of the reused id.
        id: String,
        /// Line number (1-indexed).
        line: u32,
        /// Column number (1-indexed).
        column: u32,
    },

    /// Semantic limit exceeded (input nested too deeply).
    #[error("limit exceeded: {0}")]
    LimitExceeded(SemanticLimit),

    /// Text is not a valid identifier form.
    #[error("invalid identifier: {0}")]
    InvalidIdentifier(String),

    /// Reading or writing a file failed.
    #[error("I/O error: {0}")]
    Io(String),

    /// Encoding or decoding a snapshot failed.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Joins expected kinds as `'A'`, `'A' or 'B'`, or `'A', 'B', or 'C'`.
fn expected_list(expected: &[String]) -> String {
    let quoted: Vec<String> = expected.iter().map(|e| format!("'{e}'")).collect();
    match quoted.as_slice() {
        [] => "nothing".to_string(),
        [only] => only.clone(),
        [first, second] => format!("{first} or {second}"),
        [init @ .., last] => format!("{}, or {last}", init.join(", ")),
    }
}

/// Semantic limits (kill switches) that can be exceeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SemanticLimit {
    /// Maximum expression nesting exceeded.
    MaxNestingDepth {
        /// The configured limit.
        limit: usize,
    },
    /// Maximum citation chain depth exceeded while materializing.
    MaxCitationDepth {
        /// The configured limit.
        limit: usize,
    },
}

impl fmt::Display for SemanticLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MaxNestingDepth { limit } => {
                write!(f, "max nesting depth ({limit}) exceeded")
            }
            Self::MaxCitationDepth { limit } => {
                write!(f, "max citation depth ({limit}) exceeded")
            }
        }
    }
}

/// Context about where an error occurred.
#[derive(Debug, Clone)]
pub struct ErrorContext {
    /// Source file name.
    pub source: Option<String>,
    /// Line number in source.
    pub line: Option<usize>,
    /// Column number in source.
    pub column: Option<usize>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self {
            source: None,
            line: None,
            column: None,
        }
    }

    /// Sets the source location.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the line and column.
    #[must_use]
    pub fn with_position(mut self, line: usize, column: usize) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "{source}")?;
            if let (Some(line), Some(col)) = (self.line, self.column) {
                write!(f, ":{line}:{col}")?;
            }
        }
        Ok(())
    }
}
