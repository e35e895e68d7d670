//! Lexer for citegraph notation.
//!
//! The lexer tries an ordered table of regular expressions at the current
//! position and takes the first one that matches. Operators absorb the
//! whitespace around them, so `a => b` and `a=>b` lex the same way; the
//! whitespace that remains between operands becomes a terminator token.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

use citegraph_foundation::{Error, Result, Span};
use citegraph_store::ANONYMOUS_MARKER;

use crate::token::{Token, TokenKind};

/// Lexical rules in match order.
///
/// Order matters: `:=` must be tried before `:`, and every operator before
/// the terminator so that whitespace around an operator belongs to it.
/// Rules with a capture group take the group as the token value.
/// `{marker}` stands for the escaped anonymous-entity marker.
const LEXICAL_RULES: &[(TokenKind, &str)] = &[
    (TokenKind::Variable, r"@([\p{L}\p{N}_-]+)"),
    (TokenKind::Reference, r"\*([\p{L}\p{N}_-]+)"),
    (TokenKind::Identifier, r"([\p{L}\p{N}_{marker}-]+)"),
    (TokenKind::Assign, r"\s*:=\s*"),
    (TokenKind::Arrow, r"\s*=>\s*"),
    (TokenKind::Colon, r"\s*:\s*"),
    (TokenKind::Bang, r"\s*!\s*"),
    (TokenKind::LParen, r"\(\s*"),
    (TokenKind::RParen, r"\s*\)"),
    (TokenKind::Terminator, r"[\s;]+"),
];

/// Compiled rules, anchored at the start of the remaining input.
static RULES: Lazy<Vec<(TokenKind, Regex)>> = Lazy::new(|| {
    let marker = regex::escape(&ANONYMOUS_MARKER.to_string());
    LEXICAL_RULES
        .iter()
        .map(|(kind, pattern)| {
            let pattern = pattern.replace("{marker}", &marker);
            let anchored = format!(r"\A(?:{pattern})");
            (*kind, Regex::new(&anchored).expect("lexical rule patterns are valid"))
        })
        .collect()
});

/// Characters of unmatched input quoted in a lexical error.
const SNIPPET_LEN: usize = 10;

/// Lexer for citegraph source text.
///
/// Iterating yields tokens up to and including a single end-of-input token,
/// then stops. A lexical error is yielded once and also ends the stream.
pub struct Lexer<'src> {
    /// Remaining source text.
    rest: &'src str,
    /// Current byte offset in source.
    position: usize,
    /// Current line number (1-based).
    line: u32,
    /// Current column number (1-based).
    column: u32,
    /// Set once end of input or an error has been produced.
    finished: bool,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer for the given source.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            rest: source,
            position: 0,
            line: 1,
            column: 1,
            finished: false,
        }
    }

    /// Returns the next token from the source.
    ///
    /// Once the input is exhausted this keeps returning end-of-input tokens.
    ///
    /// # Errors
    ///
    /// Returns a lexical error if no rule matches at the current position.
    pub fn next_token(&mut self) -> Result<Token> {
        if self.rest.is_empty() {
            return Ok(Token::eof(self.here(0)));
        }

        let Some((kind, matched, value)) = self.match_rule() else {
            let snippet: String = self.rest.chars().take(SNIPPET_LEN).collect();
            return Err(Error::lexical(self.position, self.line, self.column, snippet));
        };

        // The token's position is its first non-whitespace character, so
        // skip any whitespace an operator absorbed before it.
        let core = if kind == TokenKind::Terminator {
            matched
        } else {
            matched.trim_start()
        };
        let leading = &matched[..matched.len() - core.len()];
        self.advance_over(leading);

        let core_len = if kind == TokenKind::Terminator {
            core.len()
        } else {
            core.trim_end().len()
        };
        let span = self.here(core_len);
        self.advance_over(core);

        let token = Token::new(kind, matched, value, span);
        trace!(kind = %token.kind, line = span.line, column = span.column, "token");
        Ok(token)
    }

    /// Tokenizes the entire source, ending with the end-of-input token.
    ///
    /// # Errors
    ///
    /// Returns the first lexical error encountered.
    pub fn tokenize_all(source: &str) -> Result<Vec<Token>> {
        Lexer::new(source).collect()
    }

    fn match_rule(&self) -> Option<(TokenKind, &'src str, Option<String>)> {
        let rest = self.rest;
        RULES.iter().find_map(|(kind, regex)| {
            let captures = regex.captures(rest)?;
            let whole = captures.get(0)?;
            if whole.is_empty() {
                return None;
            }
            let value = captures.get(1).map(|m| m.as_str().to_string());
            Some((*kind, &rest[..whole.end()], value))
        })
    }

    fn here(&self, len: usize) -> Span {
        Span::new(self.position, self.position + len, self.line, self.column)
    }

    fn advance_over(&mut self, text: &str) {
        for c in text.chars() {
            self.position += c.len_utf8();
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.rest = &self.rest[text.len()..];
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let result = self.next_token();
        match &result {
            Ok(token) if token.kind == TokenKind::Eof => self.finished = true,
            Err(_) => self.finished = true,
            Ok(_) => {}
        }
        Some(result)
    }
}
