//! Precedence-climbing parser core.
//!
//! The parser knows nothing about citegraph semantics. A [`Grammar`]
//! registers a [`SymbolDef`] per token kind: a left binding power plus an
//! optional prefix rule (token starts an expression) and infix rule (token
//! continues one). [`Parser::expression`] then runs the usual loop: apply
//! the prefix rule of the first token, and keep applying infix rules while
//! the next token binds tighter than the caller's right binding power.
//!
//! Rules receive the parser itself, so they can parse operands, inspect the
//! lookahead, and reach the grammar's state through [`Parser::grammar_mut`].

use std::collections::HashMap;

use tracing::trace;

use citegraph_foundation::{Error, ErrorKind, Result, SemanticLimit};

use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};

/// Default bound on expression nesting.
///
/// Parsing to this depth must fit a 2 MiB thread stack in unoptimized
/// builds; every level costs the precedence loop plus the rule it calls.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Rule applied when a token starts an expression.
pub type PrefixRule<G> =
    fn(&mut Parser<'_, G>, Token) -> Result<Option<<G as Grammar>::Node>>;

/// Rule applied when a token follows an expression.
///
/// Receives the expression parsed so far as its left operand.
pub type InfixRule<G> = fn(
    &mut Parser<'_, G>,
    Token,
    Option<<G as Grammar>::Node>,
) -> Result<Option<<G as Grammar>::Node>>;

/// A language driven by the parser.
pub trait Grammar: Sized {
    /// The parse result type.
    type Node;

    /// Registers a symbol definition for every token kind the lexer can
    /// produce.
    fn register(symbols: &mut SymbolTable<Self>);
}

/// Binding power and rules shared by every token of one kind.
pub struct SymbolDef<G: Grammar> {
    binding_power: u8,
    prefix: Option<PrefixRule<G>>,
    infix: Option<InfixRule<G>>,
}

impl<G: Grammar> SymbolDef<G> {
    /// Sets the prefix rule.
    pub fn prefix(&mut self, rule: PrefixRule<G>) -> &mut Self {
        self.prefix = Some(rule);
        self
    }

    /// Sets the infix rule.
    pub fn infix(&mut self, rule: InfixRule<G>) -> &mut Self {
        self.infix = Some(rule);
        self
    }

    /// Returns the left binding power.
    #[must_use]
    pub const fn binding_power(&self) -> u8 {
        self.binding_power
    }
}

/// Symbol definitions keyed by token kind.
pub struct SymbolTable<G: Grammar> {
    defs: HashMap<TokenKind, SymbolDef<G>>,
}

impl<G: Grammar> Default for SymbolTable<G> {
    fn default() -> Self {
        Self {
            defs: HashMap::new(),
        }
    }
}

impl<G: Grammar> SymbolTable<G> {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the definition for `kind`, creating it if needed.
    ///
    /// Defining a kind twice keeps the higher binding power, so rules can
    /// be added to a symbol in several places.
    pub fn symbol(&mut self, kind: TokenKind, binding_power: u8) -> &mut SymbolDef<G> {
        let def = self.defs.entry(kind).or_insert(SymbolDef {
            binding_power,
            prefix: None,
            infix: None,
        });
        def.binding_power = def.binding_power.max(binding_power);
        def
    }

    /// Returns the definition for `kind`, if any.
    #[must_use]
    pub fn get(&self, kind: TokenKind) -> Option<&SymbolDef<G>> {
        self.defs.get(&kind)
    }

    /// Returns true if `kind` has a definition.
    #[must_use]
    pub fn contains(&self, kind: TokenKind) -> bool {
        self.defs.contains_key(&kind)
    }

    fn names_where(&self, has_rule: impl Fn(&SymbolDef<G>) -> bool) -> Vec<&'static str> {
        let mut kinds: Vec<TokenKind> = self
            .defs
            .iter()
            .filter(|(_, def)| has_rule(def))
            .map(|(kind, _)| *kind)
            .collect();
        kinds.sort_unstable();
        kinds.into_iter().map(TokenKind::name).collect()
    }
}

/// Precedence-climbing parser over a [`Grammar`].
pub struct Parser<'src, G: Grammar> {
    lexer: Lexer<'src>,
    symbols: SymbolTable<G>,
    current: Option<Token>,
    grammar: G,
    depth: usize,
    max_depth: usize,
}

impl<'src, G: Grammar> Parser<'src, G> {
    /// Creates a parser over `source` driven by `grammar`.
    #[must_use]
    pub fn new(source: &'src str, grammar: G) -> Self {
        let mut symbols = SymbolTable::new();
        G::register(&mut symbols);
        Self {
            lexer: Lexer::new(source),
            symbols,
            current: None,
            grammar,
            depth: 0,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Sets the bound on expression nesting.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Returns the symbol definition for `kind`, creating it if needed.
    pub fn symbol(&mut self, kind: TokenKind, binding_power: u8) -> &mut SymbolDef<G> {
        self.symbols.symbol(kind, binding_power)
    }

    /// Returns the grammar state.
    #[must_use]
    pub fn grammar(&self) -> &G {
        &self.grammar
    }

    /// Returns the grammar state mutably.
    pub fn grammar_mut(&mut self) -> &mut G {
        &mut self.grammar
    }

    /// Consumes the parser and returns the grammar state.
    #[must_use]
    pub fn into_grammar(self) -> G {
        self.grammar
    }

    /// Returns the current token without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<&Token> {
        self.current.as_ref()
    }

    /// Returns true if the current token closes the construct being parsed.
    #[must_use]
    pub fn at_construct_end(&self) -> bool {
        self.peek().is_some_and(|t| t.kind.ends_construct())
    }

    /// Moves to the next token and returns it.
    ///
    /// # Errors
    ///
    /// Returns an error if the current token is end of input, if it is not
    /// of the `expected` kind, or if the lexer fails.
    pub fn advance(&mut self, expected: Option<TokenKind>) -> Result<&Token> {
        if let Some(current) = &self.current {
            if current.kind == TokenKind::Eof {
                return Err(Error::advance_past_end(current.span));
            }
            if let Some(expected) = expected {
                if current.kind != expected {
                    return Err(Error::advance_mismatch(
                        expected.name(),
                        current.describe(),
                        current.span,
                    ));
                }
            }
        }

        let token = match self.lexer.next() {
            Some(token) => token?,
            None => {
                return Err(Error::new(ErrorKind::Internal(
                    "token stream ended without end of input".into(),
                )));
            }
        };
        if !self.symbols.contains(token.kind) {
            return Err(Error::new(ErrorKind::Internal(format!(
                "no symbol defined for token kind {}",
                token.kind
            ))));
        }
        let token: &Token = self.current.insert(token);
        Ok(token)
    }

    /// Parses an expression whose operators bind tighter than `rbp`.
    ///
    /// # Errors
    ///
    /// Returns an error if a rule fails, if a token has no rule for its
    /// position, or if nesting exceeds the configured depth.
    pub fn expression(&mut self, rbp: u8) -> Result<Option<G::Node>> {
        if self.depth >= self.max_depth {
            return Err(Error::limit_exceeded(SemanticLimit::MaxNestingDepth {
                limit: self.max_depth,
            }));
        }
        self.depth += 1;
        let result = self.expression_inner(rbp);
        self.depth -= 1;
        result
    }

    fn expression_inner(&mut self, rbp: u8) -> Result<Option<G::Node>> {
        let token = self.take_current()?;
        trace!(kind = %token.kind, rbp, "prefix");
        let Some(prefix) = self.symbols.get(token.kind).and_then(|def| def.prefix) else {
            let expected = self.symbols.names_where(|def| def.prefix.is_some());
            return Err(Error::unexpected_symbol(
                "expression",
                &expected,
                token.describe(),
                token.span,
            ));
        };
        let mut left = prefix(self, token)?;

        while rbp < self.current_binding_power() {
            let token = self.take_current()?;
            trace!(kind = %token.kind, rbp, "infix");
            let Some(infix) = self.symbols.get(token.kind).and_then(|def| def.infix) else {
                let expected = self.symbols.names_where(|def| def.infix.is_some());
                return Err(Error::unexpected_symbol(
                    "operator",
                    &expected,
                    token.describe(),
                    token.span,
                ));
            };
            left = infix(self, token, left)?;
        }

        Ok(left)
    }

    /// Parses the whole input as a sequence of top-level expressions.
    ///
    /// Expressions that produce no node are skipped.
    ///
    /// # Errors
    ///
    /// Returns the first error raised while parsing.
    pub fn parse(&mut self) -> Result<Vec<G::Node>> {
        self.advance(None)?;
        let mut results = Vec::new();
        while self.peek().is_some_and(|t| t.kind != TokenKind::Eof) {
            if let Some(node) = self.expression(0)? {
                results.push(node);
            }
        }
        Ok(results)
    }

    /// Returns the current token and advances past it.
    fn take_current(&mut self) -> Result<Token> {
        let token = match &self.current {
            Some(token) => token.clone(),
            None => self.advance(None)?.clone(),
        };
        self.advance(None)?;
        Ok(token)
    }

    fn current_binding_power(&self) -> u8 {
        self.peek()
            .and_then(|t| self.symbols.get(t.kind))
            .map_or(0, SymbolDef::binding_power)
    }
}
