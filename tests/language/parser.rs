//! Integration tests for the parsing core
//!
//! Drives the generic parser with a small grammar of its own to check that
//! nothing in the core is specific to citegraph.

use citegraph_foundation::{ErrorKind, Result};
use citegraph_language::{Grammar, Parser, SymbolTable, Token, TokenKind};

/// Builds a bracketed rendering of the parse tree: `a:b:c` becomes
/// `(a:(b:c))` because `:` is right-associative here.
struct Bracket;

fn atom(_p: &mut Parser<'_, Bracket>, token: Token) -> Result<Option<String>> {
    Ok(token.value)
}

fn colon(p: &mut Parser<'_, Bracket>, _token: Token, left: Option<String>) -> Result<Option<String>> {
    let right = p.expression(9)?;
    Ok(Some(format!(
        "({}:{})",
        left.unwrap_or_default(),
        right.unwrap_or_default()
    )))
}

fn arrow(p: &mut Parser<'_, Bracket>, _token: Token, left: Option<String>) -> Result<Option<String>> {
    let right = p.expression(20)?;
    Ok(Some(format!(
        "({}=>{})",
        left.unwrap_or_default(),
        right.unwrap_or_default()
    )))
}

fn group(p: &mut Parser<'_, Bracket>, _token: Token) -> Result<Option<String>> {
    let inner = p.expression(0)?;
    p.advance(Some(TokenKind::RParen))?;
    Ok(inner)
}

impl Grammar for Bracket {
    type Node = String;

    fn register(symbols: &mut SymbolTable<Self>) {
        symbols.symbol(TokenKind::Eof, 0);
        symbols.symbol(TokenKind::RParen, 0);
        symbols.symbol(TokenKind::Identifier, 0).prefix(atom);
        symbols.symbol(TokenKind::LParen, 0).prefix(group);
        symbols.symbol(TokenKind::Colon, 10).infix(colon);
        symbols.symbol(TokenKind::Arrow, 20).infix(arrow);
    }
}

fn parse(source: &str) -> Result<Vec<String>> {
    Parser::new(source, Bracket).parse()
}

#[test]
fn binding_power_orders_operators() {
    // `=>` binds tighter than `:` in this grammar.
    assert_eq!(parse("a:b=>c").unwrap(), vec!["(a:(b=>c))"]);
}

#[test]
fn lower_right_binding_power_associates_right() {
    assert_eq!(parse("a:b:c").unwrap(), vec!["(a:(b:c))"]);
}

#[test]
fn equal_right_binding_power_associates_left() {
    assert_eq!(parse("a=>b=>c").unwrap(), vec!["((a=>b)=>c)"]);
}

#[test]
fn groups_override_binding_power() {
    assert_eq!(parse("(a:b)=>c").unwrap(), vec!["((a:b)=>c)"]);
}

#[test]
fn symbols_can_be_added_at_runtime() {
    fn bang(p: &mut Parser<'_, Bracket>, _token: Token, left: Option<String>) -> Result<Option<String>> {
        let right = p.expression(30)?;
        Ok(Some(format!("{}!{}", left.unwrap_or_default(), right.unwrap_or_default())))
    }

    let mut parser = Parser::new("a!b", Bracket);
    assert!(parser.parse().is_err());

    let mut parser = Parser::new("a!b", Bracket);
    parser.symbol(TokenKind::Bang, 30).infix(bang);
    assert_eq!(parser.parse().unwrap(), vec!["a!b"]);
}

#[test]
fn unclosed_group_is_reported() {
    let err = parse("(a:b").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::AdvancePastEnd { .. }));
}
