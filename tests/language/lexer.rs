//! Integration tests for the lexer

use citegraph_foundation::ErrorKind;
use citegraph_language::{Lexer, TokenKind};

fn kinds(source: &str) -> Vec<TokenKind> {
    Lexer::tokenize_all(source)
        .unwrap()
        .into_iter()
        .map(|t| t.kind)
        .collect()
}

#[test]
fn statement_separators_are_terminators() {
    for separator in ["  ", "; ", " ;", ";;", "\n", " ;\n  "] {
        let source = format!("a{separator}b");
        assert_eq!(
            kinds(&source),
            vec![
                TokenKind::Identifier,
                TokenKind::Terminator,
                TokenKind::Identifier,
                TokenKind::Eof,
            ],
            "separator {separator:?}"
        );
    }
}

#[test]
fn every_operator_lexes() {
    assert_eq!(
        kinds("@x := (a b) => c:d ! e *x"),
        vec![
            TokenKind::Variable,
            TokenKind::Assign,
            TokenKind::LParen,
            TokenKind::Identifier,
            TokenKind::Terminator,
            TokenKind::Identifier,
            TokenKind::RParen,
            TokenKind::Arrow,
            TokenKind::Identifier,
            TokenKind::Colon,
            TokenKind::Identifier,
            TokenKind::Bang,
            TokenKind::Identifier,
            TokenKind::Terminator,
            TokenKind::Reference,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn identifier_values_keep_markers() {
    let tokens = Lexer::tokenize_all("abc&def&ghi").unwrap();
    assert_eq!(tokens[0].value.as_deref(), Some("abc&def&ghi"));
}

#[test]
fn assignment_position_is_the_operator() {
    let tokens = Lexer::tokenize_all("\n      a => ( a:b @x:=y )").unwrap();
    let assign = tokens.iter().find(|t| t.kind == TokenKind::Assign).unwrap();
    assert_eq!((assign.span.line, assign.span.column), (2, 20));
}

#[test]
fn unknown_character_is_a_lexical_error() {
    let err = Lexer::tokenize_all("a => b:c\nd => e # f").unwrap_err();
    match err.kind {
        ErrorKind::Lexical {
            line,
            column,
            snippet,
            ..
        } => {
            assert_eq!((line, column), (2, 8));
            assert!(snippet.starts_with("# f"));
        }
        other => panic!("expected a lexical error, got {other:?}"),
    }
}
