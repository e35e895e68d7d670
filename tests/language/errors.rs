//! Integration tests for compile errors
//!
//! Every malformed input must fail with a specific error kind and a
//! position pointing into the source.

use std::thread;

use citegraph_foundation::{ErrorKind, SemanticLimit};
use citegraph_language::{DEFAULT_MAX_DEPTH, ParseConfig, compile, compile_with_config};

fn error(source: &str) -> ErrorKind {
    match compile(source) {
        Ok(compilation) => panic!("{source:?} compiled to {:?}", compilation.nodes),
        Err(err) => err.kind,
    }
}

#[test]
fn assignment_inside_a_descriptor() {
    let source = "\n      a => ( a:b @x:=y )\n    ";
    let err = compile(source).unwrap_err();
    let message = err.to_string();
    assert!(message.starts_with("Invalid descriptor"), "{message}");
    assert!(message.ends_with("found assignment at 2:20"), "{message}");
}

#[test]
fn redefinition() {
    assert!(matches!(
        error("@x := a\n@x := b"),
        ErrorKind::VariableRedefined { ref name, line: 2, column: 1 } if name == "x"
    ));
}

#[test]
fn undefined_reference() {
    assert!(matches!(
        error("a => b:c\nw => *nope"),
        ErrorKind::UndefinedVariable { ref name, line: 2, column: 6 } if name == "nope"
    ));
}

#[test]
fn description_without_a_descriptor() {
    assert!(matches!(error("a => b"), ErrorKind::UnexpectedSymbol { .. }));
    assert!(matches!(error("a => *x"), ErrorKind::UndefinedVariable { .. }));
}

#[test]
fn mixing_entities_and_descriptors() {
    let kind = error("a b:c");
    match kind {
        ErrorKind::UnexpectedSymbol {
            context, found, ..
        } => {
            assert_eq!(context, "entities");
            assert_eq!(found, "descriptor");
        }
        other => panic!("unexpected {other:?}"),
    }
    assert!(matches!(error("a:b c"), ErrorKind::UnexpectedSymbol { .. }));
}

#[test]
fn label_arity() {
    assert!(matches!(
        error("a => (b:c d:e) ! f"),
        ErrorKind::LabelTargetArity { count: 2, .. }
    ));
    assert!(matches!(
        error("a => b:c ! (d e)"),
        ErrorKind::LabelSourceArity { count: 2, .. }
    ));
    assert!(matches!(error("a ! b"), ErrorKind::UnexpectedSymbol { .. }));
}

#[test]
fn structural_errors() {
    assert!(matches!(error("a =>"), ErrorKind::AdvancePastEnd { .. }));
    assert!(matches!(error("(a b"), ErrorKind::AdvancePastEnd { .. }));
    assert!(matches!(error(")"), ErrorKind::UnexpectedSymbol { .. }));
    assert!(matches!(error("a => (b:c))"), ErrorKind::UnexpectedSymbol { .. }));
    assert!(matches!(error("()"), ErrorKind::UnexpectedSymbol { .. }));
}

#[test]
fn group_open_after_an_expression() {
    // `(` right after an expression has no infix rule.
    assert!(matches!(error("(a)(b)"), ErrorKind::UnexpectedSymbol { ref context, .. } if context == "operator"));
}

#[test]
fn lexical_error() {
    assert!(matches!(error("a => b:c $"), ErrorKind::Lexical { .. }));
}

#[test]
fn nesting_limit() {
    let source = format!("{}a{} => b:c", "(".repeat(64), ")".repeat(64));
    let config = ParseConfig::default().with_max_depth(32);
    let err = compile_with_config(&source, &config).unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::LimitExceeded(SemanticLimit::MaxNestingDepth { limit: 32 })
    ));
}

/// `parens` nested groups around one identifier, then described.
fn nested(parens: usize) -> String {
    format!("{}a{} => b:c", "(".repeat(parens), ")".repeat(parens))
}

#[test]
fn default_nesting_limit_fits_a_small_stack() {
    // The top-level expression takes one level, each group one more.
    let deepest = nested(DEFAULT_MAX_DEPTH - 1);
    let too_deep = nested(DEFAULT_MAX_DEPTH);
    let results = thread::Builder::new()
        .stack_size(2 * 1024 * 1024)
        .spawn(move || {
            (
                compile(&deepest).map(|c| c.store.len()),
                compile(&too_deep).map(|c| c.store.len()).map_err(|e| e.kind),
            )
        })
        .unwrap()
        .join()
        .expect("compiling nested groups overflowed the stack");

    assert_eq!(results.0.unwrap(), 1);
    assert!(matches!(
        results.1,
        Err(ErrorKind::LimitExceeded(SemanticLimit::MaxNestingDepth { limit })) if limit == DEFAULT_MAX_DEPTH
    ));
}

#[test]
fn label_shared_by_several_subjects() {
    assert!(matches!(
        error("(a b) => c:d ! e"),
        ErrorKind::DuplicateStatementId { ref id, line: 1, column: 7 } if id == "_:user/e"
    ));
}

#[test]
fn label_reused_by_a_later_statement() {
    assert!(matches!(
        error("x => c:d ! e\ny => f:g ! e"),
        ErrorKind::DuplicateStatementId { ref id, line: 2, column: 3 } if id == "_:user/e"
    ));
}

#[test]
fn citation_limit() {
    let mut source = String::from("a");
    for n in 0..20 {
        source.push_str(&format!(" => p{n}:o{n}"));
    }
    let config = ParseConfig::default().with_max_citation_depth(5);
    let err = compile_with_config(&source, &config).unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::LimitExceeded(SemanticLimit::MaxCitationDepth { limit: 5 })
    ));
}
