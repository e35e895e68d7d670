//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use citegraph_foundation::{Error, ErrorContext, ErrorKind, SemanticLimit, Span};

fn at(line: u32, column: u32) -> Span {
    Span::new(0, 0, line, column)
}

// =============================================================================
// Error Display
// =============================================================================

#[test]
fn unexpected_symbol_lists_three_kinds() {
    let err = Error::unexpected_symbol(
        "expression",
        &["entities", "descriptor", "assignment"],
        "variable:x",
        at(4, 2),
    );
    assert_eq!(
        err.to_string(),
        "Invalid expression: expected 'entities', 'descriptor', or 'assignment', but found variable:x at 4:2"
    );
}

#[test]
fn lexical_error_quotes_the_input() {
    let err = Error::lexical(11, 2, 3, "#oops");
    let msg = err.to_string();
    assert!(msg.contains("2:3"));
    assert!(msg.contains("'#oops'"));
}

#[test]
fn variable_errors_name_the_variable() {
    assert!(Error::variable_redefined("x", at(1, 1)).to_string().contains("'x'"));
    assert!(Error::undefined_variable("y", at(1, 1)).to_string().contains("'y'"));
}

#[test]
fn label_errors_report_counts() {
    assert!(Error::label_target_arity(2, at(1, 1)).to_string().contains('2'));
    assert!(Error::label_source_arity(0, at(1, 1)).to_string().contains('0'));
}

#[test]
fn limit_errors_report_the_limit() {
    let err = Error::limit_exceeded(SemanticLimit::MaxCitationDepth { limit: 256 });
    assert!(err.to_string().contains("256"));
}

// =============================================================================
// Positions and Context
// =============================================================================

#[test]
fn positional_errors_expose_their_position() {
    assert_eq!(Error::advance_past_end(at(3, 9)).position(), Some((3, 9)));
    assert_eq!(
        Error::advance_mismatch(")", "end of input", at(1, 5)).position(),
        Some((1, 5))
    );
    assert_eq!(Error::new(ErrorKind::Io("x".into())).position(), None);
}

#[test]
fn context_renders_source_and_position() {
    let context = ErrorContext::new()
        .with_source("facts.cg")
        .with_position(2, 20);
    assert_eq!(context.to_string(), "facts.cg:2:20");

    let err = Error::undefined_variable("x", at(2, 20)).with_context(context);
    assert!(err.context.is_some());
}
