//! End-to-end properties of compiled graphs
//!
//! Id allocation, reification, labels, cross products, variables, and
//! the guarantee that failed compiles leave nothing behind.

use std::collections::HashSet;

use citegraph_foundation::{EntityId, ErrorKind, ReificationRole};
use citegraph_language::compile;
use proptest::prelude::*;

use crate::support::{assert_includes, row, rows, statements, store};

// =============================================================================
// Identifiers
// =============================================================================

#[test]
fn same_text_is_the_same_entity() {
    let graph = store("ent1 => p: x\nent1 => q: y");
    assert_eq!(graph.subjects(), vec![&EntityId::user("ent1")]);
}

#[test]
fn each_marker_occurrence_is_a_new_entity() {
    let graph = store("tmp& => p: x\ntmp& => p: x\n& => p: x");
    let subjects: HashSet<String> = graph.subjects().iter().map(ToString::to_string).collect();
    assert_eq!(subjects.len(), 3);
    assert!(subjects.contains("_:uniq/tmp0"));
    assert!(subjects.contains("_:uniq/tmp1"));
    assert!(subjects.contains("_:uniq/2"));
}

// =============================================================================
// Reification
// =============================================================================

#[test]
fn plain_description_is_not_reified() {
    assert_eq!(
        statements("ent1 => pred: ent2"),
        vec![row("_:user/ent1", "_:user/pred", "_:user/ent2")]
    );
}

#[test]
fn cited_statement_is_reified_then_cited() {
    let graph = store("a => c:d => e:f");
    let s0 = EntityId::Statement(0);

    let main = graph.triple(&s0).unwrap();
    assert_eq!(main.spo(), (&EntityId::user("a"), &EntityId::user("c"), &EntityId::user("d")));

    let about_s0: Vec<(&EntityId, &EntityId)> = graph
        .triples()
        .iter()
        .filter(|t| t.subject == s0)
        .map(|t| (&t.predicate, &t.object))
        .collect();
    assert_eq!(
        about_s0,
        vec![
            (&EntityId::Reification(ReificationRole::Subject), &EntityId::user("a")),
            (&EntityId::Reification(ReificationRole::Predicate), &EntityId::user("c")),
            (&EntityId::Reification(ReificationRole::Object), &EntityId::user("d")),
            (&EntityId::user("e"), &EntityId::user("f")),
        ]
    );
    assert_eq!(graph.len(), 5);
}

#[test]
fn every_citation_costs_four_triples_at_any_depth() {
    let mut source = String::from("a => b:c");
    for depth in 1..=6 {
        source.push_str(&format!(" => p{depth}:o{depth}"));
        // `depth` cited statements, plus the last uncited one.
        assert_eq!(store(&source).len(), depth * 4 + 1, "{source}");
    }
}

#[test]
fn label_replaces_the_auto_id() {
    let graph = store("a => b:c ! d");
    let main = &graph.triples()[0];
    assert_eq!(main.id, EntityId::user("d"));
    assert_includes(
        &rows(&graph),
        &[
            row("_:user/d", "rdf:subject", "_:user/a"),
            row("_:user/d", "rdf:predicate", "_:user/b"),
            row("_:user/d", "rdf:object", "_:user/c"),
        ],
    );
    assert!(graph.triples().iter().all(|t| !matches!(t.id, EntityId::Statement(_))));
}

// =============================================================================
// Cross Products
// =============================================================================

#[test]
fn lists_in_every_slot_multiply() {
    let actual = statements("(a b) => (c d) : (e f)");
    assert_eq!(actual.len(), 8);
    let mut expected = Vec::new();
    for s in ["a", "b"] {
        for p in ["c", "d"] {
            for o in ["e", "f"] {
                expected.push(row(
                    &format!("_:user/{s}"),
                    &format!("_:user/{p}"),
                    &format!("_:user/{o}"),
                ));
            }
        }
    }
    assert_eq!(actual, expected);
}

// =============================================================================
// Variables
// =============================================================================

#[test]
fn nested_variables_expand_in_place() {
    let actual: HashSet<_> = statements("@x := a:b\n@y := (c:d *x e:f)\nw => *y")
        .into_iter()
        .collect();
    let expected: HashSet<_> = [
        row("_:user/w", "_:user/c", "_:user/d"),
        row("_:user/w", "_:user/a", "_:user/b"),
        row("_:user/w", "_:user/e", "_:user/f"),
    ]
    .into_iter()
    .collect();
    assert_eq!(actual, expected);
}

#[test]
fn bindings_keep_their_bind_time_value() {
    let actual = statements("@x := a:b\nq => *x => c:d\nr => *x");
    // `r` gets the bare property: no citation leaked into the binding.
    assert_eq!(actual.last(), Some(&row("_:user/r", "_:user/a", "_:user/b")));
    assert_eq!(actual.len(), 6);
}

// =============================================================================
// Failures
// =============================================================================

#[test]
fn redefinition_fails_without_a_store() {
    let err = compile("@x := a:b\nw => *x\n@x := c:d\nv => *x").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::VariableRedefined { .. }));
}

#[test]
fn undefined_reference_fails_without_a_store() {
    let err = compile("w => a:b\nv => *missing").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UndefinedVariable { .. }));
}

// =============================================================================
// Projections
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Projections on every subject partition the store.
    #[test]
    fn subject_projections_partition_the_store(
        rows in prop::collection::vec(("[a-e]", "[p-r]", "[x-z]", any::<bool>()), 1..16)
    ) {
        let source: String = rows
            .iter()
            .map(|(s, p, o, cited)| {
                if *cited {
                    format!("{s} => {p}:{o} => seen:{s}\n")
                } else {
                    format!("{s} => {p}:{o}\n")
                }
            })
            .collect();
        let graph = store(&source);

        let mut total = 0;
        for subject in graph.subjects() {
            let projection = graph.for_subject(subject);
            prop_assert!(projection.triples().iter().all(|t| &t.subject == subject));
            prop_assert_eq!(projection.provenance_map(), graph.provenance_map());
            total += projection.len();
        }
        prop_assert_eq!(total, graph.len());
    }
}
