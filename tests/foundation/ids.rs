//! Integration tests for entity ids
//!
//! Tests the canonical text form of every id namespace and parsing it back.

use citegraph_foundation::{EntityId, ErrorKind, ReificationRole};

// =============================================================================
// Text Forms
// =============================================================================

#[test]
fn every_namespace_renders_canonically() {
    let cases = [
        (EntityId::user("ent1"), "_:user/ent1"),
        (EntityId::unique("abc0def1ghi"), "_:uniq/abc0def1ghi"),
        (EntityId::Auto(7), "_:auto_ent/7"),
        (EntityId::Statement(3), "_:auto_expr/3"),
        (
            EntityId::ReificationPart {
                group: 2,
                role: ReificationRole::Predicate,
            },
            "_:auto_reify/2.p",
        ),
        (
            EntityId::Reification(ReificationRole::Object),
            "rdf:object",
        ),
    ];

    for (id, text) in cases {
        assert_eq!(id.to_string(), text);
        assert_eq!(text.parse::<EntityId>().unwrap(), id);
    }
}

#[test]
fn namespaces_are_disjoint() {
    // Same number, different counters.
    assert_ne!(EntityId::Auto(0), EntityId::Statement(0));
    assert_ne!(EntityId::Auto(0).to_string(), EntityId::Statement(0).to_string());
    assert_ne!(EntityId::user("0"), EntityId::unique("0"));
}

#[test]
fn statement_ids_are_flagged() {
    assert!(EntityId::Statement(0).is_statement());
    assert!(
        EntityId::ReificationPart {
            group: 0,
            role: ReificationRole::Subject
        }
        .is_statement()
    );
    assert!(!EntityId::user("d").is_statement());
}

// =============================================================================
// Parsing
// =============================================================================

#[test]
fn user_text_may_contain_slashes() {
    let id: EntityId = "_:user/a/b".parse().unwrap();
    assert_eq!(id, EntityId::user("a/b"));
}

#[test]
fn malformed_text_is_rejected() {
    for text in ["", "ent1", "_:auto_expr/x", "_:auto_reify/1.q", "rdf:type", "_:nope/1"] {
        let err = text.parse::<EntityId>().unwrap_err();
        assert!(
            matches!(err.kind, ErrorKind::InvalidIdentifier(_)),
            "{text:?} should be rejected"
        );
    }
}

#[test]
fn reification_roles_map_to_rdf_predicates() {
    let names: Vec<&str> = ReificationRole::ALL
        .iter()
        .map(|role| role.predicate_name())
        .collect();
    assert_eq!(names, ["rdf:subject", "rdf:predicate", "rdf:object"]);
}
