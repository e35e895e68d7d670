//! Turning properties into triples.
//!
//! [`attach`] is the single entry point the grammar uses to emit triples.
//! A property with citations or a label is reified, and each citation is
//! attached in turn with the new statement id as its subject.

use citegraph_foundation::{EntityId, Error, Result, SemanticLimit, Span};

use crate::property::Property;
use crate::store::GraphStore;

/// Default bound on citation chain depth.
pub const DEFAULT_MAX_CITATION_DEPTH: usize = 256;

/// Attaches `property` to `subject`, using the default depth bound.
///
/// # Errors
///
/// Returns an error if the citation chain is deeper than
/// [`DEFAULT_MAX_CITATION_DEPTH`], or if a label names a statement id the
/// store already holds.
pub fn attach(
    store: &mut GraphStore,
    provenance: Span,
    subject: &EntityId,
    property: &Property,
) -> Result<EntityId> {
    attach_with_limit(store, provenance, subject, property, DEFAULT_MAX_CITATION_DEPTH)
}

/// Attaches `property` to `subject` and returns the main statement id.
///
/// `provenance` is recorded for the main statement; citations record their
/// own spans.
///
/// # Errors
///
/// Returns an error if the citation chain is deeper than `max_depth`, or if
/// a label names a statement id the store already holds.
pub fn attach_with_limit(
    store: &mut GraphStore,
    provenance: Span,
    subject: &EntityId,
    property: &Property,
    max_depth: usize,
) -> Result<EntityId> {
    attach_at(store, provenance, subject, property, 0, max_depth)
}

fn attach_at(
    store: &mut GraphStore,
    provenance: Span,
    subject: &EntityId,
    property: &Property,
    depth: usize,
    max_depth: usize,
) -> Result<EntityId> {
    if depth > max_depth {
        return Err(Error::limit_exceeded(SemanticLimit::MaxCitationDepth {
            limit: max_depth,
        }));
    }

    if !property.needs_reification() {
        return Ok(store.add_statement(
            subject.clone(),
            property.predicate.clone(),
            property.object.clone(),
            provenance,
        ));
    }

    let statement = store.add_reified_statement(
        property.label.clone(),
        subject.clone(),
        property.predicate.clone(),
        property.object.clone(),
        provenance,
    )?;
    for citation in &property.citations {
        attach_at(store, citation.span, &statement, citation, depth + 1, max_depth)?;
    }
    Ok(statement)
}
