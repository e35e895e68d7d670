//! The triple store.
//!
//! A `GraphStore` is created once per compile, mutated only while the
//! grammar runs, and read afterwards. It owns three monotonic counters:
//! entities (auto and unique ids), statements, and reification groups.

use std::collections::{BTreeMap, BTreeSet};

use citegraph_foundation::{EntityId, Error, ReificationRole, Result, Span};
use tracing::debug;

use crate::triple::Triple;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Character marking an anonymous entity; each occurrence becomes a fresh number.
pub const ANONYMOUS_MARKER: char = '&';

/// Ordered triples plus provenance and id counters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GraphStore {
    /// Triples in emission order.
    triples: Vec<Triple>,
    /// Source position of every statement, keyed by statement id.
    provenance: BTreeMap<EntityId, Span>,
    /// Next value of the entity counter.
    next_entity: u64,
    /// Next value of the statement counter.
    next_statement: u64,
    /// Next value of the reification group counter.
    next_reification: u64,
    /// Text of every `Unique` id minted so far.
    minted_unique: BTreeSet<String>,
}

impl GraphStore {
    /// Creates a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn next_entity_counter(&mut self) -> u64 {
        let n = self.next_entity;
        self.next_entity += 1;
        n
    }

    fn next_statement_counter(&mut self) -> u64 {
        let n = self.next_statement;
        self.next_statement += 1;
        n
    }

    fn next_reification_counter(&mut self) -> u64 {
        let n = self.next_reification;
        self.next_reification += 1;
        n
    }

    /// Allocates the id an identifier's text denotes.
    ///
    /// - no text: a fresh `Auto` id
    /// - text containing [`ANONYMOUS_MARKER`]: every marker, left to right,
    ///   is replaced by a fresh entity counter value, giving a `Unique` id
    /// - otherwise: `User(text)`, the same entity for the same text
    ///
    /// Expansion concatenates digits with the surrounding text, so two
    /// different texts can spell the same result (`a1&` at counter 0 and
    /// `a&` at counter 10 both give `a10`). When that happens the markers
    /// are expanded again with fresh counter values, so a `Unique` id is
    /// never handed out twice.
    pub fn allocate_entity_id(&mut self, text: Option<&str>) -> EntityId {
        let Some(text) = text else {
            return EntityId::Auto(self.next_entity_counter());
        };

        if !text.contains(ANONYMOUS_MARKER) {
            return EntityId::user(text);
        }

        loop {
            let expanded = self.expand_markers(text);
            if self.minted_unique.insert(expanded.clone()) {
                return EntityId::Unique(expanded);
            }
            debug!(%expanded, "unique id already minted, expanding again");
        }
    }

    fn expand_markers(&mut self, text: &str) -> String {
        let mut expanded = String::with_capacity(text.len() + 4);
        for c in text.chars() {
            if c == ANONYMOUS_MARKER {
                expanded.push_str(&self.next_entity_counter().to_string());
            } else {
                expanded.push(c);
            }
        }
        expanded
    }

    fn push(&mut self, triple: Triple, provenance: Span) {
        self.provenance.insert(triple.id.clone(), provenance);
        self.triples.push(triple);
    }

    /// Appends a triple under a fresh statement id and returns that id.
    pub fn add_statement(
        &mut self,
        subject: EntityId,
        predicate: EntityId,
        object: EntityId,
        provenance: Span,
    ) -> EntityId {
        let id = EntityId::Statement(self.next_statement_counter());
        debug!(%id, %subject, %predicate, %object, "statement");
        self.push(Triple::new(id.clone(), subject, predicate, object), provenance);
        id
    }

    /// Appends a triple and the three triples reifying it.
    ///
    /// The main triple uses `explicit_id` when given, otherwise a fresh
    /// statement id. The reification triples assert the main id's subject,
    /// predicate, and object, and share one fresh reification group.
    /// Returns the main id.
    ///
    /// # Errors
    ///
    /// Returns an error if `explicit_id` already names a statement in this
    /// store; nothing is appended in that case.
    pub fn add_reified_statement(
        &mut self,
        explicit_id: Option<EntityId>,
        subject: EntityId,
        predicate: EntityId,
        object: EntityId,
        provenance: Span,
    ) -> Result<EntityId> {
        let id = match explicit_id {
            Some(id) => {
                if self.has_statement(&id) {
                    return Err(Error::duplicate_statement_id(id.to_string(), provenance));
                }
                self.push(
                    Triple::new(id.clone(), subject.clone(), predicate.clone(), object.clone()),
                    provenance,
                );
                id
            }
            None => self.add_statement(
                subject.clone(),
                predicate.clone(),
                object.clone(),
                provenance,
            ),
        };

        let group = self.next_reification_counter();
        debug!(%id, group, "reified statement");
        for (role, value) in ReificationRole::ALL.into_iter().zip([subject, predicate, object]) {
            self.push(
                Triple::new(
                    EntityId::ReificationPart { group, role },
                    id.clone(),
                    EntityId::Reification(role),
                    value,
                ),
                provenance,
            );
        }
        Ok(id)
    }

    /// Returns true if `id` names a statement in this store.
    #[must_use]
    pub fn has_statement(&self, id: &EntityId) -> bool {
        self.provenance.contains_key(id)
    }

    /// Returns all triples in emission order.
    #[must_use]
    pub fn triples(&self) -> &[Triple] {
        &self.triples
    }

    /// Returns the number of triples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Returns true if the store holds no triples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Finds the triple with the given statement id.
    #[must_use]
    pub fn triple(&self, id: &EntityId) -> Option<&Triple> {
        self.triples.iter().find(|t| &t.id == id)
    }

    /// Returns where the statement with the given id was written.
    #[must_use]
    pub fn provenance(&self, id: &EntityId) -> Option<Span> {
        self.provenance.get(id).copied()
    }

    /// Returns the whole provenance map.
    #[must_use]
    pub fn provenance_map(&self) -> &BTreeMap<EntityId, Span> {
        &self.provenance
    }

    /// Returns distinct subjects in order of first appearance.
    #[must_use]
    pub fn subjects(&self) -> Vec<&EntityId> {
        let mut seen = Vec::new();
        for triple in &self.triples {
            if !seen.contains(&&triple.subject) {
                seen.push(&triple.subject);
            }
        }
        seen
    }

    /// Returns a snapshot holding only the triples about `subject`.
    ///
    /// Provenance and all id allocation state are copied, so ids minted from the
    /// snapshot never collide with ids this store had already minted. The
    /// two stores diverge independently afterwards.
    #[must_use]
    pub fn for_subject(&self, subject: &EntityId) -> Self {
        Self {
            triples: self
                .triples
                .iter()
                .filter(|t| &t.subject == subject)
                .cloned()
                .collect(),
            provenance: self.provenance.clone(),
            next_entity: self.next_entity,
            next_statement: self.next_statement,
            next_reification: self.next_reification,
            minted_unique: self.minted_unique.clone(),
        }
    }
}
