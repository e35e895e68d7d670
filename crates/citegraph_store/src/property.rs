//! Properties waiting to be attached to a subject.

use citegraph_foundation::{CgVec, EntityId, Span};

/// A predicate/object pair that becomes a triple once it meets a subject.
///
/// `citations` are properties to attach to the statement this property
/// eventually produces; `label` replaces that statement's auto-generated id.
/// Properties are values: every "modification" returns a new property and
/// leaves shared copies untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Property {
    /// The predicate.
    pub predicate: EntityId,
    /// The object.
    pub object: EntityId,
    /// Properties citing the statement this property produces.
    pub citations: CgVec<Property>,
    /// Explicit statement id.
    pub label: Option<EntityId>,
    /// Where the property was written.
    pub span: Span,
}

impl Property {
    /// Creates a property with no citations and no label.
    #[must_use]
    pub fn new(predicate: EntityId, object: EntityId, span: Span) -> Self {
        Self {
            predicate,
            object,
            citations: CgVec::new(),
            label: None,
            span,
        }
    }

    /// Returns a copy citing `extra` in addition to the existing citations.
    #[must_use]
    pub fn cited_by(&self, extra: &CgVec<Property>) -> Self {
        Self {
            citations: self.citations.concat(extra),
            ..self.clone()
        }
    }

    /// Returns a copy whose statement will use `label` as its id.
    #[must_use]
    pub fn labelled(&self, label: EntityId) -> Self {
        Self {
            label: Some(label),
            ..self.clone()
        }
    }

    /// Returns true if attaching this property must reify its statement.
    #[must_use]
    pub fn needs_reification(&self) -> bool {
        !self.citations.is_empty() || self.label.is_some()
    }
}
