//! Parse results.
//!
//! Nodes are values. Operators that "extend" a node build a new one, so a
//! node bound to a variable is never changed by later uses of it.

use citegraph_foundation::{CgVec, EntityId, Span};
use citegraph_store::Property;

/// A parse result produced by the grammar rules.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    /// An ordered list of entity ids.
    Entities {
        /// The ids, in source order.
        ids: CgVec<EntityId>,
        /// Where the list starts.
        span: Span,
    },
    /// An ordered list of properties not yet attached to a subject.
    Descriptor {
        /// The properties, in source order.
        properties: CgVec<Property>,
        /// Where the descriptor starts.
        span: Span,
    },
    /// Marker left by a completed `@name := value` binding.
    Assignment {
        /// Position of the `:=` operator.
        span: Span,
    },
    /// The `@name` target of an assignment.
    VariableName {
        /// Name without the sigil.
        name: String,
        /// Where the name was written.
        span: Span,
    },
}

impl Node {
    /// Creates a single-entity list.
    #[must_use]
    pub fn entity(id: EntityId, span: Span) -> Self {
        Self::Entities {
            ids: CgVec::unit(id),
            span,
        }
    }

    /// Returns the kind name used in diagnostics.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Entities { .. } => "entities",
            Self::Descriptor { .. } => "descriptor",
            Self::Assignment { .. } => "assignment",
            Self::VariableName { .. } => "variable",
        }
    }

    /// Returns the textual form used in diagnostics.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::VariableName { name, .. } => format!("variable:{name}"),
            other => other.kind_name().to_string(),
        }
    }

    /// Returns where this node was written.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Entities { span, .. }
            | Self::Descriptor { span, .. }
            | Self::Assignment { span }
            | Self::VariableName { span, .. } => *span,
        }
    }

    /// Returns the entity ids if this is an entity list.
    #[must_use]
    pub fn as_entities(&self) -> Option<&CgVec<EntityId>> {
        match self {
            Self::Entities { ids, .. } => Some(ids),
            _ => None,
        }
    }

    /// Returns the properties if this is a descriptor.
    #[must_use]
    pub fn as_descriptor(&self) -> Option<&CgVec<Property>> {
        match self {
            Self::Descriptor { properties, .. } => Some(properties),
            _ => None,
        }
    }
}
