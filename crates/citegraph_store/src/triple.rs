//! Identified statements.

use std::fmt;

use citegraph_foundation::EntityId;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A subject/predicate/object fact with its own statement id.
///
/// The id is itself an [`EntityId`], so a triple can be the subject of
/// another triple once it has been reified.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Triple {
    /// Statement id.
    pub id: EntityId,
    /// Subject of the statement.
    pub subject: EntityId,
    /// Predicate of the statement.
    pub predicate: EntityId,
    /// Object of the statement.
    pub object: EntityId,
}

impl Triple {
    /// Creates a new triple.
    #[must_use]
    pub fn new(id: EntityId, subject: EntityId, predicate: EntityId, object: EntityId) -> Self {
        Self {
            id,
            subject,
            predicate,
            object,
        }
    }

    /// Returns the statement without its id.
    #[must_use]
    pub fn spo(&self) -> (&EntityId, &EntityId, &EntityId) {
        (&self.subject, &self.predicate, &self.object)
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.id, self.subject, self.predicate, self.object
        )
    }
}
