//! Namespaced identifiers for entities and statements.
//!
//! Every node of the graph (entity, predicate, object, or statement) is an
//! [`EntityId`]. Equality is by full namespaced value: `User("x")` and
//! `Unique("x")` are different entities.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// The three positions of a reified statement.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReificationRole {
    /// The statement's subject.
    Subject,
    /// The statement's predicate.
    Predicate,
    /// The statement's object.
    Object,
}

impl ReificationRole {
    /// All roles, in the order reification triples are emitted.
    pub const ALL: [Self; 3] = [Self::Subject, Self::Predicate, Self::Object];

    /// Name of the predicate asserting this role.
    #[must_use]
    pub const fn predicate_name(self) -> &'static str {
        match self {
            Self::Subject => "rdf:subject",
            Self::Predicate => "rdf:predicate",
            Self::Object => "rdf:object",
        }
    }

    /// One-letter suffix used in reification statement ids.
    #[must_use]
    pub const fn suffix(self) -> char {
        match self {
            Self::Subject => 's',
            Self::Predicate => 'p',
            Self::Object => 'o',
        }
    }

    fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "s" => Some(Self::Subject),
            "p" => Some(Self::Predicate),
            "o" => Some(Self::Object),
            _ => None,
        }
    }
}

/// Identifier of an entity or statement.
///
/// # Namespaces
/// - `User`: written by the author; the same text is the same entity
/// - `Unique`: text containing the anonymous marker, never reused
/// - `Auto`: drawn from the entity counter without any text
/// - `Statement`: auto-generated id of a main triple
/// - `ReificationPart`: id of one of the three triples reifying a statement
/// - `Reification`: the fixed predicates used by reification triples
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EntityId {
    /// User-named entity.
    User(String),
    /// Anonymous entity whose markers were replaced by fresh counter values.
    Unique(String),
    /// Entity allocated without text.
    Auto(u64),
    /// Auto-generated statement id.
    Statement(u64),
    /// One of the three triples of a reification group.
    ReificationPart {
        /// The reification group counter value.
        group: u64,
        /// Which position of the reified statement this triple asserts.
        role: ReificationRole,
    },
    /// Reification predicate (`rdf:subject`, `rdf:predicate`, `rdf:object`).
    Reification(ReificationRole),
}

impl EntityId {
    /// Creates a user-named id.
    #[must_use]
    pub fn user(text: impl Into<String>) -> Self {
        Self::User(text.into())
    }

    /// Creates a unique id from already-expanded text.
    #[must_use]
    pub fn unique(text: impl Into<String>) -> Self {
        Self::Unique(text.into())
    }

    /// Returns the namespace prefix of this id's textual form.
    #[must_use]
    pub const fn namespace(&self) -> &'static str {
        match self {
            Self::User(_) => "_:user",
            Self::Unique(_) => "_:uniq",
            Self::Auto(_) => "_:auto_ent",
            Self::Statement(_) => "_:auto_expr",
            Self::ReificationPart { .. } => "_:auto_reify",
            Self::Reification(_) => "rdf",
        }
    }

    /// Returns true if this id was minted for a statement (main or reification).
    #[must_use]
    pub const fn is_statement(&self) -> bool {
        matches!(self, Self::Statement(_) | Self::ReificationPart { .. })
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User(text) | Self::Unique(text) => write!(f, "{}/{text}", self.namespace()),
            Self::Auto(n) | Self::Statement(n) => write!(f, "{}/{n}", self.namespace()),
            Self::ReificationPart { group, role } => {
                write!(f, "{}/{group}.{}", self.namespace(), role.suffix())
            }
            Self::Reification(role) => f.write_str(role.predicate_name()),
        }
    }
}

impl FromStr for EntityId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::invalid_identifier(s);
        let counter = |text: &str| text.parse::<u64>().map_err(|_| invalid());

        if let Some(role) = ReificationRole::ALL
            .into_iter()
            .find(|role| role.predicate_name() == s)
        {
            return Ok(Self::Reification(role));
        }

        let (namespace, rest) = s.split_once('/').ok_or_else(invalid)?;
        if rest.is_empty() {
            return Err(invalid());
        }
        match namespace {
            "_:user" => Ok(Self::User(rest.to_string())),
            "_:uniq" => Ok(Self::Unique(rest.to_string())),
            "_:auto_ent" => Ok(Self::Auto(counter(rest)?)),
            "_:auto_expr" => Ok(Self::Statement(counter(rest)?)),
            "_:auto_reify" => {
                let (group, suffix) = rest.split_once('.').ok_or_else(invalid)?;
                let role = ReificationRole::from_suffix(suffix).ok_or_else(invalid)?;
                Ok(Self::ReificationPart {
                    group: counter(group)?,
                    role,
                })
            }
            _ => Err(invalid()),
        }
    }
}
