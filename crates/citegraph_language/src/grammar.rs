//! The citegraph grammar.
//!
//! Operators, loosest to tightest:
//!
//! | token        | power | rule                                          |
//! |--------------|-------|-----------------------------------------------|
//! | terminator   | 1     | joins entity lists or descriptors             |
//! | `:=`         | 2     | binds a variable                              |
//! | `=>`         | 50    | describes entities, or cites a descriptor     |
//! | `!`          | 60    | names the statement a property will produce   |
//! | `:`          | 70    | builds properties from predicates and objects |
//! | `(`          | 100   | groups                                        |
//!
//! Description is right-associative (its right operand is parsed at 49),
//! so `a => b:c => d:e` cites `d:e` on the statement `a b c`.
//!
//! Rules emit triples as a side effect the moment a description meets an
//! entity list, so statement ids follow source order.

use tracing::debug;

use citegraph_foundation::{CgVec, EntityId, Error, Result, Span};
use citegraph_store::{GraphStore, Property, attach_with_limit};

use crate::config::ParseConfig;
use crate::env::Environment;
use crate::node::Node;
use crate::parser::{Grammar, Parser, SymbolTable};
use crate::token::{Token, TokenKind};

/// Left binding powers of the grammar's symbols.
pub mod binding_power {
    /// Tokens that never continue an expression.
    pub const NONE: u8 = 0;
    /// Whitespace and `;`.
    pub const TERMINATOR: u8 = 1;
    /// `:=`
    pub const ASSIGNMENT: u8 = 2;
    /// `=>`
    pub const DESCRIPTION: u8 = 50;
    /// Right operand of `=>`, one below [`DESCRIPTION`] for right associativity.
    pub const DESCRIPTION_RIGHT: u8 = DESCRIPTION - 1;
    /// `!`
    pub const LABEL: u8 = 60;
    /// `:`
    pub const PROPERTY: u8 = 70;
    /// `(`
    pub const GROUP: u8 = 100;
}

/// Parser specialized to the citegraph grammar.
pub type GraphParser<'src> = Parser<'src, GraphBuilder>;

/// Grammar state: the store being filled and the variables bound so far.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    store: GraphStore,
    env: Environment,
    max_citation_depth: usize,
}

impl GraphBuilder {
    /// Creates an empty builder using the limits in `config`.
    #[must_use]
    pub fn new(config: &ParseConfig) -> Self {
        Self {
            store: GraphStore::new(),
            env: Environment::new(),
            max_citation_depth: config.max_citation_depth,
        }
    }

    /// Returns the store built so far.
    #[must_use]
    pub fn store(&self) -> &GraphStore {
        &self.store
    }

    /// Returns the variables bound so far.
    #[must_use]
    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Splits the builder into its store and environment.
    #[must_use]
    pub fn into_parts(self) -> (GraphStore, Environment) {
        (self.store, self.env)
    }

    fn attach(&mut self, provenance: Span, subject: &EntityId, property: &Property) -> Result<EntityId> {
        attach_with_limit(
            &mut self.store,
            provenance,
            subject,
            property,
            self.max_citation_depth,
        )
    }
}

impl Grammar for GraphBuilder {
    type Node = Node;

    fn register(symbols: &mut SymbolTable<Self>) {
        use binding_power as bp;

        symbols.symbol(TokenKind::Eof, bp::NONE);
        symbols.symbol(TokenKind::RParen, bp::NONE);
        symbols
            .symbol(TokenKind::Terminator, bp::TERMINATOR)
            .prefix(terminator_prefix)
            .infix(terminator_infix);
        symbols.symbol(TokenKind::LParen, bp::GROUP).prefix(group);
        symbols.symbol(TokenKind::Identifier, bp::NONE).prefix(identifier);
        symbols.symbol(TokenKind::Variable, bp::NONE).prefix(variable_name);
        symbols.symbol(TokenKind::Reference, bp::NONE).prefix(reference);
        symbols.symbol(TokenKind::Assign, bp::ASSIGNMENT).infix(assignment);
        symbols.symbol(TokenKind::Arrow, bp::DESCRIPTION).infix(description);
        symbols.symbol(TokenKind::Bang, bp::LABEL).infix(label);
        symbols.symbol(TokenKind::Colon, bp::PROPERTY).infix(property);
    }
}

// =============================================================================
// Diagnostics
// =============================================================================

fn unexpected(context: &str, expected: &[&str], found: Option<&Node>, at: Span) -> Error {
    match found {
        Some(node) => Error::unexpected_symbol(context, expected, node.describe(), node.span()),
        None => Error::unexpected_symbol(context, expected, "nothing", at),
    }
}

fn expect_entities(node: Option<Node>, context: &str, at: Span) -> Result<(CgVec<EntityId>, Span)> {
    match node {
        Some(Node::Entities { ids, span }) => Ok((ids, span)),
        other => Err(unexpected(context, &["entities"], other.as_ref(), at)),
    }
}

fn expect_descriptor(node: Option<Node>, context: &str, at: Span) -> Result<CgVec<Property>> {
    match node {
        Some(Node::Descriptor { properties, .. }) => Ok(properties),
        other => Err(unexpected(context, &["descriptor"], other.as_ref(), at)),
    }
}

// =============================================================================
// Prefix rules
// =============================================================================

fn terminator_prefix(p: &mut GraphParser<'_>, _token: Token) -> Result<Option<Node>> {
    if p.at_construct_end() {
        return Ok(None);
    }
    p.expression(binding_power::NONE)
}

fn group(p: &mut GraphParser<'_>, _token: Token) -> Result<Option<Node>> {
    let inner = p.expression(binding_power::NONE)?;
    p.advance(Some(TokenKind::RParen))?;
    Ok(inner)
}

fn identifier(p: &mut GraphParser<'_>, token: Token) -> Result<Option<Node>> {
    let id = p.grammar_mut().store.allocate_entity_id(token.value.as_deref());
    Ok(Some(Node::entity(id, token.span)))
}

fn variable_name(_p: &mut GraphParser<'_>, token: Token) -> Result<Option<Node>> {
    Ok(Some(Node::VariableName {
        name: token.value.unwrap_or_default(),
        span: token.span,
    }))
}

fn reference(p: &mut GraphParser<'_>, token: Token) -> Result<Option<Node>> {
    let name = token.value.unwrap_or_default();
    p.grammar().env.resolve(&name, token.span).map(Some)
}

// =============================================================================
// Infix rules
// =============================================================================

/// Joins two expressions separated by whitespace or `;`.
///
/// Entity lists and descriptors concatenate with a following expression of
/// the same kind. A completed assignment contributes nothing and is spliced
/// out, except inside a descriptor where it is an error.
fn terminator_infix(
    p: &mut GraphParser<'_>,
    token: Token,
    left: Option<Node>,
) -> Result<Option<Node>> {
    use binding_power::TERMINATOR;

    if p.at_construct_end() {
        return Ok(left);
    }

    match left {
        None | Some(Node::Assignment { .. }) => p.expression(TERMINATOR),
        Some(Node::Entities { ids, span }) => match p.expression(TERMINATOR)? {
            None | Some(Node::Assignment { .. }) => Ok(Some(Node::Entities { ids, span })),
            Some(Node::Entities { ids: more, .. }) => Ok(Some(Node::Entities {
                ids: ids.concat(&more),
                span,
            })),
            Some(other) => Err(unexpected("entities", &["entities"], Some(&other), token.span)),
        },
        Some(Node::Descriptor { properties, span }) => match p.expression(TERMINATOR)? {
            None => Ok(Some(Node::Descriptor { properties, span })),
            Some(Node::Descriptor {
                properties: more, ..
            }) => Ok(Some(Node::Descriptor {
                properties: properties.concat(&more),
                span,
            })),
            Some(other) => Err(unexpected(
                "descriptor",
                &["descriptor"],
                Some(&other),
                token.span,
            )),
        },
        Some(other @ Node::VariableName { .. }) => Err(unexpected(
            "expression",
            &["entities", "descriptor", "assignment"],
            Some(&other),
            token.span,
        )),
    }
}

/// `@name := value` binds an entity list or descriptor.
fn assignment(p: &mut GraphParser<'_>, token: Token, left: Option<Node>) -> Result<Option<Node>> {
    let (name, name_span) = match left {
        Some(Node::VariableName { name, span }) => (name, span),
        other => {
            return Err(unexpected(
                "assignment target",
                &["variable"],
                other.as_ref(),
                token.span,
            ));
        }
    };

    // Checked before the value is parsed so a rejected redefinition emits
    // no triples.
    if p.grammar().env.is_defined(&name) {
        return Err(Error::variable_redefined(name, name_span));
    }

    let value = p.expression(binding_power::ASSIGNMENT)?;
    match value {
        Some(node @ (Node::Entities { .. } | Node::Descriptor { .. })) => {
            p.grammar_mut().env.define(&name, node, name_span)?;
            Ok(Some(Node::Assignment { span: token.span }))
        }
        other => Err(unexpected(
            "assignment value",
            &["entities", "descriptor"],
            other.as_ref(),
            token.span,
        )),
    }
}

/// `predicates : objects` builds one property per pair, predicate-major.
fn property(p: &mut GraphParser<'_>, token: Token, left: Option<Node>) -> Result<Option<Node>> {
    let (predicates, span) =
        expect_entities(left, "predicate for property (colon) operator", token.span)?;
    let right = p.expression(binding_power::PROPERTY)?;
    let (objects, _) = expect_entities(right, "object for property (colon) operator", token.span)?;

    let properties = predicates
        .iter()
        .flat_map(|predicate| {
            objects
                .iter()
                .map(move |object| Property::new(predicate.clone(), object.clone(), span))
        })
        .collect();
    Ok(Some(Node::Descriptor { properties, span }))
}

/// `subjects => descriptor` emits triples; `descriptor => descriptor` cites.
fn description(
    p: &mut GraphParser<'_>,
    token: Token,
    left: Option<Node>,
) -> Result<Option<Node>> {
    match left {
        Some(Node::Entities { ids, span }) => {
            let right = p.expression(binding_power::DESCRIPTION_RIGHT)?;
            let properties = expect_descriptor(
                right,
                "target (right hand operand) for description (arrow) operator",
                token.span,
            )?;
            let builder = p.grammar_mut();
            for subject in &ids {
                for property in &properties {
                    builder.attach(token.span, subject, property)?;
                }
            }
            debug!(
                subjects = ids.len(),
                properties = properties.len(),
                "description attached"
            );
            Ok(Some(Node::Entities { ids, span }))
        }
        Some(Node::Descriptor { properties, span }) => {
            let right = p.expression(binding_power::DESCRIPTION_RIGHT)?;
            let citations = expect_descriptor(
                right,
                "target (right hand operand) for citation (arrow) operator",
                token.span,
            )?;
            Ok(Some(Node::Descriptor {
                properties: properties.map(|property| property.cited_by(&citations)),
                span,
            }))
        }
        other => Err(unexpected(
            "subject (left hand operand) for arrow operator",
            &["entities", "descriptor"],
            other.as_ref(),
            token.span,
        )),
    }
}

/// `property ! name` gives the statement an explicit id.
fn label(p: &mut GraphParser<'_>, token: Token, left: Option<Node>) -> Result<Option<Node>> {
    let (properties, span) = match left {
        Some(Node::Descriptor { properties, span }) => (properties, span),
        other => {
            return Err(unexpected(
                "label target",
                &["descriptor"],
                other.as_ref(),
                token.span,
            ));
        }
    };
    let target = match properties.first() {
        Some(property) if properties.len() == 1 => property.clone(),
        _ => return Err(Error::label_target_arity(properties.len(), token.span)),
    };

    let right = p.expression(binding_power::LABEL)?;
    let (names, _) = expect_entities(right, "label", token.span)?;
    let name = match names.first() {
        Some(name) if names.len() == 1 => name.clone(),
        _ => return Err(Error::label_source_arity(names.len(), token.span)),
    };

    Ok(Some(Node::Descriptor {
        properties: CgVec::unit(target.labelled(name)),
        span,
    }))
}
