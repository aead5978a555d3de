//! This crate is part of the fedi toolkit,
//! the linked-data layer of a federated social server.
//!
//! I define the [RDF] term and quad model
//! that the canonicalization engine ([`fedi_c14n`]) consumes.
//!
//! Terms are a closed sum type ([`Term`]).
//! Each position of a [`Quad`] only accepts the kinds of term that are legal there
//! ([`Subject`], [`NamedNode`] as predicate, [`Object`], [`GraphName`]),
//! so that an ill-formed quad can not be represented.
//!
//! [RDF]: https://www.w3.org/TR/rdf11-concepts/
//! [`fedi_c14n`]: https://docs.rs/fedi_c14n
#![deny(missing_docs)]

use thiserror::Error;

mod blank_node;
pub use blank_node::*;
mod iri;
pub use iri::*;
mod literal;
pub use literal::*;
pub mod ns;
mod position;
pub use position::*;
mod quad;
pub use quad::*;

/// The different kinds of terms that a [`Term`] can represent.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialOrd, PartialEq)]
pub enum TermKind {
    /// An [RDF IRI](https://www.w3.org/TR/rdf11-concepts/#section-IRIs)
    NamedNode,
    /// An RDF [blank node](https://www.w3.org/TR/rdf11-concepts/#section-blank-nodes)
    BlankNode,
    /// An RDF [literal](https://www.w3.org/TR/rdf11-concepts/#section-Graph-Literal)
    Literal,
    /// The unnamed graph of a dataset
    DefaultGraph,
}

/// An RDF term, owning its data.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Term {
    /// An [RDF IRI](https://www.w3.org/TR/rdf11-concepts/#section-IRIs)
    NamedNode(NamedNode),
    /// An RDF [blank node](https://www.w3.org/TR/rdf11-concepts/#section-blank-nodes)
    BlankNode(BlankNode),
    /// An RDF [literal](https://www.w3.org/TR/rdf11-concepts/#section-Graph-Literal)
    Literal(Literal),
    /// The unnamed graph marker; only meaningful in graph position.
    DefaultGraph,
}

impl Term {
    /// Which kind of term this is.
    pub fn kind(&self) -> TermKind {
        self.borrow_term().kind()
    }

    /// Borrow this term.
    pub fn borrow_term(&self) -> TermRef<'_> {
        match self {
            Term::NamedNode(n) => TermRef::NamedNode(n),
            Term::BlankNode(b) => TermRef::BlankNode(b),
            Term::Literal(l) => TermRef::Literal(l),
            Term::DefaultGraph => TermRef::DefaultGraph,
        }
    }

    /// The `value` of this term: the IRI, the blank node identifier,
    /// or the lexical form of a literal.
    ///
    /// The default graph has an empty value.
    pub fn value(&self) -> &str {
        self.borrow_term().value()
    }

    /// The identifier of this term if it is a blank node.
    pub fn bnode_id(&self) -> Option<&str> {
        self.borrow_term().bnode_id()
    }
}

impl From<NamedNode> for Term {
    fn from(value: NamedNode) -> Self {
        Term::NamedNode(value)
    }
}

impl From<BlankNode> for Term {
    fn from(value: BlankNode) -> Self {
        Term::BlankNode(value)
    }
}

impl From<Literal> for Term {
    fn from(value: Literal) -> Self {
        Term::Literal(value)
    }
}

/// A borrowed view of a [`Term`], or of any position-restricted term.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TermRef<'a> {
    /// See [`Term::NamedNode`]
    NamedNode(&'a NamedNode),
    /// See [`Term::BlankNode`]
    BlankNode(&'a BlankNode),
    /// See [`Term::Literal`]
    Literal(&'a Literal),
    /// See [`Term::DefaultGraph`]
    DefaultGraph,
}

impl<'a> TermRef<'a> {
    /// Which kind of term this is.
    pub fn kind(&self) -> TermKind {
        match self {
            TermRef::NamedNode(_) => TermKind::NamedNode,
            TermRef::BlankNode(_) => TermKind::BlankNode,
            TermRef::Literal(_) => TermKind::Literal,
            TermRef::DefaultGraph => TermKind::DefaultGraph,
        }
    }

    /// See [`Term::value`]
    pub fn value(&self) -> &'a str {
        match self {
            TermRef::NamedNode(n) => n.as_str(),
            TermRef::BlankNode(b) => b.as_str(),
            TermRef::Literal(l) => l.value(),
            TermRef::DefaultGraph => "",
        }
    }

    /// See [`Term::bnode_id`]
    pub fn bnode_id(&self) -> Option<&'a str> {
        if let TermRef::BlankNode(b) = self {
            Some(b.as_str())
        } else {
            None
        }
    }

    /// Copy the borrowed data into an owned [`Term`].
    pub fn to_term(&self) -> Term {
        match self {
            TermRef::NamedNode(n) => Term::NamedNode((*n).clone()),
            TermRef::BlankNode(b) => Term::BlankNode((*b).clone()),
            TermRef::Literal(l) => Term::Literal((*l).clone()),
            TermRef::DefaultGraph => Term::DefaultGraph,
        }
    }
}

/// Error raised when building an invalid term or quad.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TermError {
    /// The given text is not an absolute IRI.
    #[error("The given IRI '{iri}' is not a valid absolute IRI: {reason}")]
    InvalidIri {
        /// The rejected text
        iri: String,
        /// Why it was rejected
        reason: String,
    },
    /// The given text does not comply with Turtle's `BLANK_NODE_LABEL`.
    #[error("The given blank node identifier '{0}' does not comply with Turtle's BLANK_NODE_LABEL")]
    InvalidBnodeId(String),
    /// The given text is not a language tag.
    #[error("The given language tag '{0}' is not a valid BCP47 language tag")]
    InvalidLanguageTag(String),
    /// The term kind is not allowed in that quad position.
    #[error("A {kind:?} can not be used as {position}")]
    IllegalPosition {
        /// The kind of the rejected term
        kind: TermKind,
        /// The position it was rejected from
        position: &'static str,
    },
}

#[cfg(test)]
mod test;
