//! I define the position-restricted terms of a [`Quad`](crate::Quad).
//!
//! Each type only has variants for the kinds of [`Term`] that are legal in that position;
//! converting from [`Term`] is fallible.

use crate::{BlankNode, Literal, NamedNode, Term, TermError, TermRef};

/// A term in subject position.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Subject {
    /// See [`Term::NamedNode`]
    NamedNode(NamedNode),
    /// See [`Term::BlankNode`]
    BlankNode(BlankNode),
}

/// A term in object position.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Object {
    /// See [`Term::NamedNode`]
    NamedNode(NamedNode),
    /// See [`Term::BlankNode`]
    BlankNode(BlankNode),
    /// See [`Term::Literal`]
    Literal(Literal),
}

/// A term in graph position.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub enum GraphName {
    /// See [`Term::NamedNode`]
    NamedNode(NamedNode),
    /// See [`Term::BlankNode`]
    BlankNode(BlankNode),
    /// See [`Term::DefaultGraph`]
    #[default]
    DefaultGraph,
}

impl Subject {
    /// Borrow this term.
    pub fn borrow_term(&self) -> TermRef<'_> {
        match self {
            Subject::NamedNode(n) => TermRef::NamedNode(n),
            Subject::BlankNode(b) => TermRef::BlankNode(b),
        }
    }
}

impl Object {
    /// Borrow this term.
    pub fn borrow_term(&self) -> TermRef<'_> {
        match self {
            Object::NamedNode(n) => TermRef::NamedNode(n),
            Object::BlankNode(b) => TermRef::BlankNode(b),
            Object::Literal(l) => TermRef::Literal(l),
        }
    }
}

impl GraphName {
    /// Borrow this term.
    pub fn borrow_term(&self) -> TermRef<'_> {
        match self {
            GraphName::NamedNode(n) => TermRef::NamedNode(n),
            GraphName::BlankNode(b) => TermRef::BlankNode(b),
            GraphName::DefaultGraph => TermRef::DefaultGraph,
        }
    }

    /// Whether this is the default graph.
    pub fn is_default_graph(&self) -> bool {
        matches!(self, GraphName::DefaultGraph)
    }
}

macro_rules! impl_position {
    ($pos:ident, $name:literal, [$($variant:ident),*]) => {
        $(
            impl From<$variant> for $pos {
                fn from(value: $variant) -> Self {
                    $pos::$variant(value)
                }
            }
        )*

        impl From<$pos> for Term {
            fn from(value: $pos) -> Self {
                match value {
                    $( $pos::$variant(t) => Term::$variant(t), )*
                }
            }
        }

        impl TryFrom<Term> for $pos {
            type Error = TermError;

            fn try_from(value: Term) -> Result<Self, Self::Error> {
                match value {
                    $( Term::$variant(t) => Ok($pos::$variant(t)), )*
                    other => Err(TermError::IllegalPosition {
                        kind: other.kind(),
                        position: $name,
                    }),
                }
            }
        }
    };
}

impl_position!(Subject, "subject", [NamedNode, BlankNode]);
impl_position!(Object, "object", [NamedNode, BlankNode, Literal]);

impl From<NamedNode> for GraphName {
    fn from(value: NamedNode) -> Self {
        GraphName::NamedNode(value)
    }
}

impl From<BlankNode> for GraphName {
    fn from(value: BlankNode) -> Self {
        GraphName::BlankNode(value)
    }
}

impl From<GraphName> for Term {
    fn from(value: GraphName) -> Self {
        match value {
            GraphName::NamedNode(n) => Term::NamedNode(n),
            GraphName::BlankNode(b) => Term::BlankNode(b),
            GraphName::DefaultGraph => Term::DefaultGraph,
        }
    }
}

impl TryFrom<Term> for GraphName {
    type Error = TermError;

    fn try_from(value: Term) -> Result<Self, Self::Error> {
        match value {
            Term::NamedNode(n) => Ok(GraphName::NamedNode(n)),
            Term::BlankNode(b) => Ok(GraphName::BlankNode(b)),
            Term::DefaultGraph => Ok(GraphName::DefaultGraph),
            other => Err(TermError::IllegalPosition {
                kind: other.kind(),
                position: "graph name",
            }),
        }
    }
}

impl TryFrom<Term> for NamedNode {
    type Error = TermError;

    fn try_from(value: Term) -> Result<Self, Self::Error> {
        match value {
            Term::NamedNode(n) => Ok(n),
            other => Err(TermError::IllegalPosition {
                kind: other.kind(),
                position: "predicate",
            }),
        }
    }
}
