//! I define [`Quad`], the atomic statement of an RDF dataset.

use crate::{BlankNode, GraphName, NamedNode, Object, Subject, Term, TermError, TermRef};

/// An RDF statement: subject, predicate, object and graph name.
///
/// Quads are immutable once built;
/// see [`map_blank_nodes`](Quad::map_blank_nodes) to derive a relabelled copy.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Quad {
    subject: Subject,
    predicate: NamedNode,
    object: Object,
    graph: GraphName,
}

impl Quad {
    /// Build a new quad.
    pub fn new(
        subject: impl Into<Subject>,
        predicate: NamedNode,
        object: impl Into<Object>,
        graph: impl Into<GraphName>,
    ) -> Self {
        Quad {
            subject: subject.into(),
            predicate,
            object: object.into(),
            graph: graph.into(),
        }
    }

    /// Build a new quad in the default graph.
    pub fn triple(subject: impl Into<Subject>, predicate: NamedNode, object: impl Into<Object>) -> Self {
        Self::new(subject, predicate, object, GraphName::DefaultGraph)
    }

    /// Build a new quad from unrestricted terms,
    /// failing if any of them is not allowed in its position.
    pub fn try_from_terms(s: Term, p: Term, o: Term, g: Term) -> Result<Self, TermError> {
        Ok(Quad {
            subject: s.try_into()?,
            predicate: p.try_into()?,
            object: o.try_into()?,
            graph: g.try_into()?,
        })
    }

    /// The subject of this quad.
    pub fn s(&self) -> &Subject {
        &self.subject
    }

    /// The predicate of this quad.
    pub fn p(&self) -> &NamedNode {
        &self.predicate
    }

    /// The object of this quad.
    pub fn o(&self) -> &Object {
        &self.object
    }

    /// The graph name of this quad.
    pub fn g(&self) -> &GraphName {
        &self.graph
    }

    /// The four components of this quad, in subject, predicate, object, graph order.
    pub fn spog(&self) -> [TermRef<'_>; 4] {
        [
            self.subject.borrow_term(),
            TermRef::NamedNode(&self.predicate),
            self.object.borrow_term(),
            self.graph.borrow_term(),
        ]
    }

    /// Return a copy of this quad where every blank node has been replaced by `f`.
    ///
    /// Other terms are cloned unchanged.
    pub fn map_blank_nodes<F>(&self, mut f: F) -> Quad
    where
        F: FnMut(&BlankNode) -> BlankNode,
    {
        let subject = match &self.subject {
            Subject::BlankNode(b) => Subject::BlankNode(f(b)),
            other => other.clone(),
        };
        let object = match &self.object {
            Object::BlankNode(b) => Object::BlankNode(f(b)),
            other => other.clone(),
        };
        let graph = match &self.graph {
            GraphName::BlankNode(b) => GraphName::BlankNode(f(b)),
            other => other.clone(),
        };
        Quad {
            subject,
            predicate: self.predicate.clone(),
            object,
            graph,
        }
    }
}
