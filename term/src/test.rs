use super::*;
use crate::ns::xsd;

const ALICE: &str = "https://social.example/users/alice";
const KNOWS: &str = "http://xmlns.com/foaf/0.1/knows";

fn iri(txt: &str) -> NamedNode {
    NamedNode::new_unchecked(txt)
}

fn bnode(id: &str) -> BlankNode {
    BlankNode::new_unchecked(id)
}

#[test]
fn term_kinds_and_values() {
    let terms = [
        (Term::from(iri(ALICE)), TermKind::NamedNode, ALICE),
        (Term::from(bnode("b0")), TermKind::BlankNode, "b0"),
        (Term::from(Literal::new_simple("hi")), TermKind::Literal, "hi"),
        (Term::DefaultGraph, TermKind::DefaultGraph, ""),
    ];
    for (term, kind, value) in terms {
        assert_eq!(term.kind(), kind);
        assert_eq!(term.value(), value);
        assert_eq!(term.borrow_term().to_term(), term);
    }
    assert_eq!(Term::from(bnode("b0")).bnode_id(), Some("b0"));
    assert_eq!(Term::from(iri(ALICE)).bnode_id(), None);
}

#[test]
fn position_restrictions() {
    assert!(Subject::try_from(Term::from(bnode("b0"))).is_ok());
    assert!(matches!(
        Subject::try_from(Term::from(Literal::new_simple("x"))),
        Err(TermError::IllegalPosition {
            kind: TermKind::Literal,
            position: "subject"
        })
    ));
    assert!(Subject::try_from(Term::DefaultGraph).is_err());

    assert!(NamedNode::try_from(Term::from(iri(KNOWS))).is_ok());
    assert!(NamedNode::try_from(Term::from(bnode("p"))).is_err());

    assert!(Object::try_from(Term::from(Literal::new_simple("x"))).is_ok());
    assert!(Object::try_from(Term::DefaultGraph).is_err());

    assert_eq!(
        GraphName::try_from(Term::DefaultGraph).unwrap(),
        GraphName::DefaultGraph
    );
    assert!(GraphName::try_from(Term::from(Literal::new_simple("g"))).is_err());
}

#[test]
fn quad_from_terms() {
    let q = Quad::try_from_terms(
        bnode("b0").into(),
        iri(KNOWS).into(),
        Literal::new_typed("1", iri(xsd::integer)).into(),
        Term::DefaultGraph,
    )
    .unwrap();
    assert_eq!(q.s(), &Subject::BlankNode(bnode("b0")));
    assert_eq!(q.p(), KNOWS);
    assert!(q.g().is_default_graph());

    let err = Quad::try_from_terms(
        iri(ALICE).into(),
        bnode("p").into(),
        iri(ALICE).into(),
        Term::DefaultGraph,
    );
    assert!(err.is_err());
}

#[test]
fn quad_spog() {
    let q = Quad::new(bnode("s"), iri(KNOWS), bnode("o"), bnode("g"));
    let ids: Vec<_> = q.spog().iter().map(TermRef::bnode_id).collect();
    assert_eq!(ids, [Some("s"), None, Some("o"), Some("g")]);
}

#[test]
fn map_blank_nodes() {
    let q = Quad::new(bnode("x"), iri(KNOWS), bnode("y"), bnode("x"));
    let relabelled = q.map_blank_nodes(|b| bnode(&format!("new_{}", b.as_str())));
    assert_eq!(relabelled.s(), &Subject::BlankNode(bnode("new_x")));
    assert_eq!(relabelled.o(), &Object::BlankNode(bnode("new_y")));
    assert_eq!(relabelled.g(), &GraphName::BlankNode(bnode("new_x")));
    assert_eq!(relabelled.p(), q.p());

    let q = Quad::triple(iri(ALICE), iri(KNOWS), Literal::new_simple("x"));
    assert_eq!(q.map_blank_nodes(|_| unreachable!()), q);
}
