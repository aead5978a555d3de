//! Canonical N-Quads

use fedi_rdf::ns::xsd;
use fedi_rdf::{Quad, TermRef};

/// Serialize a term in canonical n-quads, followed by a space.
///
/// The default graph is not serialized at all.
pub fn nq(term: TermRef<'_>, buffer: &mut String) {
    match term {
        TermRef::NamedNode(iri) => {
            buffer.push('<');
            buffer.push_str(iri.as_str());
            buffer.push('>');
        }
        TermRef::BlankNode(bnode) => {
            buffer.push_str("_:");
            buffer.push_str(bnode.as_str());
        }
        TermRef::Literal(lit) => {
            buffer.push('"');
            for c in lit.value().chars() {
                match c {
                    '"' => buffer.push_str("\\\""),
                    '\\' => buffer.push_str("\\\\"),
                    '\n' => buffer.push_str("\\n"),
                    '\r' => buffer.push_str("\\r"),
                    _ => buffer.push(c),
                }
            }
            buffer.push('"');
            if let Some(tag) = lit.language() {
                buffer.push('@');
                buffer.push_str(tag);
            } else if lit.datatype().as_str() != xsd::string {
                buffer.push_str("^^<");
                buffer.push_str(lit.datatype().as_str());
                buffer.push('>');
            }
        }
        TermRef::DefaultGraph => return,
    }
    buffer.push(' ');
}

/// Append the canonical n-quads line of `quad` to `buffer`, including the final newline.
pub fn nq_quad(quad: &Quad, buffer: &mut String) {
    for term in quad.spog() {
        nq(term, buffer);
    }
    buffer.push_str(".\n");
}

/// Serialize `quad` as a canonical n-quads line, terminated by `\n`.
pub fn serialize_quad(quad: &Quad) -> String {
    let mut line = String::new();
    nq_quad(quad, &mut line);
    line
}

/// Serialize `quads` in canonical n-quads.
///
/// The lines are sorted in codepoint order, which makes the output
/// independent of the order in which the quads are provided.
/// Blank node labels are kept as is;
/// see [`normalize`](crate::rdfc10::normalize) to also canonicalize them.
pub fn serialize_quads<'a, I>(quads: I) -> String
where
    I: IntoIterator<Item = &'a Quad>,
{
    let mut lines: Vec<String> = quads.into_iter().map(serialize_quad).collect();
    lines.sort_unstable();
    lines.concat()
}

#[cfg(test)]
mod test {
    use super::*;
    use fedi_rdf::ns::rdf;
    use fedi_rdf::{BlankNode, GraphName, Literal, NamedNode};
    use test_case::test_case;

    fn iri(txt: &str) -> NamedNode {
        NamedNode::new_unchecked(txt)
    }

    #[test_case(Literal::new_simple("hello"), r#""hello" "#; "xsd string has no suffix")]
    #[test_case(Literal::new_simple("say \"hi\"\n"), r#""say \"hi\"\n" "#; "quotes and newline")]
    #[test_case(Literal::new_simple("a\\b\rc"), r#""a\\b\rc" "#; "backslash and carriage return")]
    #[test_case(Literal::new_simple("tab\there\u{8}é"), "\"tab\there\u{8}é\" "; "other characters untouched")]
    #[test_case(Literal::new_lang_unchecked("chat", "fr"), r#""chat"@fr "#; "language tag")]
    #[test_case(Literal::new_typed("42", iri("http://www.w3.org/2001/XMLSchema#integer")), r#""42"^^<http://www.w3.org/2001/XMLSchema#integer> "#; "other datatype")]
    fn literal(lit: Literal, expected: &str) {
        let mut buffer = String::new();
        nq(TermRef::Literal(&lit), &mut buffer);
        assert_eq!(buffer, expected);
    }

    #[test]
    fn lang_string_never_gets_datatype() {
        let lit = Literal::new_lang_unchecked("x", "en");
        assert_eq!(lit.datatype(), rdf::langString);
        let mut buffer = String::new();
        nq(TermRef::Literal(&lit), &mut buffer);
        assert!(!buffer.contains("^^"));
    }

    #[test]
    fn iri_and_bnode_not_escaped() {
        let mut buffer = String::new();
        nq(TermRef::NamedNode(&iri("tag:a\"b")), &mut buffer);
        nq(TermRef::BlankNode(&BlankNode::new_unchecked("x\\y")), &mut buffer);
        nq(TermRef::DefaultGraph, &mut buffer);
        assert_eq!(buffer, "<tag:a\"b> _:x\\y ");
    }

    #[test]
    fn quad_lines() {
        let s = BlankNode::new_unchecked("b0");
        let q1 = Quad::triple(s.clone(), iri("tag:p"), Literal::new_simple("o"));
        assert_eq!(serialize_quad(&q1), "_:b0 <tag:p> \"o\" .\n");

        let q2 = Quad::new(s, iri("tag:p"), iri("tag:o"), GraphName::from(iri("tag:g")));
        assert_eq!(serialize_quad(&q2), "_:b0 <tag:p> <tag:o> <tag:g> .\n");
    }

    #[test]
    fn sorted_concatenation() {
        let q1 = Quad::triple(iri("tag:b"), iri("tag:p"), iri("tag:o"));
        let q2 = Quad::triple(iri("tag:a"), iri("tag:p"), iri("tag:o"));
        let q3 = Quad::triple(iri("tag:a9"), iri("tag:p"), iri("tag:o"));
        let expected = "<tag:a9> <tag:p> <tag:o> .\n<tag:a> <tag:p> <tag:o> .\n<tag:b> <tag:p> <tag:o> .\n";
        assert_eq!(serialize_quads([&q1, &q2, &q3]), expected);
        assert_eq!(serialize_quads([&q3, &q1, &q2]), expected);
        assert_eq!(serialize_quads(&[]), "");
    }
}
