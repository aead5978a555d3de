//! I define [`NamedNode`], the RDF term identified by an absolute IRI.

use std::sync::Arc;

use crate::TermError;

/// An [RDF IRI](https://www.w3.org/TR/rdf11-concepts/#section-IRIs).
///
/// The wrapped text is shared, so cloning a [`NamedNode`] is cheap.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct NamedNode(Arc<str>);

impl NamedNode {
    /// Build a new [`NamedNode`] from `iri`,
    /// returning an error if it is not a valid absolute IRI.
    pub fn new(iri: impl Into<Arc<str>>) -> Result<Self, TermError> {
        let iri = iri.into();
        if let Err(err) = oxiri::Iri::parse(&*iri) {
            return Err(TermError::InvalidIri {
                iri: iri.to_string(),
                reason: err.to_string(),
            });
        }
        Ok(NamedNode(iri))
    }

    /// Build a new [`NamedNode`] from `iri`.
    ///
    /// # Pre-condition
    ///
    /// This function requires that `iri` is a valid absolute IRI.
    pub fn new_unchecked(iri: impl Into<Arc<str>>) -> Self {
        NamedNode(iri.into())
    }

    /// Gets a reference to the underlying `str`.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for NamedNode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for NamedNode {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for NamedNode {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use test_case::test_case;

    #[test_case("http://example.org/"; "http")]
    #[test_case("https://social.example/users/alice#main-key"; "with fragment")]
    #[test_case("urn:uuid:6e8bc430-9c3a-11d9-9669-0800200c9a66"; "urn")]
    #[test_case("tag:a"; "tag")]
    fn valid(txt: &str) {
        let n = NamedNode::new(txt).unwrap();
        assert_eq!(n.as_str(), txt);
        assert_eq!(n, txt);
    }

    #[test_case(""; "empty")]
    #[test_case("relative/path"; "relative")]
    #[test_case("http://example.org/a b"; "space")]
    fn invalid(txt: &str) {
        assert!(matches!(
            NamedNode::new(txt),
            Err(TermError::InvalidIri { .. })
        ));
    }
}
