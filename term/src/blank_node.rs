//! Blank node like specified in [RDF](https://www.w3.org/TR/rdf11-primer/#section-blank-node).

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::TermError;

lazy_static! {
    /// A modified production of Turtle's BLANK_NODE_LABEL according to the
    /// [Turtle grammar](https://www.w3.org/TR/turtle/#grammar-production-BLANK_NODE_LABEL).
    ///
    /// In contrast to the original rule this regular expression does not look
    /// for a leading `_:`. Accordingly it only checks if the label is valid.
    ///
    /// # Rule
    ///
    /// `BLANK_NODE_LABEL ::= (PN_CHARS_U | [0-9]) ((PN_CHARS | '.')* PN_CHARS)?`
    static ref BLANK_NODE_LABEL: Regex = Regex::new(r"(?x)
      ^
      [A-Za-z\u{c0}-\u{d6}\u{d8}-\u{f6}\u{f8}-\u{2ff}\u{370}-\u{37D}\u{37F}-\u{1FFF}\u{200C}-\u{200D}\u{2070}-\u{218F}\u{2C00}-\u{2FEF}\u{3001}-\u{D7FF}\u{F900}-\u{FDCF}\u{FDF0}-\u{FFFD}\u{10000}-\u{EFFFF}_0-9]
      (
          [A-Za-z\u{c0}-\u{d6}\u{d8}-\u{f6}\u{f8}-\u{2ff}\u{370}-\u{37D}\u{37F}-\u{1FFF}\u{200C}-\u{200D}\u{2070}-\u{218F}\u{2C00}-\u{2FEF}\u{3001}-\u{D7FF}\u{F900}-\u{FDCF}\u{FDF0}-\u{FFFD}\u{10000}-\u{EFFFF}_\u{2d}0-9\u{00B7}\u{0300}-\u{036F}\u{203F}-\u{2040}]
          |
          \u{2e} [A-Za-z\u{c0}-\u{d6}\u{d8}-\u{f6}\u{f8}-\u{2ff}\u{370}-\u{37D}\u{37F}-\u{1FFF}\u{200C}-\u{200D}\u{2070}-\u{218F}\u{2C00}-\u{2FEF}\u{3001}-\u{D7FF}\u{F900}-\u{FDCF}\u{FDF0}-\u{FFFD}\u{10000}-\u{EFFFF}_\u{2d}0-9\u{00B7}\u{0300}-\u{036F}\u{203F}-\u{2040}]
      )*
      $
    ").unwrap();
}

/// An RDF blank node.
///
/// Its identifier is only meaningful inside the dataset it comes from.
///
/// A blank node may be flagged as *preserved*,
/// meaning that the producer of the dataset must never relabel it.
/// The flag is carried along but plays no part in equality, ordering or hashing,
/// nor in canonicalization.
#[derive(Clone, Debug)]
pub struct BlankNode {
    id: Arc<str>,
    preserve: bool,
}

impl BlankNode {
    /// Return a new blank node with the given identifier.
    ///
    /// May fail if `id` is not a valid identifier according to
    /// [`BLANK_NODE_LABEL`](https://www.w3.org/TR/n-triples/#grammar-production-BLANK_NODE_LABEL).
    /// This means that it must not include the typical leading `_:`.
    pub fn new(id: impl Into<Arc<str>>) -> Result<Self, TermError> {
        let id = id.into();
        if BLANK_NODE_LABEL.is_match(&id) {
            Ok(Self::new_unchecked(id))
        } else {
            Err(TermError::InvalidBnodeId(id.to_string()))
        }
    }

    /// Return a new blank node with the given identifier.
    ///
    /// # Pre-condition
    ///
    /// This function requires that `id` is a valid blank node identifier.
    pub fn new_unchecked(id: impl Into<Arc<str>>) -> Self {
        BlankNode {
            id: id.into(),
            preserve: false,
        }
    }

    /// Flag this blank node as one whose label must never be changed.
    pub fn preserved(mut self) -> Self {
        self.preserve = true;
        self
    }

    /// Whether this blank node was flagged with [`preserved`](BlankNode::preserved).
    pub fn is_preserved(&self) -> bool {
        self.preserve
    }

    /// Gets a reference to the underlying identifier.
    pub fn as_str(&self) -> &str {
        &self.id
    }

    /// Gets a shared handle on the underlying identifier.
    pub fn id(&self) -> &Arc<str> {
        &self.id
    }
}

impl PartialEq for BlankNode {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for BlankNode {}

impl PartialOrd for BlankNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BlankNode {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl Hash for BlankNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use test_case::test_case;

    #[test_case("b0"; "simple")]
    #[test_case("c14n42"; "canonical")]
    #[test_case("_x"; "leading underscore")]
    #[test_case("0abc"; "leading digit")]
    #[test_case("a.b"; "inner dot")]
    #[test_case("a-b"; "inner dash")]
    fn valid(id: &str) {
        let b = BlankNode::new(id).unwrap();
        assert_eq!(b.as_str(), id);
        assert!(!b.is_preserved());
    }

    #[test_case(""; "empty")]
    #[test_case("_:b0"; "with prefix")]
    #[test_case("a b"; "space")]
    #[test_case("a."; "trailing dot")]
    #[test_case("-a"; "leading dash")]
    fn invalid(id: &str) {
        assert!(matches!(
            BlankNode::new(id),
            Err(TermError::InvalidBnodeId(_))
        ));
    }

    #[test]
    fn preserve_flag_does_not_affect_equality() {
        let b1 = BlankNode::new_unchecked("x");
        let b2 = BlankNode::new_unchecked("x").preserved();
        assert!(b2.is_preserved());
        assert_eq!(b1, b2);
    }
}
