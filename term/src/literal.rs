//! I define [`Literal`], the RDF term carrying a value.

use std::sync::Arc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::ns::{rdf, xsd};
use crate::{NamedNode, TermError};

lazy_static! {
    /// The `LANGTAG` production of [N-Quads](https://www.w3.org/TR/n-quads/#grammar-production-LANGTAG),
    /// without the leading `@`.
    static ref LANGTAG: Regex = Regex::new(r"^[a-zA-Z]+(-[a-zA-Z0-9]+)*$").unwrap();
}

/// An RDF [literal](https://www.w3.org/TR/rdf11-concepts/#section-Graph-Literal).
///
/// A literal has a datatype and, if and only if that datatype is `rdf:langString`,
/// a language tag.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Literal {
    value: Arc<str>,
    datatype: NamedNode,
    language: Option<Arc<str>>,
}

impl Literal {
    /// Build a plain string literal (its datatype is `xsd:string`).
    pub fn new_simple(value: impl Into<Arc<str>>) -> Self {
        Literal {
            value: value.into(),
            datatype: NamedNode::new_unchecked(xsd::string),
            language: None,
        }
    }

    /// Build a literal with the given datatype.
    pub fn new_typed(value: impl Into<Arc<str>>, datatype: NamedNode) -> Self {
        Literal {
            value: value.into(),
            datatype,
            language: None,
        }
    }

    /// Build a language-tagged string (its datatype is `rdf:langString`),
    /// returning an error if `tag` is not a valid language tag.
    pub fn new_lang(
        value: impl Into<Arc<str>>,
        tag: impl Into<Arc<str>>,
    ) -> Result<Self, TermError> {
        let tag = tag.into();
        if !LANGTAG.is_match(&tag) {
            return Err(TermError::InvalidLanguageTag(tag.to_string()));
        }
        Ok(Self::new_lang_unchecked(value, tag))
    }

    /// Build a language-tagged string.
    ///
    /// # Pre-condition
    ///
    /// This function requires that `tag` is a valid language tag.
    pub fn new_lang_unchecked(value: impl Into<Arc<str>>, tag: impl Into<Arc<str>>) -> Self {
        Literal {
            value: value.into(),
            datatype: NamedNode::new_unchecked(rdf::langString),
            language: Some(tag.into()),
        }
    }

    /// The lexical form of this literal.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The datatype of this literal.
    pub fn datatype(&self) -> &NamedNode {
        &self.datatype
    }

    /// The language tag of this literal, if any.
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }
}
