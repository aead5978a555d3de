//! This crate is part of the linked-data layer of a federated social server.
//!
//! It provides functions to canonicalize RDF datasets,
//! so that two servers describing the same graph with different
//! blank node labels compute byte-identical serializations
//! (and therefore identical content hashes and signatures).
//!
//! It implements the [RDFC-1.0](rdfc10) algorithm (formerly known as URDNA2015).
//!
//! ```
//! # use fedi_c14n::normalize_blocking;
//! # use fedi_rdf::{BlankNode, NamedNode, Quad};
//! let knows = NamedNode::new("http://xmlns.com/foaf/0.1/knows").unwrap();
//! let quads = vec![
//!     Quad::triple(BlankNode::new("alice").unwrap(), knows.clone(), BlankNode::new("bob").unwrap()),
//!     Quad::triple(BlankNode::new("bob").unwrap(), knows, BlankNode::new("alice").unwrap()),
//! ];
//! let canonical = normalize_blocking(&quads).unwrap();
//! assert_eq!(
//!     canonical,
//!     "_:c14n0 <http://xmlns.com/foaf/0.1/knows> _:c14n1 .\n\
//!      _:c14n1 <http://xmlns.com/foaf/0.1/knows> _:c14n0 .\n",
//! );
//! ```

#![deny(missing_docs)]

mod _cnq;
mod options;

pub mod hash;
pub mod issuer;
pub mod permuter;
pub mod rdfc10;

pub use _cnq::{serialize_quad, serialize_quads};
pub use options::*;
pub use rdfc10::{normalize, normalize_blocking, relabel, C14nIdMap, Canonicalizer};

use thiserror::Error;

/// Canonicalization error.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum C14nError {
    /// The digest factory does not support the configured hash algorithm
    #[error("Unsupported algorithm \"{0}\".")]
    UnsupportedAlgorithm(String),
    /// The graph was deemed too complex by the configured safeguards of the algorithm
    #[error("{0}")]
    ToxicGraph(String),
    /// An IO error occurred while writing the normalized form,
    /// or while setting up the runtime of [`normalize_blocking`]
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// [`normalize_blocking`] was called from within an async runtime,
    /// where [`normalize`] should be awaited instead
    #[error("normalize_blocking can not be called from within an async runtime")]
    NestedRuntime,
}

#[cfg(test)]
fn test_setup() {
    TEST_SETUP.call_once(|| {
        env_logger::init();
    });
}

#[cfg(test)]
static TEST_SETUP: std::sync::Once = std::sync::Once::new();
