//! # Standard namespaces
//!
//! IRIs of the vocabulary terms that have a special meaning
//! for the term model or for canonical serialization.

/// Helper for creating a "namespace module"
/// defining a set of IRIs within a given IRI space.
///
/// # Safety
/// This macro is conceptually unsafe,
/// as it is never checked that the prefix IRI is a valid IRI.
#[macro_export]
macro_rules! namespace {
    ($iri_prefix:literal, $($suffix:ident),*) => {
        /// Prefix used in this namespace.
        pub static PREFIX: &str = $iri_prefix;
        $(
            /// Generated IRI.
            #[allow(non_upper_case_globals)]
            pub static $suffix: &str = concat!($iri_prefix, stringify!($suffix));
        )*
    };
}

/// The standard `xsd:` namespace.
pub mod xsd {
    namespace!("http://www.w3.org/2001/XMLSchema#", string, integer);
}

/// The standard `rdf:` namespace.
pub mod rdf {
    namespace!("http://www.w3.org/1999/02/22-rdf-syntax-ns#", langString);
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn generated_iris() {
        assert_eq!(xsd::string, "http://www.w3.org/2001/XMLSchema#string");
        assert_eq!(
            rdf::langString,
            "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString"
        );
        assert!(xsd::integer.starts_with(xsd::PREFIX));
        assert!(rdf::langString.starts_with(rdf::PREFIX));
    }
}
