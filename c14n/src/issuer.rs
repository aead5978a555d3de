//! I define [`IdentifierIssuer`], which allocates deterministic blank node labels.
//!
//! Implements <https://www.w3.org/TR/rdf-canon/#issue-identifier>

use std::sync::Arc;

use indexmap::IndexMap;

/// Issue sequential identifiers (`prefix` followed by a counter) for blank nodes,
/// remembering which identifier was issued for which original label,
/// and in which order.
///
/// Cloning an issuer yields an independent copy,
/// which is what speculative branches of the canonicalization algorithm rely on.
#[derive(Clone, Debug)]
pub struct IdentifierIssuer {
    prefix: Arc<str>,
    counter: usize,
    // insertion order is the issue order
    issued: IndexMap<Arc<str>, Arc<str>>,
}

impl IdentifierIssuer {
    /// Build a new issuer, whose identifiers will start with `prefix`.
    pub fn new(prefix: impl Into<Arc<str>>) -> Self {
        IdentifierIssuer {
            prefix: prefix.into(),
            counter: 0,
            issued: IndexMap::new(),
        }
    }

    /// The prefix of all identifiers issued by this issuer.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Return the identifier issued for `old`, issuing a new one if necessary.
    ///
    /// The returned boolean is true if the identifier was newly created.
    pub fn issue(&mut self, old: &str) -> (&str, bool) {
        if let Some(index) = self.issued.get_index_of(old) {
            return (&self.issued[index][..], false);
        }
        let new = self.issue_fresh();
        let (index, _) = self.issued.insert_full(Arc::from(old), new);
        (&self.issued[index][..], true)
    }

    /// Allocate a new identifier without recording it against any original label.
    pub fn issue_fresh(&mut self) -> Arc<str> {
        let id = format!("{}{}", self.prefix, self.counter);
        self.counter += 1;
        Arc::from(id)
    }

    /// The identifier already issued for `old`, if any.
    pub fn get(&self, old: &str) -> Option<&str> {
        self.issued.get(old).map(|id| &id[..])
    }

    /// Whether an identifier has already been issued for `old`.
    pub fn has(&self, old: &str) -> bool {
        self.issued.contains_key(old)
    }

    /// The original labels for which an identifier was issued, in issue order.
    pub fn issued_old_ids(&self) -> impl Iterator<Item = &Arc<str>> + '_ {
        self.issued.keys()
    }

    /// The (original label, issued identifier) pairs, in issue order.
    pub fn iter(&self) -> impl Iterator<Item = (&Arc<str>, &Arc<str>)> + '_ {
        self.issued.iter()
    }

    /// The number of identifiers recorded by this issuer.
    pub fn len(&self) -> usize {
        self.issued.len()
    }

    /// Whether no identifier has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.issued.is_empty()
    }
}
