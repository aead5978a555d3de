//! I provide the implementation of the RDFC-1.0 algorithm described at
//! <https://www.w3.org/TR/rdf-canon/>
//!
//! The algorithm runs as a single cooperative task:
//! it never spawns anything, but it regularly yields to the tokio scheduler
//! so that a large dataset does not starve the other tasks of the server.

use std::collections::{BTreeMap, HashMap};
use std::io;
use std::sync::Arc;

use fedi_rdf::{BlankNode, NamedNode, Quad, TermRef};
use futures_util::future::BoxFuture;

use crate::_cnq::{nq, serialize_quads};
use crate::hash::{DigestFactory, MessageDigest, Sha256Factory};
use crate::issuer::IdentifierIssuer;
use crate::permuter::Permuter;
use crate::{C14nError, C14nOptions};

/// Return the canonical N-Quads representation of `quads`, where
/// + blank nodes are canonically [relabelled](relabel) with
///   the [SHA-256](crate::hash::Sha256) hash function,
///   and no bound on deep iterations;
/// + quads are sorted in codepoint order.
///
/// See also [`Canonicalizer::normalize`].
pub async fn normalize(quads: &[Quad]) -> Result<String, C14nError> {
    Canonicalizer::new().normalize(quads).await
}

/// Return a copy of `quads` where blank nodes have been canonically relabelled,
/// paired with a mapping from original blank node labels to canonical ones.
///
/// This uses the [SHA-256](crate::hash::Sha256) hash function,
/// and no bound on deep iterations.
///
/// Implements <https://www.w3.org/TR/rdf-canon/#canon-algorithm>
///
/// See also [`Canonicalizer::relabel`].
pub async fn relabel(quads: &[Quad]) -> Result<(Vec<Quad>, C14nIdMap), C14nError> {
    Canonicalizer::new().relabel(quads).await
}

/// Blocking version of [`normalize`],
/// for callers that do not run inside an async runtime.
///
/// It builds a current-thread tokio runtime for the duration of the call.
/// Called from within a runtime, it fails with [`C14nError::NestedRuntime`]
/// (blocking there would stall the runtime's worker).
pub fn normalize_blocking(quads: &[Quad]) -> Result<String, C14nError> {
    if tokio::runtime::Handle::try_current().is_ok() {
        return Err(C14nError::NestedRuntime);
    }
    let rt = tokio::runtime::Builder::new_current_thread().build()?;
    rt.block_on(normalize(quads))
}

/// An identifier map as returned by [`relabel`]:
/// original blank node labels mapped to their canonical labels.
pub type C14nIdMap = BTreeMap<Arc<str>, Arc<str>>;

/// A configured canonicalization engine.
///
/// The engine itself is stateless:
/// every call gets its own fresh state, so the same `Canonicalizer`
/// can be shared by any number of concurrent tasks.
/// Only the [digest factory](DigestFactory) `F` is shared between runs.
#[derive(Clone, Debug)]
pub struct Canonicalizer<F = Sha256Factory> {
    factory: F,
    options: C14nOptions,
}

impl Canonicalizer<Sha256Factory> {
    /// Build a canonicalizer with the default options (SHA-256, unbounded).
    pub fn new() -> Self {
        Canonicalizer {
            factory: Sha256Factory,
            options: C14nOptions::default(),
        }
    }
}

impl Default for Canonicalizer<Sha256Factory> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: DigestFactory> Canonicalizer<F> {
    /// Build a canonicalizer using `factory` to compute hashes.
    ///
    /// Fails with [`C14nError::UnsupportedAlgorithm`]
    /// if `factory` does not support the algorithm configured in `options`.
    pub fn with_factory(factory: F, options: C14nOptions) -> Result<Self, C14nError> {
        factory.create(options.algorithm())?;
        Ok(Canonicalizer { factory, options })
    }

    /// The options of this canonicalizer.
    pub fn options(&self) -> &C14nOptions {
        &self.options
    }

    /// The digest factory of this canonicalizer.
    pub fn factory(&self) -> &F {
        &self.factory
    }

    /// Return the canonical N-Quads representation of `quads`.
    ///
    /// A dataset containing no blank node is simply serialized,
    /// without computing any hash.
    pub async fn normalize(&self, quads: &[Quad]) -> Result<String, C14nError> {
        let (relabelled, _) = self.relabel(quads).await?;
        Ok(serialize_quads(&relabelled))
    }

    /// Write into `w` the canonical N-Quads representation of `quads`.
    pub async fn write_normalized<W: io::Write>(
        &self,
        quads: &[Quad],
        mut w: W,
    ) -> Result<(), C14nError> {
        let (relabelled, _) = self.relabel(quads).await?;
        w.write_all(serialize_quads(&relabelled).as_bytes())?;
        Ok(())
    }

    /// Return a copy of `quads` where blank nodes have been canonically relabelled,
    /// paired with a mapping from original blank node labels to canonical ones.
    ///
    /// The order of the returned quads is the order of `quads`.
    ///
    /// Implements <https://www.w3.org/TR/rdf-canon/#canon-algorithm>
    pub async fn relabel(&self, quads: &[Quad]) -> Result<(Vec<Quad>, C14nIdMap), C14nError> {
        C14nState::new(self, quads).run().await
    }
}

#[derive(Clone, Debug, Default)]
struct BlankNodeInfo {
    /// Indexes (in the input) of the quads mentioning this blank node
    quads: Vec<usize>,
    /// Memoized result of hash_first_degree_quads
    hash: Option<String>,
}

struct C14nState<'a, F: DigestFactory> {
    factory: &'a F,
    algorithm: &'a str,
    max_deep_iterations: Option<usize>,
    quads: &'a [Quad],
    b2q: BTreeMap<Arc<str>, BlankNodeInfo>,
    canonical: IdentifierIssuer,
    deep_iterations: HashMap<Arc<str>, usize>,
}

impl<'a, F: DigestFactory> C14nState<'a, F> {
    fn new(canonicalizer: &'a Canonicalizer<F>, quads: &'a [Quad]) -> Self {
        C14nState {
            factory: &canonicalizer.factory,
            algorithm: canonicalizer.options.algorithm(),
            max_deep_iterations: canonicalizer.options.max_deep_iterations(),
            quads,
            b2q: BTreeMap::new(),
            canonical: IdentifierIssuer::new("c14n"),
            deep_iterations: HashMap::new(),
        }
    }

    async fn run(mut self) -> Result<(Vec<Quad>, C14nIdMap), C14nError> {
        // Step 2
        for (i, quad) in self.quads.iter().enumerate() {
            for term in quad.spog() {
                if let TermRef::BlankNode(bnode) = term {
                    let info = self.b2q.entry(bnode.id().clone()).or_default();
                    if info.quads.last() != Some(&i) {
                        info.quads.push(i);
                    }
                }
            }
        }
        if self.b2q.is_empty() {
            log::debug!("no blank node in {} quads", self.quads.len());
            return Ok((self.quads.to_vec(), C14nIdMap::new()));
        }
        // Step 3
        let mut h2b = BTreeMap::<String, Vec<Arc<str>>>::new();
        let bnids: Vec<Arc<str>> = self.b2q.keys().cloned().collect();
        let mut yielder = Yielder::every(100);
        for bnid in bnids {
            let hash = self.hash_first_degree_quads(&bnid).await?;
            h2b.entry(hash).or_default().push(bnid);
            yielder.tick().await;
        }
        // Step 4
        // NB: we are relying on the fact that BTreeMap's elements are sorted
        let mut non_unique = vec![];
        for bnids in h2b.into_values() {
            if bnids.len() == 1 {
                self.canonical.issue(&bnids[0]);
            } else {
                non_unique.push(bnids);
            }
        }
        log::debug!(
            "{} blank nodes, {} with a unique first-degree hash, {} group(s) to disambiguate",
            self.b2q.len(),
            self.canonical.len(),
            non_unique.len(),
        );
        // Step 5
        for identifier_list in non_unique {
            let mut hash_path_list = vec![];
            for bnid in identifier_list {
                if self.canonical.has(&bnid) {
                    continue;
                }
                let mut issuer = IdentifierIssuer::new("b");
                issuer.issue(&bnid);
                hash_path_list.push(self.hash_n_degree_quads(bnid, issuer).await?);
            }
            hash_path_list.sort_by(|a, b| a.0.cmp(&b.0));
            for (_, issuer) in hash_path_list {
                for bnid in issuer.issued_old_ids() {
                    self.canonical.issue(bnid);
                }
            }
        }
        // Step 6
        let canonical = &mut self.canonical;
        let relabelled: Vec<Quad> = self
            .quads
            .iter()
            .map(|quad| {
                quad.map_blank_nodes(|bnode| {
                    BlankNode::new_unchecked(canonical.issue(bnode.as_str()).0)
                })
            })
            .collect();
        let issued: C14nIdMap = self
            .canonical
            .iter()
            .map(|(old, new)| (old.clone(), new.clone()))
            .collect();
        Ok((relabelled, issued))
    }

    /// Implements <https://www.w3.org/TR/rdf-canon/#hash-1d-quads>
    async fn hash_first_degree_quads(&mut self, bnid: &str) -> Result<String, C14nError> {
        let info = self.b2q.get(bnid);
        if let Some(hash) = info.and_then(|info| info.hash.clone()) {
            return Ok(hash);
        }
        let indexes = info.map(|info| &info.quads[..]).unwrap_or_default();
        let mut nquads: Vec<String> = indexes
            .iter()
            .map(|i| {
                let mut line = String::new();
                for term in self.quads[*i].spog() {
                    nq_for_hash(term, &mut line, bnid);
                }
                line.push_str(".\n");
                line
            })
            .collect();
        nquads.sort_unstable();
        let mut md = self.factory.create(self.algorithm)?;
        for line in &nquads {
            md.update(line);
        }
        let hash = md.digest().await;
        log::trace!("hash-first-degree({bnid})\n-> {hash}");
        if let Some(info) = self.b2q.get_mut(bnid) {
            info.hash = Some(hash.clone());
        }
        Ok(hash)
    }

    /// Implements <https://www.w3.org/TR/rdf-canon/#hash-related-blank-node>
    async fn hash_related_bnode(
        &mut self,
        related: &str,
        predicate: &NamedNode,
        issuer: &IdentifierIssuer,
        position: &str,
    ) -> Result<String, C14nError> {
        let identifier = if let Some(canon_id) = self.canonical.get(related) {
            format!("_:{canon_id}")
        } else if let Some(temp_id) = issuer.get(related) {
            format!("_:{temp_id}")
        } else {
            self.hash_first_degree_quads(related).await?
        };
        let mut md = self.factory.create(self.algorithm)?;
        md.update(position);
        if position != "g" {
            md.update("<");
            md.update(predicate.as_str());
            md.update(">");
        }
        md.update(&identifier);
        Ok(md.digest().await)
    }

    /// Implements <https://www.w3.org/TR/rdf-canon/#hash-nd-quads>
    fn hash_n_degree_quads(
        &mut self,
        identifier: Arc<str>,
        issuer: IdentifierIssuer,
    ) -> BoxFuture<'_, Result<(String, IdentifierIssuer), C14nError>> {
        Box::pin(async move {
            let count = self.deep_iterations.entry(identifier.clone()).or_insert(0);
            if let Some(max) = self.max_deep_iterations {
                if *count > max {
                    log::warn!("deep iteration limit reached on _:{identifier}");
                    return Err(C14nError::ToxicGraph(format!(
                        "Maximum deep iterations ({max}) exceeded."
                    )));
                }
            }
            *count += 1;

            // Step 1-3
            let quads = self.quads;
            let indexes = self
                .b2q
                .get(&identifier)
                .map(|info| info.quads.clone())
                .unwrap_or_default();
            let mut hn = BTreeMap::<String, Vec<Arc<str>>>::new();
            let mut yielder = Yielder::every(100);
            for i in indexes {
                let quad = &quads[i];
                for (term, position) in quad.spog().into_iter().zip(["s", "p", "o", "g"]) {
                    let TermRef::BlankNode(bnode) = term else {
                        continue;
                    };
                    if bnode.as_str() == &*identifier {
                        continue;
                    }
                    let hash = self
                        .hash_related_bnode(bnode.as_str(), quad.p(), &issuer, position)
                        .await?;
                    hn.entry(hash).or_default().push(bnode.id().clone());
                }
                yielder.tick().await;
            }
            // Step 4
            let mut data_to_hash = self.factory.create(self.algorithm)?;
            // Step 5
            let mut issuer = issuer;
            for (related_hash, blank_nodes) in hn {
                data_to_hash.update(&related_hash);
                let mut chosen_path = String::new();
                let mut chosen_issuer: Option<IdentifierIssuer> = None;
                let mut yielder = Yielder::every(3);
                'permutations: for permutation in Permuter::new(blank_nodes) {
                    yielder.tick().await;
                    let mut issuer_copy = issuer.clone();
                    let mut path = String::new();
                    let mut recursion_list = vec![];
                    // Step 5.4.4
                    for related in permutation {
                        if let Some(canon_id) = self.canonical.get(&related) {
                            path.push_str("_:");
                            path.push_str(canon_id);
                        } else {
                            let (temp_id, new) = issuer_copy.issue(&related);
                            path.push_str("_:");
                            path.push_str(temp_id);
                            if new {
                                recursion_list.push(related);
                            }
                        }
                        if can_prune(&path, &chosen_path) {
                            continue 'permutations;
                        }
                    }
                    // Step 5.4.5
                    for related in recursion_list {
                        let (hash, result_issuer) =
                            self.hash_n_degree_quads(related.clone(), issuer_copy).await?;
                        issuer_copy = result_issuer;
                        let (temp_id, _) = issuer_copy.issue(&related);
                        path.push_str("_:");
                        path.push_str(temp_id);
                        path.push('<');
                        path.push_str(&hash);
                        path.push('>');
                        if can_prune(&path, &chosen_path) {
                            continue 'permutations;
                        }
                    }
                    // Step 5.4.6
                    if chosen_path.is_empty() || path < chosen_path {
                        chosen_path = path;
                        chosen_issuer = Some(issuer_copy);
                    }
                }
                // Step 5.5
                data_to_hash.update(&chosen_path);
                if let Some(chosen_issuer) = chosen_issuer {
                    issuer = chosen_issuer;
                }
            }
            // Step 6
            let hash = data_to_hash.digest().await;
            log::trace!("hash-n-degree({identifier})\n-> {hash}");
            Ok((hash, issuer))
        })
    }
}

/// Whether a partial `path` can no longer beat `chosen_path`.
///
/// A path still shorter than the chosen one is never pruned,
/// as other implementations of RDFC-1.0 do.
fn can_prune(path: &str, chosen_path: &str) -> bool {
    !chosen_path.is_empty() && path.len() >= chosen_path.len() && path > chosen_path
}

fn nq_for_hash(term: TermRef<'_>, buffer: &mut String, ref_bnid: &str) {
    if let Some(bnid) = term.bnode_id() {
        if bnid == ref_bnid {
            buffer.push_str("_:a ");
        } else {
            buffer.push_str("_:z ");
        }
    } else {
        nq(term, buffer);
    }
}

/// Give control back to the tokio scheduler every `interval` ticks.
struct Yielder {
    interval: usize,
    count: usize,
}

impl Yielder {
    fn every(interval: usize) -> Self {
        Yielder { interval, count: 0 }
    }

    async fn tick(&mut self) {
        self.count += 1;
        if self.count % self.interval == 0 {
            tokio::task::yield_now().await;
        }
    }
}
