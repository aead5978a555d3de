//! Defines types for configuring canonicalization.

use crate::hash::SHA256;

/// Options of a canonicalization run.
///
/// With the `serde` feature enabled, these options can be read from
/// (and written to) the server's configuration file;
/// missing keys take their default value.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct C14nOptions {
    algorithm: String,
    max_deep_iterations: Option<usize>,
}

impl Default for C14nOptions {
    fn default() -> Self {
        C14nOptions {
            algorithm: SHA256.to_string(),
            max_deep_iterations: None,
        }
    }
}

impl C14nOptions {
    /// Build the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// The identifier of the hash algorithm,
    /// which must be supported by the [digest factory](crate::hash::DigestFactory).
    ///
    /// Defaults to [`SHA256`].
    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    /// How many times the N-degree hash may be computed for any given blank node
    /// before the dataset is considered [toxic](crate::C14nError::ToxicGraph).
    ///
    /// Defaults to `None` (unbounded),
    /// which is only reasonable for trusted input:
    /// a small but highly symmetric dataset may otherwise keep the algorithm
    /// busy for an exponential amount of time.
    pub fn max_deep_iterations(&self) -> Option<usize> {
        self.max_deep_iterations
    }

    /// Change the [`algorithm`](Self::algorithm)
    pub fn with_algorithm(mut self, algorithm: impl Into<String>) -> Self {
        self.algorithm = algorithm.into();
        self
    }

    /// Change the [`max_deep_iterations`](Self::max_deep_iterations)
    pub fn with_max_deep_iterations(mut self, max_deep_iterations: usize) -> Self {
        self.max_deep_iterations = Some(max_deep_iterations);
        self
    }

    /// Remove any bound on [`max_deep_iterations`](Self::max_deep_iterations)
    pub fn with_unbounded_deep_iterations(mut self) -> Self {
        self.max_deep_iterations = None;
        self
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn defaults() {
        let opt = C14nOptions::new();
        assert_eq!(opt.algorithm(), "sha256");
        assert_eq!(opt.max_deep_iterations(), None);
    }

    #[test]
    fn builder() {
        let opt = C14nOptions::new()
            .with_algorithm("sha384")
            .with_max_deep_iterations(3);
        assert_eq!(opt.algorithm(), "sha384");
        assert_eq!(opt.max_deep_iterations(), Some(3));
        let opt = opt.with_unbounded_deep_iterations();
        assert_eq!(opt.max_deep_iterations(), None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn from_config_file() {
        let opt: C14nOptions = toml::from_str("max_deep_iterations = 10").unwrap();
        assert_eq!(opt, C14nOptions::new().with_max_deep_iterations(10));

        let opt: C14nOptions = toml::from_str("").unwrap();
        assert_eq!(opt, C14nOptions::default());

        let txt = toml::to_string(&C14nOptions::new().with_algorithm("sha384")).unwrap();
        let back: C14nOptions = toml::from_str(&txt).unwrap();
        assert_eq!(back.algorithm(), "sha384");
    }
}
