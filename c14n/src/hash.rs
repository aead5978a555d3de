//! Define the [`MessageDigest`] and [`DigestFactory`] traits
//! as well as standard hash functions.
use std::fmt::Write;
use std::future::Future;

use sha2::Digest;

use crate::C14nError;

/// Identifier of the [SHA-256](https://en.wikipedia.org/wiki/SHA-2) algorithm,
/// the one used by default.
pub const SHA256: &str = "sha256";

/// Identifier of the [SHA-384](https://en.wikipedia.org/wiki/SHA-2) algorithm.
pub const SHA384: &str = "sha384";

/// Abstraction of the hash accumulator used by c14n algorithms.
///
/// A digest is fed with any number of text fragments,
/// and then consumed to produce the lower-case hexadecimal hash of their concatenation.
pub trait MessageDigest: Send {
    /// Update internal state by hashing `data`
    fn update(&mut self, data: &str);

    /// Return the hash, hex-encoded in lower case.
    ///
    /// This is asynchronous so that implementations may delegate to
    /// an out-of-process or hardware-accelerated hasher.
    fn digest(self) -> impl Future<Output = String> + Send;
}

/// Produce fresh [`MessageDigest`]s for a given algorithm.
///
/// A factory is shared by every canonicalization run using it,
/// so it must not keep any per-run state.
pub trait DigestFactory: Send + Sync {
    /// The type of digest produced by this factory
    type Digest: MessageDigest;

    /// Start the computation of a hash with the given `algorithm`.
    ///
    /// Fails with [`C14nError::UnsupportedAlgorithm`] if `algorithm` is not supported.
    fn create(&self, algorithm: &str) -> Result<Self::Digest, C14nError>;
}

/// The [SHA-256](https://en.wikipedia.org/wiki/SHA-2) [`DigestFactory`].
///
/// It only accepts the [`SHA256`] algorithm identifier.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sha256Factory;

impl DigestFactory for Sha256Factory {
    type Digest = Sha256;

    fn create(&self, algorithm: &str) -> Result<Sha256, C14nError> {
        if algorithm != SHA256 {
            return Err(C14nError::UnsupportedAlgorithm(algorithm.to_string()));
        }
        Ok(Sha256(sha2::Sha256::new()))
    }
}

/// The [SHA-256](https://en.wikipedia.org/wiki/SHA-2) [`MessageDigest`]
pub struct Sha256(sha2::Sha256);

impl MessageDigest for Sha256 {
    fn update(&mut self, data: &str) {
        self.0.update(data.as_bytes());
    }

    async fn digest(self) -> String {
        hex(&self.0.finalize())
    }
}

/// The [SHA-384](https://en.wikipedia.org/wiki/SHA-2) [`DigestFactory`].
///
/// It only accepts the [`SHA384`] algorithm identifier.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sha384Factory;

impl DigestFactory for Sha384Factory {
    type Digest = Sha384;

    fn create(&self, algorithm: &str) -> Result<Sha384, C14nError> {
        if algorithm != SHA384 {
            return Err(C14nError::UnsupportedAlgorithm(algorithm.to_string()));
        }
        Ok(Sha384(sha2::Sha384::new()))
    }
}

/// The [SHA-384](https://en.wikipedia.org/wiki/SHA-2) [`MessageDigest`]
pub struct Sha384(sha2::Sha384);

impl MessageDigest for Sha384 {
    fn update(&mut self, data: &str) {
        self.0.update(data.as_bytes());
    }

    async fn digest(self) -> String {
        hex(&self.0.finalize())
    }
}

/// Lower-case hexadecimal encoding of `hash`.
pub(crate) fn hex(hash: &impl AsRef<[u8]>) -> String {
    let bytes = hash.as_ref();
    let mut digest = String::with_capacity(2 * bytes.len());
    for b in bytes {
        write!(&mut digest, "{b:02x}").unwrap();
    }
    digest
}

#[cfg(test)]
mod test {
    use super::*;
    use test_case::test_case;

    const EMPTY_SHA256: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";
    const ABC_SHA256: &str = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";
    const ABC_SHA384: &str = "cb00753f45a35e8bb5a03d699ac65007272c32ab0eded1631a8b605a43ff5bed8086072ba1e7cc2358baeca134c825a7";

    #[test_case(&[], EMPTY_SHA256; "empty")]
    #[test_case(&["abc"], ABC_SHA256; "single fragment")]
    #[test_case(&["a", "", "bc"], ABC_SHA256; "split fragments")]
    fn sha256(fragments: &[&str], expected: &str) {
        let mut md = Sha256Factory.create(SHA256).unwrap();
        for f in fragments {
            md.update(f);
        }
        let got = futures_util::FutureExt::now_or_never(md.digest()).unwrap();
        assert_eq!(got, expected);
    }

    #[test]
    fn sha384() {
        let mut md = Sha384Factory.create(SHA384).unwrap();
        md.update("ab");
        md.update("c");
        let got = futures_util::FutureExt::now_or_never(md.digest()).unwrap();
        assert_eq!(got, ABC_SHA384);
    }

    #[test_case("sha384"; "other sha2")]
    #[test_case("SHA256"; "upper case")]
    #[test_case("md5"; "md5")]
    #[test_case(""; "empty")]
    fn sha256_factory_rejects(algorithm: &str) {
        assert!(matches!(
            Sha256Factory.create(algorithm),
            Err(C14nError::UnsupportedAlgorithm(a)) if a == algorithm
        ));
    }

    #[test]
    fn sha384_factory_rejects_sha256() {
        assert!(Sha384Factory.create(SHA256).is_err());
    }

    #[test]
    fn hex_is_lower_case() {
        assert_eq!(hex(&[0x00u8, 0xab, 0xff, 0x10]), "00abff10");
    }
}
