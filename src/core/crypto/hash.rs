/*!
One-way hashing with the SHA family.
*/

use sha2::{Digest, Sha256, Sha384, Sha512};
use sha1::Sha1;
use subtle::ConstantTimeEq;

use crate::core::{
    crypto::config::{CryptoConfig, HashAlgorithm},
    encoding::{TextCodec, bytes_to_hex_string, hex_string_to_bytes},
    error::{Error, Result},
};

/// Compute a raw digest
pub(crate) fn compute_digest(algorithm: HashAlgorithm, data: &[u8]) -> Vec<u8> {
    match algorithm {
        HashAlgorithm::Sha1 => Sha1::digest(data).to_vec(),
        HashAlgorithm::Sha256 => Sha256::digest(data).to_vec(),
        HashAlgorithm::Sha384 => Sha384::digest(data).to_vec(),
        HashAlgorithm::Sha512 => Sha512::digest(data).to_vec(),
    }
}

/// Digest adapter
#[derive(Debug, Clone, Default)]
pub struct DigestHasher {
    codec: TextCodec,
}

impl DigestHasher {
    /// Create a hasher with the default text codec
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a hasher with a specific text codec
    pub fn with_codec(codec: TextCodec) -> Self {
        Self { codec }
    }

    /// Create a hasher from the playground configuration
    pub fn from_config(config: &CryptoConfig) -> Self {
        Self::with_codec(config.text_codec)
    }

    /// Hash text under the algorithm with the given WebCrypto name.
    ///
    /// Fails with [`Error::UnsupportedAlgorithm`] for names other than
    /// `SHA-1`, `SHA-256`, `SHA-384` and `SHA-512`.
    pub fn hash(&self, algorithm_name: &str, text: &str) -> Result<String> {
        self.digest(algorithm_name.parse()?, text)
    }

    /// Hash text, returning the hex digest
    pub fn digest(&self, algorithm: HashAlgorithm, text: &str) -> Result<String> {
        let digest = compute_digest(algorithm, &self.codec.encode(text));
        bytes_to_hex_string(&digest).ok_or_else(|| Error::Internal(format!("empty {} digest", algorithm)))
    }

    /// Check a hex digest against text
    pub fn verify(&self, algorithm: HashAlgorithm, text: &str, hex_digest: &str) -> Result<bool> {
        let expected = hex_string_to_bytes(hex_digest)?;
        let actual = compute_digest(algorithm, &self.codec.encode(text));
        Ok(actual.ct_eq(&expected).into())
    }
}
