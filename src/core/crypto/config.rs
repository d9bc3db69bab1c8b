/*!
Cryptographic algorithm configuration for the playground.

Each demo runs with a fixed parameter set. The defaults reproduce the
classic browser demo: AES-CBC 256, RSA-OAEP 1024 with SHA-256, ECDH on P-256
deriving 64 bits, and ECDSA on P-256 with SHA-256.
*/

use std::fmt;
use std::str::FromStr;

use crate::core::constants::sizes;
use crate::core::encoding::TextCodec;
use crate::core::error::{Error, Result};

/// Supported digest algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize, serde::Deserialize))]
pub enum HashAlgorithm {
    /// SHA-1 (legacy, kept for the hash demo)
    Sha1,
    /// SHA-256
    #[default]
    Sha256,
    /// SHA-384
    Sha384,
    /// SHA-512
    Sha512,
}

impl HashAlgorithm {
    /// Every supported digest, weakest first
    pub const ALL: [HashAlgorithm; 4] = [
        HashAlgorithm::Sha1,
        HashAlgorithm::Sha256,
        HashAlgorithm::Sha384,
        HashAlgorithm::Sha512,
    ];

    /// Algorithm name as used by WebCrypto
    pub fn name(&self) -> &'static str {
        match self {
            HashAlgorithm::Sha1 => "SHA-1",
            HashAlgorithm::Sha256 => "SHA-256",
            HashAlgorithm::Sha384 => "SHA-384",
            HashAlgorithm::Sha512 => "SHA-512",
        }
    }

    /// Digest size in bytes
    pub fn output_len(&self) -> usize {
        match self {
            HashAlgorithm::Sha1 => 20,
            HashAlgorithm::Sha256 => 32,
            HashAlgorithm::Sha384 => 48,
            HashAlgorithm::Sha512 => 64,
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashAlgorithm {
    type Err = Error;

    /// Parse a WebCrypto digest name, ignoring ASCII case
    fn from_str(s: &str) -> Result<Self> {
        HashAlgorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnsupportedAlgorithm(s.to_string()))
    }
}

/// Supported elliptic curves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize, serde::Deserialize))]
pub enum NamedCurve {
    /// NIST P-256
    #[default]
    P256,
}

impl NamedCurve {
    /// Curve name as used by WebCrypto
    pub fn name(&self) -> &'static str {
        match self {
            NamedCurve::P256 => "P-256",
        }
    }
}

impl FromStr for NamedCurve {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if NamedCurve::P256.name().eq_ignore_ascii_case(s) {
            Ok(NamedCurve::P256)
        } else {
            Err(Error::UnsupportedAlgorithm(s.to_string()))
        }
    }
}

/// AES-CBC parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize, serde::Deserialize))]
pub struct SymmetricConfig {
    /// Key length in bits (128, 192 or 256)
    pub key_bits: usize,
}

impl Default for SymmetricConfig {
    fn default() -> Self {
        Self {
            key_bits: sizes::aes::KEY_SIZE * 8,
        }
    }
}

impl SymmetricConfig {
    /// Validate the parameters
    pub fn validate(&self) -> Result<()> {
        match self.key_bits {
            128 | 192 | 256 => Ok(()),
            bits => Err(Error::InvalidConfig(format!(
                "AES key length must be 128, 192 or 256 bits, got {}",
                bits
            ))),
        }
    }
}

/// RSA-OAEP parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize, serde::Deserialize))]
pub struct AsymmetricConfig {
    /// Modulus size in bits
    pub modulus_bits: usize,
    /// Public exponent
    pub public_exponent: u64,
    /// Digest used by OAEP
    pub oaep_hash: HashAlgorithm,
}

impl Default for AsymmetricConfig {
    fn default() -> Self {
        Self {
            modulus_bits: sizes::rsa::MODULUS_BITS,
            public_exponent: sizes::rsa::PUBLIC_EXPONENT,
            oaep_hash: HashAlgorithm::Sha256,
        }
    }
}

impl AsymmetricConfig {
    /// Largest plaintext in bytes that OAEP can wrap with these parameters
    pub fn max_plaintext_len(&self) -> usize {
        (self.modulus_bits / 8).saturating_sub(2 * self.oaep_hash.output_len() + 2)
    }

    /// Validate the parameters
    pub fn validate(&self) -> Result<()> {
        let bits = self.modulus_bits;
        if !(sizes::rsa::MIN_MODULUS_BITS..=sizes::rsa::MAX_MODULUS_BITS).contains(&bits) || bits % 8 != 0 {
            return Err(Error::InvalidConfig(format!(
                "RSA modulus must be a multiple of 8 between {} and {} bits, got {}",
                sizes::rsa::MIN_MODULUS_BITS,
                sizes::rsa::MAX_MODULUS_BITS,
                bits
            )));
        }

        if self.public_exponent < 3 || self.public_exponent % 2 == 0 {
            return Err(Error::InvalidConfig(format!(
                "RSA public exponent must be odd and at least 3, got {}",
                self.public_exponent
            )));
        }

        if self.max_plaintext_len() == 0 {
            return Err(Error::InvalidConfig(format!(
                "{}-bit modulus leaves no room for OAEP with {}",
                bits, self.oaep_hash
            )));
        }

        Ok(())
    }
}

/// ECDH parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyExchangeConfig {
    /// Curve
    pub curve: NamedCurve,
    /// Number of shared-secret bits handed back by `derive`
    pub derivation_bits: usize,
}

impl Default for KeyExchangeConfig {
    fn default() -> Self {
        Self {
            curve: NamedCurve::P256,
            derivation_bits: sizes::p256::DERIVATION_BITS,
        }
    }
}

impl KeyExchangeConfig {
    /// Validate the parameters
    pub fn validate(&self) -> Result<()> {
        let max_bits = sizes::p256::SHARED_SECRET_BYTES * 8;
        let bits = self.derivation_bits;
        if bits == 0 || bits > max_bits || bits % 8 != 0 {
            return Err(Error::InvalidConfig(format!(
                "derivation length must be a non-zero multiple of 8 up to {} bits, got {}",
                max_bits, bits
            )));
        }
        Ok(())
    }
}

/// ECDSA parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize, serde::Deserialize))]
pub struct SignatureConfig {
    /// Curve
    pub curve: NamedCurve,
    /// Digest applied to the message before signing
    pub hash: HashAlgorithm,
}

/// Cryptographic configuration for every demo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize, serde::Deserialize))]
pub struct CryptoConfig {
    /// Symmetric encryption
    pub symmetric: SymmetricConfig,
    /// Public-key encryption
    pub asymmetric: AsymmetricConfig,
    /// Key exchange
    pub key_exchange: KeyExchangeConfig,
    /// Signatures
    pub signature: SignatureConfig,
    /// Text to byte conversion used by every adapter
    pub text_codec: TextCodec,
}

impl CryptoConfig {
    /// Create a new configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Same parameters, different text codec
    pub fn with_text_codec(mut self, codec: TextCodec) -> Self {
        self.text_codec = codec;
        self
    }

    /// Create a configuration with larger keys and digests
    pub fn high_security() -> Self {
        Self {
            symmetric: SymmetricConfig { key_bits: 256 },
            asymmetric: AsymmetricConfig {
                modulus_bits: 2048,
                public_exponent: sizes::rsa::PUBLIC_EXPONENT,
                oaep_hash: HashAlgorithm::Sha384,
            },
            key_exchange: KeyExchangeConfig {
                curve: NamedCurve::P256,
                derivation_bits: 256,
            },
            signature: SignatureConfig {
                curve: NamedCurve::P256,
                hash: HashAlgorithm::Sha384,
            },
            text_codec: TextCodec::Latin1,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.symmetric.validate()?;
        self.asymmetric.validate()?;
        self.key_exchange.validate()?;
        Ok(())
    }

    /// Name of the symmetric algorithm
    pub fn symmetric_name(&self) -> &'static str {
        "AES-CBC"
    }

    /// Name of the public-key encryption algorithm
    pub fn asymmetric_name(&self) -> &'static str {
        "RSA-OAEP"
    }

    /// Name of the key agreement algorithm
    pub fn key_exchange_name(&self) -> &'static str {
        "ECDH"
    }

    /// Name of the signature algorithm
    pub fn signature_name(&self) -> &'static str {
        "ECDSA"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CryptoConfig::default();
        assert_eq!(config.symmetric.key_bits, 256);
        assert_eq!(config.asymmetric.modulus_bits, 1024);
        assert_eq!(config.asymmetric.public_exponent, 65_537);
        assert_eq!(config.asymmetric.oaep_hash, HashAlgorithm::Sha256);
        assert_eq!(config.key_exchange.curve, NamedCurve::P256);
        assert_eq!(config.key_exchange.derivation_bits, 64);
        assert_eq!(config.signature.hash, HashAlgorithm::Sha256);
        assert_eq!(config.text_codec, TextCodec::Latin1);
        assert!(config.validate().is_ok());
        assert_eq!(HashAlgorithm::default(), HashAlgorithm::Sha256);
    }

    #[test]
    fn test_preset_configs() {
        let high = CryptoConfig::high_security();
        assert_eq!(high.asymmetric.modulus_bits, 2048);
        assert_eq!(high.signature.hash, HashAlgorithm::Sha384);
        assert!(high.validate().is_ok());

        let utf8 = CryptoConfig::new().with_text_codec(TextCodec::Utf8);
        assert_eq!(utf8.text_codec, TextCodec::Utf8);
    }

    #[test]
    fn test_invalid_configs() {
        let mut config = CryptoConfig::default();
        config.symmetric.key_bits = 512;
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));

        let mut config = CryptoConfig::default();
        config.asymmetric.modulus_bits = 512;
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));

        let mut config = CryptoConfig::default();
        config.asymmetric.public_exponent = 4;
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));

        let mut config = CryptoConfig::default();
        config.key_exchange.derivation_bits = 12;
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));

        config.key_exchange.derivation_bits = 264;
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_max_plaintext_len() {
        assert_eq!(AsymmetricConfig::default().max_plaintext_len(), 62);

        let sha1 = AsymmetricConfig {
            oaep_hash: HashAlgorithm::Sha1,
            ..AsymmetricConfig::default()
        };
        assert_eq!(sha1.max_plaintext_len(), 86);

        // 1024-bit modulus cannot hold two SHA-512 digests
        let sha512 = AsymmetricConfig {
            oaep_hash: HashAlgorithm::Sha512,
            ..AsymmetricConfig::default()
        };
        assert_eq!(sha512.max_plaintext_len(), 0);
        assert!(sha512.validate().is_err());
    }

    #[test]
    fn test_hash_algorithm_names() {
        assert_eq!("SHA-256".parse::<HashAlgorithm>().unwrap(), HashAlgorithm::Sha256);
        assert_eq!("sha-1".parse::<HashAlgorithm>().unwrap(), HashAlgorithm::Sha1);
        assert_eq!(
            "MD5".parse::<HashAlgorithm>(),
            Err(Error::UnsupportedAlgorithm("MD5".into()))
        );
        assert_eq!(HashAlgorithm::Sha512.to_string(), "SHA-512");
        assert_eq!(HashAlgorithm::Sha384.output_len(), 48);
    }

    #[test]
    fn test_curve_names() {
        assert_eq!("P-256".parse::<NamedCurve>().unwrap(), NamedCurve::P256);
        assert!(matches!("P-384".parse::<NamedCurve>(), Err(Error::UnsupportedAlgorithm(_))));
    }

    #[test]
    fn test_algorithm_names() {
        let config = CryptoConfig::default();
        assert_eq!(config.symmetric_name(), "AES-CBC");
        assert_eq!(config.asymmetric_name(), "RSA-OAEP");
        assert_eq!(config.key_exchange_name(), "ECDH");
        assert_eq!(config.signature_name(), "ECDSA");
    }
}
