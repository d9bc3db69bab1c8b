/*!
Digital signatures with ECDSA on P-256.

Signatures are the fixed-width `r || s` encoding (64 bytes) produced by
WebCrypto, hex encoded. The message digest is configurable; SHA-256 is the
default.
*/

use p256::ecdsa::{
    Signature, SigningKey, VerifyingKey,
    signature::hazmat::{PrehashSigner, PrehashVerifier},
};
use rand_core::OsRng;

use crate::core::{
    crypto::{
        config::{CryptoConfig, SignatureConfig},
        hash::compute_digest,
        keys::{AlgorithmFamily, CryptoKey, KeyMaterial, KeyPair, KeyRole},
    },
    encoding::{TextCodec, bytes_to_hex_string, hex_string_to_bytes},
    error::{CryptoError, Error, Result},
};

/// ECDSA adapter
#[derive(Debug, Clone, Default)]
pub struct SignatureService {
    config: SignatureConfig,
    codec: TextCodec,
}

impl SignatureService {
    /// Create a signature service with the default parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a signature service with specific parameters
    pub fn with_config(config: SignatureConfig, codec: TextCodec) -> Self {
        Self { config, codec }
    }

    /// Create a signature service from the playground configuration
    pub fn from_config(config: &CryptoConfig) -> Self {
        Self::with_config(config.signature, config.text_codec)
    }

    /// Algorithm name
    pub fn algorithm(&self) -> &'static str {
        "ECDSA"
    }

    /// Generate a signing/verification key pair
    pub fn generate_keys(&self) -> Result<KeyPair> {
        let signing = SigningKey::random(&mut OsRng);
        let verifying = VerifyingKey::from(&signing);

        let pair = KeyPair::new(KeyMaterial::EcdsaVerifying(verifying), KeyMaterial::EcdsaSigning(signing));
        log::debug!(
            "generated {} {} key pair {}",
            self.algorithm(),
            self.config.curve.name(),
            pair.id()
        );
        Ok(pair)
    }

    /// Sign text with a private key, returning the hex signature
    pub fn sign(&self, private_key: &CryptoKey, text: &str) -> Result<String> {
        let KeyMaterial::EcdsaSigning(signing) =
            private_key.material_for(AlgorithmFamily::Signature, KeyRole::Private)?
        else {
            return Err(Error::Internal("private key without ECDSA material".into()));
        };

        let prehash = compute_digest(self.config.hash, &self.codec.encode(text));
        let signature: Signature = signing
            .sign_prehash(&prehash)
            .map_err(|_| Error::Crypto(CryptoError::SigningFailed))?;
        bytes_to_hex_string(signature.to_bytes().as_slice()).ok_or(Error::Crypto(CryptoError::SigningFailed))
    }

    /// Verify a hex signature over text with a public key.
    ///
    /// Malformed hex is an error. A signature that is well-formed hex but
    /// does not match (including one of the wrong length) is `Ok(false)`.
    pub fn verify(&self, public_key: &CryptoKey, text: &str, hex_signature: &str) -> Result<bool> {
        let KeyMaterial::EcdsaVerifying(verifying) =
            public_key.material_for(AlgorithmFamily::Signature, KeyRole::Public)?
        else {
            return Err(Error::Internal("public key without ECDSA material".into()));
        };

        let signature_bytes = hex_string_to_bytes(hex_signature)?;
        let Ok(signature) = Signature::from_slice(&signature_bytes) else {
            return Ok(false);
        };

        let prehash = compute_digest(self.config.hash, &self.codec.encode(text));
        Ok(verifying.verify_prehash(&prehash, &signature).is_ok())
    }
}
