/*!
Public-key encryption with RSA-OAEP.

Only a public key may encrypt and only a private key may decrypt. OAEP
bounds the plaintext length: with a 1024-bit modulus and SHA-256 at most
62 bytes fit.
*/

use rand_core::OsRng;
use rsa::{BigUint, Oaep, RsaPrivateKey, RsaPublicKey};

use crate::core::{
    crypto::{
        config::{AsymmetricConfig, CryptoConfig, HashAlgorithm},
        keys::{AlgorithmFamily, CryptoKey, KeyMaterial, KeyPair, KeyRole},
    },
    encoding::{TextCodec, bytes_to_hex_string, hex_string_to_bytes},
    error::{CryptoError, Error, Result},
};

/// RSA-OAEP adapter
#[derive(Debug, Clone)]
pub struct AsymmetricCipher {
    config: AsymmetricConfig,
    codec: TextCodec,
}

impl Default for AsymmetricCipher {
    fn default() -> Self {
        Self {
            config: AsymmetricConfig::default(),
            codec: TextCodec::default(),
        }
    }
}

impl AsymmetricCipher {
    /// Create a cipher with the default parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a cipher with specific parameters
    pub fn with_config(config: AsymmetricConfig, codec: TextCodec) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, codec })
    }

    /// Create a cipher from the playground configuration
    pub fn from_config(config: &CryptoConfig) -> Result<Self> {
        Self::with_config(config.asymmetric, config.text_codec)
    }

    /// Algorithm name
    pub fn algorithm(&self) -> &'static str {
        "RSA-OAEP"
    }

    /// Largest plaintext in bytes, after text encoding
    pub fn max_plaintext_len(&self) -> usize {
        self.config.max_plaintext_len()
    }

    /// Generate a public/private key pair
    pub fn generate_keys(&self) -> Result<KeyPair> {
        let exponent = BigUint::from(self.config.public_exponent);
        let private = RsaPrivateKey::new_with_exp(&mut OsRng, self.config.modulus_bits, &exponent)
            .map_err(|_| Error::Crypto(CryptoError::KeyGenerationFailed))?;
        let public = RsaPublicKey::from(&private);

        let pair = KeyPair::new(KeyMaterial::RsaPublic(public), KeyMaterial::RsaPrivate(private));
        log::debug!(
            "generated {}-bit {} key pair {}",
            self.config.modulus_bits,
            self.algorithm(),
            pair.id()
        );
        Ok(pair)
    }

    /// Encrypt text with a public key, returning hex ciphertext
    pub fn encrypt(&self, public_key: &CryptoKey, text: &str) -> Result<String> {
        let KeyMaterial::RsaPublic(public) =
            public_key.material_for(AlgorithmFamily::Asymmetric, KeyRole::Public)?
        else {
            return Err(Error::Internal("public key without RSA material".into()));
        };

        let data = self.codec.encode(text);
        let max = self.max_plaintext_len();
        if data.len() > max {
            return Err(Error::PayloadTooLarge { len: data.len(), max });
        }

        let ciphertext = public
            .encrypt(&mut OsRng, self.padding(), &data)
            .map_err(|e| match e {
                rsa::Error::MessageTooLong => Error::PayloadTooLarge { len: data.len(), max },
                _ => Error::Crypto(CryptoError::EncryptionFailed),
            })?;
        bytes_to_hex_string(&ciphertext).ok_or(Error::Crypto(CryptoError::EncryptionFailed))
    }

    /// Decrypt hex ciphertext with a private key
    pub fn decrypt(&self, private_key: &CryptoKey, hex_text: &str) -> Result<String> {
        let KeyMaterial::RsaPrivate(private) =
            private_key.material_for(AlgorithmFamily::Asymmetric, KeyRole::Private)?
        else {
            return Err(Error::Internal("private key without RSA material".into()));
        };

        let ciphertext = hex_string_to_bytes(hex_text)?;
        let plaintext = private
            .decrypt(self.padding(), &ciphertext)
            .map_err(|_| Error::Decryption(CryptoError::DecryptionFailed))?;
        self.codec.decode(&plaintext)
    }

    fn padding(&self) -> Oaep {
        match self.config.oaep_hash {
            HashAlgorithm::Sha1 => Oaep::new::<sha1::Sha1>(),
            HashAlgorithm::Sha256 => Oaep::new::<sha2::Sha256>(),
            HashAlgorithm::Sha384 => Oaep::new::<sha2::Sha384>(),
            HashAlgorithm::Sha512 => Oaep::new::<sha2::Sha512>(),
        }
    }
}
