/*!
Symmetric encryption with AES-CBC.

Text is converted to bytes, encrypted with PKCS#7 padding under the key and
IV, and returned as lowercase hex. The same IV has to be supplied for
decryption. CBC has no integrity check, so decrypting with the wrong IV
(or, with bad luck, the wrong key) yields garbage text instead of an error.
*/

use aes::{Aes128, Aes192, Aes256};
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit, block_padding::Pkcs7};
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use crate::core::{
    constants::sizes,
    crypto::{
        config::{CryptoConfig, SymmetricConfig},
        keys::{AlgorithmFamily, CryptoKey, InitializationVector, KeyId, KeyMaterial, KeyRole},
    },
    encoding::{TextCodec, bytes_to_hex_string, hex_string_to_bytes},
    error::{CryptoError, Error, Result},
};
use crate::crypto_err;

/// Secret key together with the IV bound to it
#[derive(Debug, Clone)]
pub struct SymmetricKeys {
    /// Secret key
    pub key: CryptoKey,
    /// IV reused for every operation with `key`
    pub iv: InitializationVector,
}

/// AES-CBC adapter
#[derive(Debug, Clone)]
pub struct SymmetricCipher {
    config: SymmetricConfig,
    codec: TextCodec,
}

impl Default for SymmetricCipher {
    fn default() -> Self {
        Self {
            config: SymmetricConfig::default(),
            codec: TextCodec::default(),
        }
    }
}

// ThreadRng is a ChaCha-based CSPRNG seeded from the operating system
fn secure_rng() -> impl CryptoRng + RngCore {
    rand::rng()
}

impl SymmetricCipher {
    /// Create a cipher with the default parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a cipher with specific parameters
    pub fn with_config(config: SymmetricConfig, codec: TextCodec) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, codec })
    }

    /// Create a cipher from the playground configuration
    pub fn from_config(config: &CryptoConfig) -> Result<Self> {
        Self::with_config(config.symmetric, config.text_codec)
    }

    /// Algorithm name
    pub fn algorithm(&self) -> &'static str {
        "AES-CBC"
    }

    /// Key length in bits
    pub fn key_bits(&self) -> usize {
        self.config.key_bits
    }

    /// Generate a random 16-byte IV
    pub fn generate_iv(&self) -> InitializationVector {
        let mut iv = [0u8; sizes::aes::IV_SIZE];
        secure_rng().fill_bytes(&mut iv);
        InitializationVector::new(iv)
    }

    /// Generate a random secret key
    pub fn generate_key(&self) -> Result<CryptoKey> {
        let mut bytes = vec![0u8; self.config.key_bits / 8];
        secure_rng().fill_bytes(&mut bytes);
        log::debug!("generated {}-bit {} key", self.config.key_bits, self.algorithm());
        Ok(CryptoKey::new(KeyId::next(), KeyMaterial::Aes(Zeroizing::new(bytes))))
    }

    /// Generate a secret key and its IV
    pub fn generate_keys(&self) -> Result<SymmetricKeys> {
        Ok(SymmetricKeys {
            key: self.generate_key()?,
            iv: self.generate_iv(),
        })
    }

    /// Encrypt text, returning hex ciphertext
    pub fn encrypt(&self, key: &CryptoKey, iv: &InitializationVector, text: &str) -> Result<String> {
        let secret = aes_key(key)?;
        let ciphertext = encrypt_bytes(secret, iv, &self.codec.encode(text))?;
        bytes_to_hex_string(&ciphertext).ok_or(Error::Crypto(CryptoError::EncryptionFailed))
    }

    /// Decrypt hex ciphertext back to text
    pub fn decrypt(&self, key: &CryptoKey, iv: &InitializationVector, hex_text: &str) -> Result<String> {
        let secret = aes_key(key)?;
        let ciphertext = hex_string_to_bytes(hex_text)?;
        let plaintext = decrypt_bytes(secret, iv, &ciphertext)?;
        self.codec.decode(&plaintext)
    }
}

fn aes_key(key: &CryptoKey) -> Result<&[u8]> {
    match key.material_for(AlgorithmFamily::Symmetric, KeyRole::Secret)? {
        KeyMaterial::Aes(bytes) => Ok(bytes.as_slice()),
        _ => Err(Error::Internal("symmetric key without AES material".into())),
    }
}

fn encrypt_bytes(key: &[u8], iv: &InitializationVector, data: &[u8]) -> Result<Vec<u8>> {
    let iv = iv.as_bytes().as_slice();
    let bad_length = |_| Error::Crypto(CryptoError::EncryptionFailed);
    let ciphertext = match key.len() {
        16 => cbc::Encryptor::<Aes128>::new_from_slices(key, iv)
            .map_err(bad_length)?
            .encrypt_padded_vec_mut::<Pkcs7>(data),
        24 => cbc::Encryptor::<Aes192>::new_from_slices(key, iv)
            .map_err(bad_length)?
            .encrypt_padded_vec_mut::<Pkcs7>(data),
        32 => cbc::Encryptor::<Aes256>::new_from_slices(key, iv)
            .map_err(bad_length)?
            .encrypt_padded_vec_mut::<Pkcs7>(data),
        _ => return crypto_err!(CryptoError::EncryptionFailed),
    };
    Ok(ciphertext)
}

fn decrypt_bytes(key: &[u8], iv: &InitializationVector, data: &[u8]) -> Result<Vec<u8>> {
    if data.is_empty() || data.len() % sizes::aes::BLOCK_SIZE != 0 {
        return Err(Error::Decryption(CryptoError::DecryptionFailed));
    }

    let iv = iv.as_bytes().as_slice();
    let bad_length = |_| Error::Decryption(CryptoError::DecryptionFailed);
    let bad_padding = |_| Error::Decryption(CryptoError::InvalidPadding);
    match key.len() {
        16 => cbc::Decryptor::<Aes128>::new_from_slices(key, iv)
            .map_err(bad_length)?
            .decrypt_padded_vec_mut::<Pkcs7>(data)
            .map_err(bad_padding),
        24 => cbc::Decryptor::<Aes192>::new_from_slices(key, iv)
            .map_err(bad_length)?
            .decrypt_padded_vec_mut::<Pkcs7>(data)
            .map_err(bad_padding),
        32 => cbc::Decryptor::<Aes256>::new_from_slices(key, iv)
            .map_err(bad_length)?
            .decrypt_padded_vec_mut::<Pkcs7>(data)
            .map_err(bad_padding),
        _ => Err(Error::Decryption(CryptoError::DecryptionFailed)),
    }
}
