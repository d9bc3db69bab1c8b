/*!
Async facade over the five adapters.
*/

use crate::core::{
    crypto::{
        asymmetric::AsymmetricCipher,
        config::{CryptoConfig, HashAlgorithm},
        hash::DigestHasher,
        key_exchange::KeyExchange,
        keys::{CryptoKey, InitializationVector, KeyPair},
        signature::SignatureService,
        symmetric::{SymmetricCipher, SymmetricKeys},
    },
    error::{Error, Result},
};

/// Run a blocking operation on the blocking pool
async fn run_blocking<T, F>(operation: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T> + Send + 'static,
{
    tokio::task::spawn_blocking(operation)
        .await
        .map_err(|err| Error::Internal(format!("blocking task failed: {}", err)))?
}

/// Asynchronous access to every adapter.
///
/// Keys are shared handles, so the same key may be used by overlapping calls.
#[derive(Debug, Clone, Default)]
pub struct AsyncCrypto {
    symmetric: SymmetricCipher,
    asymmetric: AsymmetricCipher,
    hasher: DigestHasher,
    exchange: KeyExchange,
    signature: SignatureService,
}

impl AsyncCrypto {
    /// Create adapters with the default parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Create adapters from a configuration
    pub fn with_config(config: &CryptoConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            symmetric: SymmetricCipher::from_config(config)?,
            asymmetric: AsymmetricCipher::from_config(config)?,
            hasher: DigestHasher::from_config(config),
            exchange: KeyExchange::from_config(config)?,
            signature: SignatureService::from_config(config),
        })
    }

    /// Generate an AES key and its IV
    pub async fn generate_symmetric_keys(&self) -> Result<SymmetricKeys> {
        let cipher = self.symmetric.clone();
        run_blocking(move || cipher.generate_keys()).await
    }

    /// Encrypt text with AES-CBC
    pub async fn encrypt_symmetric(&self, key: &CryptoKey, iv: &InitializationVector, text: &str) -> Result<String> {
        let (cipher, key, iv, text) = (self.symmetric.clone(), key.clone(), *iv, text.to_string());
        run_blocking(move || cipher.encrypt(&key, &iv, &text)).await
    }

    /// Decrypt hex ciphertext with AES-CBC
    pub async fn decrypt_symmetric(&self, key: &CryptoKey, iv: &InitializationVector, hex_text: &str) -> Result<String> {
        let (cipher, key, iv, hex_text) = (self.symmetric.clone(), key.clone(), *iv, hex_text.to_string());
        run_blocking(move || cipher.decrypt(&key, &iv, &hex_text)).await
    }

    /// Generate an RSA-OAEP key pair
    pub async fn generate_asymmetric_keys(&self) -> Result<KeyPair> {
        let cipher = self.asymmetric.clone();
        run_blocking(move || cipher.generate_keys()).await
    }

    /// Encrypt text with an RSA public key
    pub async fn encrypt_asymmetric(&self, public_key: &CryptoKey, text: &str) -> Result<String> {
        let (cipher, key, text) = (self.asymmetric.clone(), public_key.clone(), text.to_string());
        run_blocking(move || cipher.encrypt(&key, &text)).await
    }

    /// Decrypt hex ciphertext with an RSA private key
    pub async fn decrypt_asymmetric(&self, private_key: &CryptoKey, hex_text: &str) -> Result<String> {
        let (cipher, key, hex_text) = (self.asymmetric.clone(), private_key.clone(), hex_text.to_string());
        run_blocking(move || cipher.decrypt(&key, &hex_text)).await
    }

    /// Hash text under the algorithm with the given name
    pub async fn hash(&self, algorithm_name: &str, text: &str) -> Result<String> {
        let algorithm: HashAlgorithm = algorithm_name.parse()?;
        let (hasher, text) = (self.hasher.clone(), text.to_string());
        run_blocking(move || hasher.digest(algorithm, &text)).await
    }

    /// Generate an ECDH key pair
    pub async fn generate_exchange_keys(&self) -> Result<KeyPair> {
        let exchange = self.exchange.clone();
        run_blocking(move || exchange.generate_keys()).await
    }

    /// Derive the hex shared secret
    pub async fn derive(&self, public_key: &CryptoKey, private_key: &CryptoKey) -> Result<String> {
        let (exchange, public, private) = (self.exchange.clone(), public_key.clone(), private_key.clone());
        run_blocking(move || exchange.derive(&public, &private)).await
    }

    /// Generate an ECDSA key pair
    pub async fn generate_signature_keys(&self) -> Result<KeyPair> {
        let service = self.signature.clone();
        run_blocking(move || service.generate_keys()).await
    }

    /// Sign text with a private key
    pub async fn sign(&self, private_key: &CryptoKey, text: &str) -> Result<String> {
        let (service, key, text) = (self.signature.clone(), private_key.clone(), text.to_string());
        run_blocking(move || service.sign(&key, &text)).await
    }

    /// Verify a hex signature with a public key
    pub async fn verify(&self, public_key: &CryptoKey, text: &str, hex_signature: &str) -> Result<bool> {
        let (service, key) = (self.signature.clone(), public_key.clone());
        let (text, hex_signature) = (text.to_string(), hex_signature.to_string());
        run_blocking(move || service.verify(&key, &text, &hex_signature)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_symmetric_round_trip() {
        let crypto = AsyncCrypto::new();
        let keys = crypto.generate_symmetric_keys().await.unwrap();

        let encrypted = crypto.encrypt_symmetric(&keys.key, &keys.iv, "async").await.unwrap();
        let decrypted = crypto.decrypt_symmetric(&keys.key, &keys.iv, &encrypted).await.unwrap();
        assert_eq!(decrypted, "async");
    }

    #[tokio::test]
    async fn test_errors_pass_through() {
        let crypto = AsyncCrypto::new();
        assert!(matches!(
            crypto.hash("MD5", "abc").await,
            Err(Error::UnsupportedAlgorithm(_))
        ));
    }

    #[tokio::test]
    async fn test_overlapping_calls_share_a_key() {
        let crypto = AsyncCrypto::new();
        let pair = crypto.generate_signature_keys().await.unwrap();

        let (first, second) = tokio::join!(
            crypto.sign(pair.private(), "one"),
            crypto.sign(pair.private(), "two"),
        );
        assert!(crypto.verify(pair.public(), "one", &first.unwrap()).await.unwrap());
        assert!(crypto.verify(pair.public(), "two", &second.unwrap()).await.unwrap());
    }
}
