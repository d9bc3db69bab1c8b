/*!
Elliptic-curve Diffie-Hellman key agreement on P-256.

`derive` combines one participant's public key with another participant's
private key. Both directions produce the same shared secret, truncated to the
configured number of bits.

Keys of the same pair are not rejected here: the result is simply the secret
a participant would share with itself. Callers that treat this as a usage
error check [`CryptoKey::same_origin`] before deriving.
*/

use p256::ecdh::diffie_hellman;
use rand_core::OsRng;
use subtle::ConstantTimeEq;

use crate::core::{
    crypto::{
        config::{CryptoConfig, KeyExchangeConfig},
        keys::{AlgorithmFamily, CryptoKey, KeyMaterial, KeyPair, KeyRole},
    },
    encoding::{bytes_to_hex_string, hex_string_to_bytes},
    error::{CryptoError, Error, Result},
};

/// ECDH adapter
#[derive(Debug, Clone, Default)]
pub struct KeyExchange {
    config: KeyExchangeConfig,
}

impl KeyExchange {
    /// Create a key exchange with the default parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a key exchange with specific parameters
    pub fn with_config(config: KeyExchangeConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Create a key exchange from the playground configuration
    pub fn from_config(config: &CryptoConfig) -> Result<Self> {
        Self::with_config(config.key_exchange)
    }

    /// Algorithm name
    pub fn algorithm(&self) -> &'static str {
        "ECDH"
    }

    /// Number of bits returned by [`KeyExchange::derive`]
    pub fn derivation_bits(&self) -> usize {
        self.config.derivation_bits
    }

    /// Generate a key pair usable for derivation only
    pub fn generate_keys(&self) -> Result<KeyPair> {
        let secret = p256::SecretKey::random(&mut OsRng);
        let public = secret.public_key();

        let pair = KeyPair::new(KeyMaterial::EcdhPublic(public), KeyMaterial::EcdhPrivate(secret));
        log::debug!(
            "generated {} {} key pair {}",
            self.algorithm(),
            self.config.curve.name(),
            pair.id()
        );
        Ok(pair)
    }

    /// Derive the shared secret as hex
    pub fn derive(&self, public_key: &CryptoKey, private_key: &CryptoKey) -> Result<String> {
        let secret = self.derive_bytes(public_key, private_key)?;
        bytes_to_hex_string(&secret).ok_or(Error::Crypto(CryptoError::KeyAgreementFailed))
    }

    /// Check an expected hex shared secret against a fresh derivation
    pub fn confirm(&self, public_key: &CryptoKey, private_key: &CryptoKey, expected_hex: &str) -> Result<bool> {
        let expected = hex_string_to_bytes(expected_hex)?;
        let actual = self.derive_bytes(public_key, private_key)?;
        Ok(actual.ct_eq(&expected).into())
    }

    fn derive_bytes(&self, public_key: &CryptoKey, private_key: &CryptoKey) -> Result<Vec<u8>> {
        let KeyMaterial::EcdhPublic(public) =
            public_key.material_for(AlgorithmFamily::KeyExchange, KeyRole::Public)?
        else {
            return Err(Error::Internal("public key without ECDH material".into()));
        };
        let KeyMaterial::EcdhPrivate(secret) =
            private_key.material_for(AlgorithmFamily::KeyExchange, KeyRole::Private)?
        else {
            return Err(Error::Internal("private key without ECDH material".into()));
        };

        let shared = diffie_hellman(secret.to_nonzero_scalar(), public.as_affine());
        let raw = shared.raw_secret_bytes();
        let len = self.config.derivation_bits / 8;
        raw.get(..len)
            .map(<[u8]>::to_vec)
            .ok_or(Error::Crypto(CryptoError::KeyAgreementFailed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_secret_agrees() {
        let exchange = KeyExchange::new();
        let alice = exchange.generate_keys().unwrap();
        let bob = exchange.generate_keys().unwrap();

        let alice_side = exchange.derive(bob.public(), alice.private()).unwrap();
        let bob_side = exchange.derive(alice.public(), bob.private()).unwrap();

        assert_eq!(alice_side, bob_side);
        // 64 bits as 16 hex digits
        assert_eq!(alice_side.len(), 16);
    }

    #[test]
    fn test_different_peers_differ() {
        let exchange = KeyExchange::new();
        let alice = exchange.generate_keys().unwrap();
        let bob = exchange.generate_keys().unwrap();
        let carol = exchange.generate_keys().unwrap();

        let with_bob = exchange.derive(bob.public(), alice.private()).unwrap();
        let with_carol = exchange.derive(carol.public(), alice.private()).unwrap();
        assert_ne!(with_bob, with_carol);
    }

    #[test]
    fn test_full_length_derivation() {
        let config = KeyExchangeConfig {
            derivation_bits: 256,
            ..KeyExchangeConfig::default()
        };
        let exchange = KeyExchange::with_config(config).unwrap();
        let alice = exchange.generate_keys().unwrap();
        let bob = exchange.generate_keys().unwrap();

        let full = exchange.derive(bob.public(), alice.private()).unwrap();
        assert_eq!(full.len(), 64);

        // Truncation keeps the leading bytes
        let short = KeyExchange::new().derive(bob.public(), alice.private()).unwrap();
        assert!(full.starts_with(&short));
    }

    #[test]
    fn test_self_derivation_is_deterministic() {
        let exchange = KeyExchange::new();
        let pair = exchange.generate_keys().unwrap();

        let first = exchange.derive(pair.public(), pair.private()).unwrap();
        let second = exchange.derive(pair.public(), pair.private()).unwrap();
        assert_eq!(first, second);
        assert!(pair.public().same_origin(pair.private()));
    }

    #[test]
    fn test_confirm() {
        let exchange = KeyExchange::new();
        let alice = exchange.generate_keys().unwrap();
        let bob = exchange.generate_keys().unwrap();

        let secret = exchange.derive(bob.public(), alice.private()).unwrap();
        assert!(exchange.confirm(alice.public(), bob.private(), &secret).unwrap());
        assert!(!exchange.confirm(alice.public(), alice.private(), &secret).unwrap());
    }

    #[test]
    fn test_confirm_length_mismatch() {
        let exchange = KeyExchange::new();
        let alice = exchange.generate_keys().unwrap();
        let bob = exchange.generate_keys().unwrap();

        let secret = exchange.derive(bob.public(), alice.private()).unwrap();
        assert!(!exchange.confirm(alice.public(), bob.private(), &secret[..8]).unwrap());
        assert!(!exchange.confirm(alice.public(), bob.private(), &format!("{}ff", secret)).unwrap());
    }

    #[test]
    fn test_key_roles_enforced() {
        let exchange = KeyExchange::new();
        let alice = exchange.generate_keys().unwrap();
        let bob = exchange.generate_keys().unwrap();

        // Arguments swapped
        assert!(matches!(
            exchange.derive(alice.private(), bob.public()),
            Err(Error::InvalidKeyRole { .. })
        ));
    }
}
