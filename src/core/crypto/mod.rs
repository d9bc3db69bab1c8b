/*!
Cryptographic adapters for the playground.

Each adapter wraps one primitive from the RustCrypto crates with fixed
parameters and converts between text, bytes and hex on the way in and out.
*/

// Configuration
pub mod config;

// Opaque key handles
pub mod keys;

// One adapter per demo
pub mod symmetric;
pub mod asymmetric;
pub mod hash;
pub mod key_exchange;
pub mod signature;

// Shared demo capability
pub mod demo;

pub use asymmetric::AsymmetricCipher;
pub use config::{
    AsymmetricConfig, CryptoConfig, HashAlgorithm, KeyExchangeConfig, NamedCurve, SignatureConfig,
    SymmetricConfig,
};
pub use demo::{CryptoDemo, DemoKind};
pub use hash::DigestHasher;
pub use key_exchange::KeyExchange;
pub use keys::{AlgorithmFamily, CryptoKey, InitializationVector, KeyId, KeyPair, KeyRole};
pub use signature::SignatureService;
pub use symmetric::{SymmetricCipher, SymmetricKeys};
