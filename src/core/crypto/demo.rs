/*!
Common shape of the five demos.

Every demo generates key material, runs a forward operation producing a hex
string, and a reverse operation that undoes or checks it. Which demo runs is
chosen through the type system, never by matching names at runtime.
*/

use std::fmt;

use crate::core::{
    crypto::{
        asymmetric::AsymmetricCipher,
        config::HashAlgorithm,
        hash::DigestHasher,
        key_exchange::KeyExchange,
        keys::{CryptoKey, InitializationVector, KeyPair},
        signature::SignatureService,
        symmetric::{SymmetricCipher, SymmetricKeys},
    },
    error::Result,
};

/// The five demos
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DemoKind {
    /// Symmetric encryption
    Symmetric,
    /// Asymmetric encryption
    Asymmetric,
    /// Hashing
    Hash,
    /// Diffie-Hellman key exchange
    KeyExchange,
    /// Digital signatures
    Signature,
}

impl DemoKind {
    /// Every demo in menu order
    pub const ALL: [DemoKind; 5] = [
        DemoKind::Symmetric,
        DemoKind::Asymmetric,
        DemoKind::Hash,
        DemoKind::KeyExchange,
        DemoKind::Signature,
    ];

    /// Human readable title
    pub fn title(&self) -> &'static str {
        match self {
            DemoKind::Symmetric => "Symmetric encryption",
            DemoKind::Asymmetric => "Asymmetric encryption",
            DemoKind::Hash => "Hashing",
            DemoKind::KeyExchange => "Key exchange",
            DemoKind::Signature => "Digital signature",
        }
    }
}

impl fmt::Display for DemoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// `{generate, forward, reverse}` capability shared by every adapter
pub trait CryptoDemo {
    /// Material produced by one generation call
    type Keys;
    /// Arguments of the forward operation
    type Forward<'a>;
    /// Arguments of the reverse operation
    type Reverse<'a>;
    /// Result of the reverse operation
    type Output;

    /// Which demo this is
    const KIND: DemoKind;

    /// Generate fresh key material
    fn generate(&self) -> Result<Self::Keys>;

    /// Encrypt, hash, derive or sign, returning hex
    fn forward(&self, args: Self::Forward<'_>) -> Result<String>;

    /// Decrypt or verify
    fn reverse(&self, args: Self::Reverse<'_>) -> Result<Self::Output>;
}

impl CryptoDemo for SymmetricCipher {
    type Keys = SymmetricKeys;
    type Forward<'a> = (&'a CryptoKey, &'a InitializationVector, &'a str);
    type Reverse<'a> = (&'a CryptoKey, &'a InitializationVector, &'a str);
    type Output = String;

    const KIND: DemoKind = DemoKind::Symmetric;

    fn generate(&self) -> Result<SymmetricKeys> {
        self.generate_keys()
    }

    fn forward(&self, (key, iv, text): Self::Forward<'_>) -> Result<String> {
        self.encrypt(key, iv, text)
    }

    fn reverse(&self, (key, iv, hex_text): Self::Reverse<'_>) -> Result<String> {
        self.decrypt(key, iv, hex_text)
    }
}

impl CryptoDemo for AsymmetricCipher {
    type Keys = KeyPair;
    type Forward<'a> = (&'a CryptoKey, &'a str);
    type Reverse<'a> = (&'a CryptoKey, &'a str);
    type Output = String;

    const KIND: DemoKind = DemoKind::Asymmetric;

    fn generate(&self) -> Result<KeyPair> {
        self.generate_keys()
    }

    fn forward(&self, (public_key, text): Self::Forward<'_>) -> Result<String> {
        self.encrypt(public_key, text)
    }

    fn reverse(&self, (private_key, hex_text): Self::Reverse<'_>) -> Result<String> {
        self.decrypt(private_key, hex_text)
    }
}

impl CryptoDemo for DigestHasher {
    type Keys = ();
    type Forward<'a> = (HashAlgorithm, &'a str);
    type Reverse<'a> = (HashAlgorithm, &'a str, &'a str);
    type Output = bool;

    const KIND: DemoKind = DemoKind::Hash;

    fn generate(&self) -> Result<()> {
        Ok(())
    }

    fn forward(&self, (algorithm, text): Self::Forward<'_>) -> Result<String> {
        self.digest(algorithm, text)
    }

    fn reverse(&self, (algorithm, text, hex_digest): Self::Reverse<'_>) -> Result<bool> {
        self.verify(algorithm, text, hex_digest)
    }
}

impl CryptoDemo for KeyExchange {
    type Keys = KeyPair;
    type Forward<'a> = (&'a CryptoKey, &'a CryptoKey);
    type Reverse<'a> = (&'a CryptoKey, &'a CryptoKey, &'a str);
    type Output = bool;

    const KIND: DemoKind = DemoKind::KeyExchange;

    fn generate(&self) -> Result<KeyPair> {
        self.generate_keys()
    }

    fn forward(&self, (public_key, private_key): Self::Forward<'_>) -> Result<String> {
        self.derive(public_key, private_key)
    }

    fn reverse(&self, (public_key, private_key, expected): Self::Reverse<'_>) -> Result<bool> {
        self.confirm(public_key, private_key, expected)
    }
}

impl CryptoDemo for SignatureService {
    type Keys = KeyPair;
    type Forward<'a> = (&'a CryptoKey, &'a str);
    type Reverse<'a> = (&'a CryptoKey, &'a str, &'a str);
    type Output = bool;

    const KIND: DemoKind = DemoKind::Signature;

    fn generate(&self) -> Result<KeyPair> {
        self.generate_keys()
    }

    fn forward(&self, (private_key, text): Self::Forward<'_>) -> Result<String> {
        self.sign(private_key, text)
    }

    fn reverse(&self, (public_key, text, hex_signature): Self::Reverse<'_>) -> Result<bool> {
        self.verify(public_key, text, hex_signature)
    }
}
