/*!
Opaque key handles.

A [`CryptoKey`] is a capability token: it records which algorithm family it
belongs to and which role it plays, but its material can only be used by the
adapters in this crate. Keys are cheap to clone and safe to share between
threads.
*/

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use p256::ecdsa::{SigningKey, VerifyingKey};
use rsa::{RsaPrivateKey, RsaPublicKey};
use zeroize::Zeroizing;

use crate::core::constants::sizes;
use crate::core::error::{Error, Result};

static NEXT_KEY_ID: AtomicU64 = AtomicU64::new(1);

/// Identifies the generation call a key came from.
///
/// Both halves of a [`KeyPair`] share the same id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyId(u64);

impl KeyId {
    pub(crate) fn next() -> Self {
        KeyId(NEXT_KEY_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for KeyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What a key may be used for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyRole {
    /// Public half of a pair
    Public,
    /// Private half of a pair
    Private,
    /// Symmetric secret key
    Secret,
}

impl fmt::Display for KeyRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyRole::Public => write!(f, "public"),
            KeyRole::Private => write!(f, "private"),
            KeyRole::Secret => write!(f, "secret"),
        }
    }
}

/// Algorithm family a key was generated for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmFamily {
    /// AES-CBC
    Symmetric,
    /// RSA-OAEP
    Asymmetric,
    /// ECDH
    KeyExchange,
    /// ECDSA
    Signature,
}

impl fmt::Display for AlgorithmFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlgorithmFamily::Symmetric => write!(f, "symmetric"),
            AlgorithmFamily::Asymmetric => write!(f, "asymmetric"),
            AlgorithmFamily::KeyExchange => write!(f, "key exchange"),
            AlgorithmFamily::Signature => write!(f, "signature"),
        }
    }
}

/// Key material, only reachable from inside the crate
pub(crate) enum KeyMaterial {
    Aes(Zeroizing<Vec<u8>>),
    RsaPublic(RsaPublicKey),
    RsaPrivate(RsaPrivateKey),
    EcdhPublic(p256::PublicKey),
    EcdhPrivate(p256::SecretKey),
    EcdsaVerifying(VerifyingKey),
    EcdsaSigning(SigningKey),
}

impl KeyMaterial {
    fn role(&self) -> KeyRole {
        match self {
            KeyMaterial::Aes(_) => KeyRole::Secret,
            KeyMaterial::RsaPublic(_) | KeyMaterial::EcdhPublic(_) | KeyMaterial::EcdsaVerifying(_) => {
                KeyRole::Public
            }
            KeyMaterial::RsaPrivate(_) | KeyMaterial::EcdhPrivate(_) | KeyMaterial::EcdsaSigning(_) => {
                KeyRole::Private
            }
        }
    }

    fn family(&self) -> AlgorithmFamily {
        match self {
            KeyMaterial::Aes(_) => AlgorithmFamily::Symmetric,
            KeyMaterial::RsaPublic(_) | KeyMaterial::RsaPrivate(_) => AlgorithmFamily::Asymmetric,
            KeyMaterial::EcdhPublic(_) | KeyMaterial::EcdhPrivate(_) => AlgorithmFamily::KeyExchange,
            KeyMaterial::EcdsaVerifying(_) | KeyMaterial::EcdsaSigning(_) => AlgorithmFamily::Signature,
        }
    }
}

/// Opaque, non-exportable key handle
#[derive(Clone)]
pub struct CryptoKey {
    id: KeyId,
    material: Arc<KeyMaterial>,
}

impl CryptoKey {
    pub(crate) fn new(id: KeyId, material: KeyMaterial) -> Self {
        Self {
            id,
            material: Arc::new(material),
        }
    }

    /// Generation call this key came from
    pub fn id(&self) -> KeyId {
        self.id
    }

    /// Role of the key
    pub fn role(&self) -> KeyRole {
        self.material.role()
    }

    /// Algorithm family of the key
    pub fn family(&self) -> AlgorithmFamily {
        self.material.family()
    }

    /// Whether both keys came out of the same generation call
    pub fn same_origin(&self, other: &CryptoKey) -> bool {
        self.id == other.id
    }

    /// Material of a key that must have the given family and role.
    ///
    /// Fails with [`Error::InvalidKeyRole`] otherwise.
    pub(crate) fn material_for(&self, family: AlgorithmFamily, role: KeyRole) -> Result<&KeyMaterial> {
        if self.family() != family || self.role() != role {
            return Err(Error::invalid_role(
                format!("{} {} key", role, family),
                format!("{} {} key", self.role(), self.family()),
            ));
        }
        Ok(&self.material)
    }
}

impl fmt::Debug for CryptoKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CryptoKey")
            .field("id", &self.id)
            .field("role", &self.role())
            .field("family", &self.family())
            .finish_non_exhaustive()
    }
}

/// Public and private key produced by one generation call
#[derive(Debug, Clone)]
pub struct KeyPair {
    public: CryptoKey,
    private: CryptoKey,
}

impl KeyPair {
    pub(crate) fn new(public: KeyMaterial, private: KeyMaterial) -> Self {
        let id = KeyId::next();
        Self {
            public: CryptoKey::new(id, public),
            private: CryptoKey::new(id, private),
        }
    }

    /// Public half
    pub fn public(&self) -> &CryptoKey {
        &self.public
    }

    /// Private half
    pub fn private(&self) -> &CryptoKey {
        &self.private
    }

    /// Id shared by both halves
    pub fn id(&self) -> KeyId {
        self.public.id
    }
}

/// Random CBC initialization vector
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct InitializationVector([u8; sizes::aes::IV_SIZE]);

impl InitializationVector {
    /// Wrap raw IV bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let iv = bytes.try_into().map_err(|_| {
            Error::Format(format!(
                "IV must be {} bytes, got {}",
                sizes::aes::IV_SIZE,
                bytes.len()
            ))
        })?;
        Ok(Self(iv))
    }

    pub(crate) fn new(bytes: [u8; sizes::aes::IV_SIZE]) -> Self {
        Self(bytes)
    }

    /// IV bytes
    pub fn as_bytes(&self) -> &[u8; sizes::aes::IV_SIZE] {
        &self.0
    }
}

impl fmt::Debug for InitializationVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "InitializationVector({})", hex::encode(self.0))
    }
}
