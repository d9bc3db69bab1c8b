/*!
# Crypto Playground

Small adapters around the RustCrypto primitives behind an interactive
cryptography tutorial: five demos that each generate keys, transform a piece
of text, and reverse or check the transformation.

## Overview

This library provides:

- AES-256-CBC encryption with a per-key IV
- RSA-OAEP (1024 bit, SHA-256) public-key encryption
- SHA-1, SHA-256, SHA-384 and SHA-512 digests
- ECDH key agreement on P-256
- ECDSA signatures on P-256 with SHA-256
- Playground sessions that hold keys, text and lock state for each demo
- Both synchronous and asynchronous APIs
- Configurable algorithm parameters

All binary output is lowercase hex. Text is converted to bytes one UTF-16
code unit per byte by default, matching the tutorial's browser code; see
[`TextCodec`] for the UTF-8 alternative.

## Security notes

Key material is held behind opaque [`CryptoKey`] handles and never exported.
Symmetric key bytes are wiped on drop and digest comparisons run in constant
time. The fixed parameters are chosen for a tutorial, not for production use.
*/

// Core playground components
pub mod core;

// Asynchronous adapters (optional)
#[cfg(feature = "async")]
mod api_async;

// Re-export commonly used types for convenience
pub use core::constants::{VERSION, defaults, sizes};
pub use core::encoding::{
    TextCodec, bytes_to_hex_string, bytes_to_text, decode_uri_component, encode_uri_component,
    hex_string_to_bytes, text_to_bytes,
};
pub use core::error::{CryptoError, Error, Result};

// Re-export adapters and their configuration
pub use core::crypto::{
    AlgorithmFamily, AsymmetricCipher, AsymmetricConfig, CryptoConfig, CryptoDemo, CryptoKey,
    DemoKind, DigestHasher, HashAlgorithm, InitializationVector, KeyExchange, KeyExchangeConfig,
    KeyId, KeyPair, KeyRole, NamedCurve, SignatureConfig, SignatureService, SymmetricCipher,
    SymmetricConfig, SymmetricKeys,
};

// Re-export playground sessions
pub use core::session::{
    AsymmetricSession, Demo, HashSession, KeyExchangeSession, LockState, PlaygroundKey,
    SignatureCheck, SignatureSession, SymmetricSession,
};

// Re-export asynchronous API components (enabled with the "async" feature)
#[cfg(feature = "async")]
pub mod r#async {
    pub use crate::api_async::AsyncCrypto;
}
