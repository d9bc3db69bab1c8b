//! Core components of the playground.
//!
//! This module contains the text and hex encodings, the cryptographic
//! adapters, the playground sessions built on them, and error handling.

// Cryptographic adapters
pub mod crypto;

// Playground sessions
pub mod session;

// Text and hex conversions
pub mod encoding;

// Fixed parameters and defaults
pub mod constants;

// Error handling
pub mod error;

// Re-exports for convenience
pub use self::constants::VERSION;
pub use self::crypto::{CryptoConfig, CryptoDemo, DemoKind};
pub use self::error::{CryptoError, Error, Result};
pub use self::session::Demo;
