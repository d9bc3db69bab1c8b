/*!
Error handling for the crypto playground.

Every failure an adapter or a playground session can report is a variant of
[`Error`]. Details coming from the underlying cryptographic crates are
deliberately reduced to a [`CryptoError`] reason.
*/

use std::io;
use thiserror::Error;

/// Result type for the crypto playground
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the crypto playground
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Malformed hex or percent-encoded input
    #[error("Invalid format: {0}")]
    Format(String),

    /// Key used for an operation it is not allowed to perform
    #[error("Invalid key role: expected {expected}, but was {actual}")]
    InvalidKeyRole {
        expected: String,
        actual: String,
    },

    /// Decryption rejected, or the decrypted bytes are not valid text
    #[error("Decryption failed")]
    Decryption(#[source] CryptoError),

    /// Algorithm name outside the supported set
    #[error("Unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// Plaintext too long for public-key encryption
    #[error("Payload too large: {len} bytes, at most {max} allowed")]
    PayloadTooLarge {
        len: usize,
        max: usize,
    },

    /// Any other cryptographic failure (limited details)
    #[error("Cryptographic operation failed")]
    Crypto(#[source] CryptoError),

    /// Configuration rejected by validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Locked text dropped on a key that did not encrypt it
    #[error("Wrong key: {0}")]
    WrongKey(String),

    /// No key slot with this id in the session
    #[error("Unknown key: {0}")]
    UnknownKey(String),

    /// Public and private key belong to the same generated pair
    #[error("Public and private key come from the same key pair")]
    DegenerateKeyExchange,

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Cryptographic failure reasons with limited details
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CryptoError {
    /// Key generation failed
    #[error("Key generation failed")]
    KeyGenerationFailed,

    /// Generic encryption error
    #[error("Encryption failed")]
    EncryptionFailed,

    /// Generic decryption error
    #[error("Decryption failed")]
    DecryptionFailed,

    /// Block padding did not check out after decryption
    #[error("Invalid padding")]
    InvalidPadding,

    /// Decrypted bytes could not be turned back into text
    #[error("Invalid text")]
    InvalidText,

    /// Signature generation failed
    #[error("Signing failed")]
    SigningFailed,

    /// Shared secret derivation failed
    #[error("Key agreement failed")]
    KeyAgreementFailed,
}

impl Error {
    /// Build an [`Error::InvalidKeyRole`] from anything printable
    pub fn invalid_role(expected: impl ToString, actual: impl ToString) -> Self {
        Error::InvalidKeyRole {
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }
}

/// Create a format error
#[macro_export]
macro_rules! format_err {
    ($msg:expr) => {
        $crate::core::error::Error::Format($msg.to_string())
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::core::error::Error::Format(format!($fmt, $($arg)*))
    };
}

/// Create a crypto error
#[macro_export]
macro_rules! crypto_err {
    ($err:expr) => {
        Err($crate::core::error::Error::Crypto($err))
    };
}

/// Convert from Error to io::Error (for compatibility)
impl From<Error> for io::Error {
    fn from(error: Error) -> Self {
        match error {
            Error::Format(msg) => io::Error::new(io::ErrorKind::InvalidData, msg),
            Error::InvalidKeyRole { expected, actual } => io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("Invalid key role: expected {}, but was {}", expected, actual),
            ),
            Error::Decryption(_) => io::Error::new(io::ErrorKind::InvalidData, "Decryption failed"),
            Error::UnsupportedAlgorithm(name) => io::Error::new(
                io::ErrorKind::Unsupported,
                format!("Unsupported algorithm: {}", name),
            ),
            Error::PayloadTooLarge { len, max } => io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Payload too large: {} > {}", len, max),
            ),
            Error::Crypto(_) => io::Error::new(io::ErrorKind::Other, "Cryptographic error"),
            Error::InvalidConfig(msg) => io::Error::new(io::ErrorKind::InvalidInput, msg),
            Error::WrongKey(msg) => io::Error::new(io::ErrorKind::PermissionDenied, msg),
            Error::UnknownKey(id) => io::Error::new(io::ErrorKind::NotFound, id),
            Error::DegenerateKeyExchange => io::Error::new(
                io::ErrorKind::InvalidInput,
                "Public and private key come from the same key pair",
            ),
            Error::Internal(msg) => io::Error::new(io::ErrorKind::Other, msg),
        }
    }
}
