/*!
Constants for the crypto playground.

Fixed algorithm parameters, sizes and the playground defaults.
*/

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Size constants for the supported algorithms
pub mod sizes {
    /// AES-CBC constants
    pub mod aes {
        /// Size of an AES-256 key in bytes
        pub const KEY_SIZE: usize = 32;

        /// Size of the AES block in bytes
        pub const BLOCK_SIZE: usize = 16;

        /// Size of the CBC initialization vector in bytes
        pub const IV_SIZE: usize = 16;
    }

    /// RSA-OAEP constants
    pub mod rsa {
        /// Default modulus size in bits
        pub const MODULUS_BITS: usize = 1024;

        /// Public exponent (0x01 0x00 0x01)
        pub const PUBLIC_EXPONENT: u64 = 65_537;

        /// Smallest modulus accepted by the configuration
        pub const MIN_MODULUS_BITS: usize = 1024;

        /// Largest modulus accepted by the configuration
        pub const MAX_MODULUS_BITS: usize = 4096;
    }

    /// P-256 constants
    pub mod p256 {
        /// Size of the raw ECDH shared secret in bytes
        pub const SHARED_SECRET_BYTES: usize = 32;

        /// Size of a fixed-width `r || s` ECDSA signature in bytes
        pub const SIGNATURE_BYTES: usize = 64;

        /// Default number of derived bits for the key exchange demo
        pub const DERIVATION_BITS: usize = 64;
    }
}

/// Playground defaults
pub mod defaults {
    /// Initial text of the encryption and hash demos
    pub const TEXT: &str = "Ваш секретный текст";

    /// Initial text of the signature demo
    pub const SIGNATURE_TEXT: &str = "abc";

    /// Number of secret keys in the symmetric demo
    pub const SYMMETRIC_KEYS: usize = 2;

    /// Number of key pairs in the asymmetric demo
    pub const ASYMMETRIC_KEY_PAIRS: usize = 2;

    /// Number of key pairs in the key exchange demo
    pub const KEY_EXCHANGE_KEY_PAIRS: usize = 3;

    /// Number of key pairs in the signature demo
    pub const SIGNATURE_KEY_PAIRS: usize = 2;
}
