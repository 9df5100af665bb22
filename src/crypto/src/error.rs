//! Error types for secret encryption and launch codes

use thiserror::Error;

/// Result type alias for cryptographic operations
pub type Result<T> = std::result::Result<T, CryptoError>;

/// Errors that can occur during cryptographic operations
#[derive(Debug, Error)]
pub enum CryptoError {
    /// Input does not have the `iv:payload:tag:label` shape
    #[error("Malformed ciphertext: {0}")]
    MalformedCiphertext(String),

    /// Cipher label is not one this crate can decrypt
    #[error("Unsupported cipher: {0}")]
    UnsupportedCipher(String),

    /// A hex field could not be decoded
    #[error("Invalid hex encoding: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    /// A key or IV has the wrong length for the primitive
    #[error("Invalid key length")]
    InvalidKeyLength(#[from] hmac::digest::InvalidLength),

    /// Integrity tag does not match (wrong key or tampered ciphertext)
    #[error("Integrity check failed")]
    IntegrityCheckFailed,

    /// Padding was invalid after decryption
    #[error("Decryption failed: {0}")]
    Decryption(String),

    /// Decrypted bytes are not UTF-8
    #[error("Decrypted secret is not valid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}
