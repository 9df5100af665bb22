//! Error types for launch helpers

use ltigate_crypto::CryptoError;
use thiserror::Error;

/// Result type alias for launch helpers
pub type Result<T> = std::result::Result<T, LaunchError>;

/// Errors that can occur while preparing a launch
#[derive(Debug, Error)]
pub enum LaunchError {
    /// Grade fraction outside `0.0..=1.0`
    #[error("Grade out of range: {0}")]
    GradeOutOfRange(f64),

    /// Content settings are not valid JSON
    #[error("Invalid content settings: {0}")]
    InvalidSettings(#[from] serde_json::Error),

    /// Content settings are valid JSON but not an object
    #[error("Content settings must be a JSON object")]
    SettingsNotObject,

    /// Content item has no placement secret to key a launch code with
    #[error("Content {0} has no placement secret")]
    MissingPlacementSecret(String),

    /// Cryptographic operation failed
    #[error("Crypto error: {0}")]
    Crypto(#[from] CryptoError),
}
