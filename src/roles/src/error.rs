//! Error types for role mapping configuration

use thiserror::Error;

/// Role mapping errors
///
/// Unmapped roles are not errors; resolvers report them as `None`.
#[derive(Debug, Error)]
pub enum RoleMapError {
    /// Configuration document could not be parsed
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),

    /// Environment variable present but not valid unicode
    #[error("Environment variable {0} is not valid unicode")]
    InvalidEnv(String),
}

/// Result type for role mapping operations
pub type Result<T> = std::result::Result<T, RoleMapError>;
