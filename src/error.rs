//! Error types for Telros Core

use thiserror::Error;

/// Main error type for vault operations
#[derive(Error, Debug)]
pub enum VaultError {
    /// Database operation failed
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Input rejected at the call boundary
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Configuration could not be read or written
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<rusqlite::Error> for VaultError {
    fn from(err: rusqlite::Error) -> Self {
        VaultError::DatabaseError(err.to_string())
    }
}

impl From<serde_json::Error> for VaultError {
    fn from(err: serde_json::Error) -> Self {
        VaultError::ConfigError(err.to_string())
    }
}

/// Result type alias for vault operations
pub type Result<T> = std::result::Result<T, VaultError>;
