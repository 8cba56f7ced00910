// src/error.rs
//! Public error type for the entire crate

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SecretError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SecretError {
    /// Master key configured but unusable. The message never echoes the value.
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Encryption failed")]
    Encryption,

    /// Deliberately one message for every cause: wrong key, bad tag, bad base64.
    #[error("Decryption failed: invalid key or corrupted data")]
    Decryption,

    #[error("Hashing failed")]
    Hashing,

    #[error("Secure random generator unavailable")]
    Random,

    #[error("Token length must be at most {max} bytes")]
    TokenLength { max: usize },
}
