// src/lib.rs
//! secret-envelope — at-rest protection for configuration secrets
//!
//! Features:
//! - AES-256-GCM envelope encryption with PBKDF2-derived per-record keys
//! - Salted PBKDF2-HMAC-SHA512 hashes with constant-time verification
//! - Display masking and OS-random tokens
//! - Full secure-gate zeroize-on-drop key types
//!
//! Stateless apart from the cached master key; callers own storage.

pub mod aliases;
pub mod config;
pub mod consts;
pub mod crypto;
pub mod display;
pub mod error;
pub mod key;
pub mod record;

mod rng;

// Re-export everything users need at the crate root
pub use aliases::MasterKey32;
pub use config::KeyConfig;
pub use crypto::{
    decrypt_secret, decrypt_with, encrypt_secret, encrypt_with, hash_secret, verify_hash,
};
pub use display::{
    generate_secure_token, generate_secure_token_with_len, mask_secret, mask_secret_with,
};
pub use error::{Result, SecretError};
pub use key::{generate_master_key_hex, master_key, resolve_master_key};
pub use record::EncryptedRecord;
