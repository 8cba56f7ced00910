// src/crypto/mod.rs
//! Pure cryptographic operations — no I/O, no storage
//!
//! Envelope encryption (AES-256-GCM under a PBKDF2-derived per-record key)
//! and salted one-way hashing. Every function is safe to call from many
//! threads at once; the only shared state is the cached master key.
mod decrypt;
mod encrypt;
mod hash;

use aes_gcm::aead::consts::U16;
use aes_gcm::aes::Aes256;
use aes_gcm::AesGcm;

pub use decrypt::{decrypt_secret, decrypt_with};
pub use encrypt::{encrypt_secret, encrypt_with};
pub use hash::{hash_secret, verify_hash};

/// AES-256-GCM with a 16-byte IV and 16-byte tag
pub(crate) type Aes256Gcm16 = AesGcm<Aes256, U16>;
