// src/record.rs
//! The stored unit of an encrypted secret
//!
//! Callers persist this however they like; the crate never stores it.
//! Records are immutable: updating a secret means sealing a new one.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::consts::{IV_LEN, SALT_LEN, TAG_LEN};
use crate::error::{Result, SecretError};

/// Four base64 fields, none of which reveal the plaintext or any key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptedRecord {
    pub encrypted: String,
    pub iv: String,
    pub tag: String,
    pub salt: String,
}

impl EncryptedRecord {
    pub fn to_json(&self) -> String {
        serde_json::json!({
            "encrypted": self.encrypted,
            "iv": self.iv,
            "tag": self.tag,
            "salt": self.salt,
        })
        .to_string()
    }

    /// Unreadable JSON is just another corrupted record
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|_| SecretError::Decryption)
    }

    pub(crate) fn from_parts(ciphertext: &[u8], iv: &[u8], tag: &[u8], salt: &[u8]) -> Self {
        Self {
            encrypted: STANDARD.encode(ciphertext),
            iv: STANDARD.encode(iv),
            tag: STANDARD.encode(tag),
            salt: STANDARD.encode(salt),
        }
    }

    /// Decode and length-check every field; any failure is `Decryption`
    pub(crate) fn decode(&self) -> Result<DecodedRecord> {
        Ok(DecodedRecord {
            ciphertext: decode_field(&self.encrypted)?,
            iv: decode_fixed::<IV_LEN>(&self.iv)?,
            tag: decode_fixed::<TAG_LEN>(&self.tag)?,
            salt: decode_fixed::<SALT_LEN>(&self.salt)?,
        })
    }
}

pub(crate) struct DecodedRecord {
    pub ciphertext: Vec<u8>,
    pub iv: [u8; IV_LEN],
    pub tag: [u8; TAG_LEN],
    pub salt: [u8; SALT_LEN],
}

fn decode_field(field: &str) -> Result<Vec<u8>> {
    STANDARD.decode(field).map_err(|_| SecretError::Decryption)
}

fn decode_fixed<const N: usize>(field: &str) -> Result<[u8; N]> {
    decode_field(field)?
        .try_into()
        .map_err(|_| SecretError::Decryption)
}
