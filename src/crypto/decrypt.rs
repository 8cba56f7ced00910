// src/crypto/decrypt.rs
use aes_gcm::aead::generic_array::GenericArray;
use aes_gcm::aead::{AeadInPlace, KeyInit};
use tracing::debug;
use zeroize::Zeroizing;

use super::Aes256Gcm16;
use crate::aliases::MasterKey32;
use crate::error::{Result, SecretError};
use crate::key::{derive_record_key, master_key};
use crate::record::EncryptedRecord;

/// Decrypt with the process master key
pub fn decrypt_secret(record: &EncryptedRecord) -> Result<String> {
    decrypt_with(master_key()?, record)
}

/// Decrypt `EncryptedRecord` → plaintext under an explicit master key
///
/// Every failure (bad base64, wrong lengths, wrong key, tampered bytes,
/// non-UTF-8 output) is the same `SecretError::Decryption`.
pub fn decrypt_with(master: &MasterKey32, record: &EncryptedRecord) -> Result<String> {
    open(master, record).map_err(|_| {
        debug!("secret record failed to open");
        SecretError::Decryption
    })
}

fn open(master: &MasterKey32, record: &EncryptedRecord) -> Result<String> {
    let decoded = record.decode()?;

    let record_key = derive_record_key(master, &decoded.salt);
    let cipher = Aes256Gcm16::new_from_slice(record_key.expose_secret())
        .map_err(|_| SecretError::Decryption)?;

    let mut buffer = Zeroizing::new(decoded.ciphertext);
    cipher
        .decrypt_in_place_detached(
            GenericArray::from_slice(&decoded.iv),
            b"",
            &mut buffer,
            GenericArray::from_slice(&decoded.tag),
        )
        .map_err(|_| SecretError::Decryption)?;

    let plaintext = std::str::from_utf8(&buffer)
        .map_err(|_| SecretError::Decryption)?
        .to_owned();
    debug!("opened secret record");
    Ok(plaintext)
}
