// src/crypto/encrypt.rs
use aes_gcm::aead::generic_array::GenericArray;
use aes_gcm::aead::{AeadInPlace, KeyInit};
use tracing::debug;
use zeroize::Zeroizing;

use super::Aes256Gcm16;
use crate::aliases::MasterKey32;
use crate::consts::{IV_LEN, SALT_LEN};
use crate::error::{Result, SecretError};
use crate::key::{derive_record_key, master_key};
use crate::record::EncryptedRecord;
use crate::rng;

/// Encrypt under the process master key
pub fn encrypt_secret(plaintext: &str) -> Result<EncryptedRecord> {
    encrypt_with(master_key()?, plaintext)
}

/// Encrypt plaintext → `EncryptedRecord` under an explicit master key
///
/// Fresh salt and IV on every call, so sealing the same plaintext twice
/// never yields the same record.
pub fn encrypt_with(master: &MasterKey32, plaintext: &str) -> Result<EncryptedRecord> {
    let salt = rng::random_array::<SALT_LEN>().map_err(|_| SecretError::Encryption)?;
    let iv = rng::random_array::<IV_LEN>().map_err(|_| SecretError::Encryption)?;

    let record_key = derive_record_key(master, &salt);
    let cipher = Aes256Gcm16::new_from_slice(record_key.expose_secret())
        .map_err(|_| SecretError::Encryption)?;

    let mut buffer = Zeroizing::new(plaintext.as_bytes().to_vec());
    let tag = cipher
        .encrypt_in_place_detached(GenericArray::from_slice(&iv), b"", &mut buffer)
        .map_err(|_| SecretError::Encryption)?;

    debug!("sealed secret record");
    Ok(EncryptedRecord::from_parts(&buffer, &iv, &tag, &salt))
}
