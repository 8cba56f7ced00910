// tests/workflow_tests.rs
//! End-to-end flow through the process-wide key
//!
//! Uses whatever `ENCRYPTION_MASTER_KEY` holds, or the development fallback.

mod common;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use secret_envelope::consts::TAG_LEN;
use secret_envelope::{
    decrypt_secret, encrypt_secret, hash_secret, mask_secret, verify_hash, EncryptedRecord,
    SecretError,
};

#[test]
fn test_store_retrieve_hash_and_mask() {
    common::setup();

    let record = encrypt_secret("sk-test-12345").unwrap();
    assert_eq!(decrypt_secret(&record).unwrap(), "sk-test-12345");

    // Corrupt the last non-padding character of the tag; the result still
    // decodes to 16 bytes, so only GCM authentication can reject it
    let corrupted = EncryptedRecord {
        tag: corrupt_last_symbol(&record.tag),
        ..record
    };
    assert_eq!(STANDARD.decode(&corrupted.tag).unwrap().len(), TAG_LEN);
    assert_eq!(decrypt_secret(&corrupted), Err(SecretError::Decryption));

    let hashed = hash_secret("hunter2").unwrap();
    assert!(verify_hash("hunter2", &hashed));
    assert!(!verify_hash("hunter3", &hashed));

    let masked = mask_secret("sk-test-12345");
    assert!(masked.ends_with("2345"));
    assert!(!masked.contains("sk"));
    assert!(!masked.contains("test"));
    assert!(!masked.contains("123"));
}

#[test]
fn test_updating_a_secret_means_a_new_record() {
    let old = encrypt_secret("old-api-key").unwrap();
    let new = encrypt_secret("new-api-key").unwrap();

    assert_ne!(old, new);
    assert_eq!(decrypt_secret(&old).unwrap(), "old-api-key");
    assert_eq!(decrypt_secret(&new).unwrap(), "new-api-key");
}

const BASE64_ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Swap the last data symbol for one differing in a high bit
///
/// The low bits of the final symbol are zero padding bits that the decoder
/// checks, so only the high bits are touched.
fn corrupt_last_symbol(field: &str) -> String {
    let mut bytes = field.as_bytes().to_vec();
    let pos = bytes.iter().rposition(|&b| b != b'=').unwrap();
    let value = BASE64_ALPHABET.iter().position(|&c| c == bytes[pos]).unwrap();
    bytes[pos] = BASE64_ALPHABET[value ^ 0b10_0000];
    String::from_utf8(bytes).unwrap()
}
