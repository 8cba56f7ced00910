// src/display.rs
//! Display masking and random tokens
//!
//! Masking lets an operator recognize which secret a UI row refers to
//! without ever reconstructing it. Tokens are for confirmation links,
//! API tokens and the like.

use crate::consts::{
    DEFAULT_SHOW_LAST, DEFAULT_TOKEN_BYTES, MASK_CHAR, MASK_WIDTH, MAX_TOKEN_BYTES,
};
use crate::error::{Result, SecretError};
use crate::rng;

/// Mask all but the last four characters
#[inline]
pub fn mask_secret(secret: &str) -> String {
    mask_secret_with(secret, DEFAULT_SHOW_LAST)
}

/// Mask all but the last `show_last` characters
///
/// Secrets no longer than `show_last` become a fixed placeholder, so the
/// output does not reveal their length. Counts characters, not bytes.
pub fn mask_secret_with(secret: &str, show_last: usize) -> String {
    let len = secret.chars().count();
    if len <= show_last {
        return MASK_CHAR.to_string().repeat(MASK_WIDTH);
    }

    let masked = MASK_WIDTH.max(len - show_last);
    let suffix: String = secret.chars().skip(len - show_last).collect();

    let mut out = String::with_capacity(masked + suffix.len());
    out.extend(std::iter::repeat(MASK_CHAR).take(masked));
    out.push_str(&suffix);
    out
}

/// 32 random bytes, hex-encoded (64 chars)
#[inline]
pub fn generate_secure_token() -> Result<String> {
    generate_secure_token_with_len(DEFAULT_TOKEN_BYTES)
}

/// `length_bytes` random bytes from the OS CSPRNG, hex-encoded
///
/// At most `MAX_TOKEN_BYTES`; larger requests are `SecretError::TokenLength`.
pub fn generate_secure_token_with_len(length_bytes: usize) -> Result<String> {
    if length_bytes > MAX_TOKEN_BYTES {
        return Err(SecretError::TokenLength {
            max: MAX_TOKEN_BYTES,
        });
    }
    let mut bytes = vec![0u8; length_bytes];
    rng::fill(&mut bytes)?;
    Ok(hex::encode(bytes))
}
