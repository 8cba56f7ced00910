// src/consts.rs
//! Shared constants — security parameters and defaults

/// PBKDF2 iterations for every derivation in this crate
// Slow on purpose: per-record keys, hashes and the dev fallback all pay it
pub const KDF_ITERATIONS: u32 = 100_000;

/// Master and per-record AES-256 key length
pub const KEY_LEN: usize = 32;

/// Per-record salt length (also used for hash records)
pub const SALT_LEN: usize = 32;

/// AES-GCM initialization vector length
pub const IV_LEN: usize = 16;

/// AES-GCM authentication tag length
pub const TAG_LEN: usize = 16;

/// PBKDF2-HMAC-SHA512 output length for hash records
pub const HASH_LEN: usize = 64;

/// Environment variable carrying the master key as 64 hex characters
pub const MASTER_KEY_ENV: &str = "ENCRYPTION_MASTER_KEY";

/// Development fallback seed — NOT a secret, NOT for production
pub const DEV_KEY_SEED: &str = "secret-envelope-development-master-key";

/// Development fallback salt
pub const DEV_KEY_SALT: &str = "secret-envelope-development-salt";

/// Characters left visible at the end of a masked secret
pub const DEFAULT_SHOW_LAST: usize = 4;

/// Minimum number of mask characters; also the placeholder width
pub const MASK_WIDTH: usize = 8;

pub const MASK_CHAR: char = '*';

/// Default token size in bytes (hex output is twice as long)
pub const DEFAULT_TOKEN_BYTES: usize = 32;

/// Upper bound on a single token request
pub const MAX_TOKEN_BYTES: usize = 1024;
