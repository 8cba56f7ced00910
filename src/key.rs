// src/key.rs
//! Master key resolution and per-record key derivation
//!
//! The master key comes from configuration (64 hex chars) or, when absent,
//! from a fixed development seed. The process-wide key is resolved once and
//! cached; re-resolving the same configuration always yields the same key.

use once_cell::sync::OnceCell;
use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use tracing::warn;
use zeroize::{Zeroize, Zeroizing};

use crate::aliases::{MasterKey32, RecordKey32};
use crate::config::KeyConfig;
use crate::consts::{DEV_KEY_SALT, DEV_KEY_SEED, KDF_ITERATIONS, KEY_LEN, MASTER_KEY_ENV};
use crate::error::{Result, SecretError};
use crate::rng;

static MASTER_KEY: OnceCell<MasterKey32> = OnceCell::new();

/// Process-wide master key, resolved from the environment on first use
///
/// A failed resolution is not cached, so fixing the environment and
/// calling again works.
pub fn master_key() -> Result<&'static MasterKey32> {
    MASTER_KEY.get_or_try_init(|| resolve_master_key(&KeyConfig::from_env()))
}

/// Resolve a master key from an explicit configuration
///
/// Never truncates or pads: anything but exactly 32 decoded bytes is a
/// `SecretError::Configuration`.
pub fn resolve_master_key(config: &KeyConfig) -> Result<MasterKey32> {
    match config.master_key_hex() {
        Some(hex_key) => parse_master_key(hex_key),
        None => Ok(derive_dev_key()),
    }
}

fn parse_master_key(hex_key: &str) -> Result<MasterKey32> {
    let bytes = Zeroizing::new(
        hex::decode(hex_key)
            .map_err(|_| SecretError::Configuration("master key is not valid hex".into()))?,
    );
    let key: [u8; KEY_LEN] = bytes
        .as_slice()
        .try_into()
        .map_err(|_| SecretError::Configuration("invalid key length".into()))?;
    Ok(MasterKey32::new(key))
}

fn derive_dev_key() -> MasterKey32 {
    // Goes to stderr as well: a log filter must not be able to hide this
    warn!(
        env = MASTER_KEY_ENV,
        "master key not configured; using development fallback key (not for production)"
    );
    eprintln!(
        "Warning: {MASTER_KEY_ENV} not set; using a development-only master key. \
         Do not store production secrets under it."
    );

    let mut key = [0u8; KEY_LEN];
    pbkdf2_hmac::<Sha256>(
        DEV_KEY_SEED.as_bytes(),
        DEV_KEY_SALT.as_bytes(),
        KDF_ITERATIONS,
        &mut key,
    );
    let master = MasterKey32::new(key);
    key.zeroize();
    master
}

/// PBKDF2-HMAC-SHA256(master, salt) → per-record AES-256 key
pub(crate) fn derive_record_key(master: &MasterKey32, salt: &[u8]) -> RecordKey32 {
    let mut key = [0u8; KEY_LEN];
    pbkdf2_hmac::<Sha256>(master.expose_secret(), salt, KDF_ITERATIONS, &mut key);
    let record_key = RecordKey32::new(key);
    key.zeroize();
    record_key
}

/// Mint a fresh master key, hex-encoded, ready for `ENCRYPTION_MASTER_KEY`
pub fn generate_master_key_hex() -> Result<String> {
    let mut key = rng::random_array::<KEY_LEN>()?;
    let encoded = hex::encode(key);
    key.zeroize();
    Ok(encoded)
}
