// src/crypto/hash.rs
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use pbkdf2::pbkdf2_hmac;
use sha2::Sha512;
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

use crate::consts::{HASH_LEN, KDF_ITERATIONS, SALT_LEN};
use crate::error::{Result, SecretError};
use crate::rng;

/// Salted PBKDF2-HMAC-SHA512 → base64(`salt || hash`)
pub fn hash_secret(plaintext: &str) -> Result<String> {
    let salt = rng::random_array::<SALT_LEN>().map_err(|_| SecretError::Hashing)?;

    let mut out = [0u8; SALT_LEN + HASH_LEN];
    out[..SALT_LEN].copy_from_slice(&salt);
    pbkdf2_hmac::<Sha512>(
        plaintext.as_bytes(),
        &salt,
        KDF_ITERATIONS,
        &mut out[SALT_LEN..],
    );
    Ok(STANDARD.encode(out))
}

/// `true` only on a genuine match; malformed records are just `false`
pub fn verify_hash(plaintext: &str, hashed: &str) -> bool {
    let Ok(data) = STANDARD.decode(hashed) else {
        return false;
    };
    if data.len() != SALT_LEN + HASH_LEN {
        return false;
    }
    let (salt, stored) = data.split_at(SALT_LEN);

    let mut computed = Zeroizing::new([0u8; HASH_LEN]);
    pbkdf2_hmac::<Sha512>(
        plaintext.as_bytes(),
        salt,
        KDF_ITERATIONS,
        computed.as_mut_slice(),
    );
    computed.as_slice().ct_eq(stored).into()
}
