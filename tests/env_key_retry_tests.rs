// tests/env_key_retry_tests.rs
//! A malformed environment key fails without poisoning the cache
//!
//! Own test binary with a single test, since it mutates the environment.

use secret_envelope::consts::MASTER_KEY_ENV;
use secret_envelope::{encrypt_secret, master_key, SecretError};

#[test]
fn test_bad_env_key_is_not_cached() {
    std::env::set_var(MASTER_KEY_ENV, "zz".repeat(32));
    assert!(matches!(master_key(), Err(SecretError::Configuration(_))));
    assert!(matches!(
        encrypt_secret("never sealed"),
        Err(SecretError::Configuration(_))
    ));

    std::env::set_var(MASTER_KEY_ENV, "ab");
    assert!(matches!(
        master_key(),
        Err(SecretError::Configuration(ref msg)) if msg == "invalid key length"
    ));

    std::env::set_var(MASTER_KEY_ENV, "c3".repeat(32));
    let key = master_key().unwrap();
    assert_eq!(key.expose_secret(), &[0xc3; 32]);
}
