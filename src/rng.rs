// src/rng.rs
//! OS-backed secure randomness
//!
//! Always the operating system CSPRNG, never a seeded generator. Failure is
//! surfaced, not retried; callers map it into their own error variant.

use rand::rngs::OsRng;
use rand::TryRngCore;

use crate::error::{Result, SecretError};

pub(crate) fn fill(buf: &mut [u8]) -> Result<()> {
    OsRng.try_fill_bytes(buf).map_err(|_| SecretError::Random)
}

pub(crate) fn random_array<const N: usize>() -> Result<[u8; N]> {
    let mut out = [0u8; N];
    fill(&mut out)?;
    Ok(out)
}
