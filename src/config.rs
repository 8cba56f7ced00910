// src/config.rs
//! Master-key configuration
//!
//! A single optional value: the master key as 64 hex characters.
//! Read from the environment, or from a TOML fragment the caller already
//! holds. This module never touches the filesystem.

use std::fmt;

use serde::Deserialize;

use crate::consts::MASTER_KEY_ENV;
use crate::error::{Result, SecretError};

#[derive(Clone, Default, Deserialize)]
pub struct KeyConfig {
    #[serde(default)]
    pub master_key: Option<String>,
}

impl KeyConfig {
    pub fn new(master_key: impl Into<String>) -> Self {
        Self {
            master_key: Some(master_key.into()),
        }
    }

    /// Load from `ENCRYPTION_MASTER_KEY`; unset means development fallback
    pub fn from_env() -> Self {
        Self {
            master_key: std::env::var(MASTER_KEY_ENV).ok(),
        }
    }

    /// Parse a `master_key = "…"` TOML fragment
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // toml errors quote the offending source line, which may be the key
        toml::from_str(content)
            .map_err(|_| SecretError::Configuration("invalid key configuration".into()))
    }

    /// The configured value, with empty/whitespace-only treated as absent
    pub fn master_key_hex(&self) -> Option<&str> {
        self.master_key
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

impl fmt::Debug for KeyConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyConfig")
            .field(
                "master_key",
                &self.master_key_hex().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}
