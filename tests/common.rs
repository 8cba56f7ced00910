// tests/common.rs
//! Shared test utilities — logging setup and fixed master keys

#![allow(dead_code)] // each test binary uses a different subset

use std::io::Write;
use std::sync::{Arc, Mutex};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use secret_envelope::{resolve_master_key, KeyConfig, MasterKey32};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize test-friendly logging
/// Call once at the start of any test that needs logs
pub fn setup() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_test_writer()) // works in `cargo test`
        .with(EnvFilter::from_default_env()) // respects RUST_LOG=
        .try_init()
        .ok(); // idempotent — safe to call multiple times
}

/// Master key made of one repeated byte, e.g. `key_of(0x11)`
pub fn key_of(byte: u8) -> MasterKey32 {
    let hex = format!("{byte:02x}").repeat(32);
    match resolve_master_key(&KeyConfig::new(hex)) {
        Ok(key) => key,
        Err(e) => panic!("fixture key must resolve: {e}"),
    }
}

/// Flip one bit of the byte at `index` inside a base64 field
pub fn flip_byte(field: &str, index: usize) -> String {
    let mut bytes = STANDARD.decode(field).unwrap();
    bytes[index] ^= 0x01;
    STANDARD.encode(bytes)
}

/// Shared in-memory log sink, cloned into the subscriber as its writer
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl CapturedLogs {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

/// Run `f` with a thread-local fmt subscriber and return what it logged
pub fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::TRACE)
        .finish();

    let out = tracing::subscriber::with_default(subscriber, f);
    (out, logs.contents())
}
