// src/aliases.rs
//! Re-exports secure-gate's ergonomic secret types
//!
//! These are the canonical key types used throughout secret-envelope.
//! Both are zeroized on drop.

pub use secure_gate::fixed_alias;

fixed_alias!(MasterKey32, 32); // process-wide 256-bit master key
fixed_alias!(RecordKey32, 32); // PBKDF2-derived per-record AES key
