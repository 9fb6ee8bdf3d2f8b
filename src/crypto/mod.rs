//! Cryptographic primitives for PassVault.
//!
//! This module provides:
//! - The AES-256-GCM encryption envelope and its on-disk JSON shape (`envelope`)
//! - PBKDF2-HMAC-SHA256 password-based key derivation (`kdf`)

pub mod envelope;
pub mod kdf;

// Re-export the most commonly used items so callers can write:
//   use crate::crypto::{encrypt, decrypt, EncryptedBlob, ...};
pub use envelope::{decrypt, encrypt, EncryptedBlob, AES_256_GCM, PBKDF2_SHA256};
pub use kdf::{derive_key, generate_salt, DerivedKey, DEFAULT_KDF_ITERATIONS};
