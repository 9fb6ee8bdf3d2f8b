//! AES-256-GCM encryption envelope.
//!
//! A sealed vault is a JSON object with these fixed keys:
//!
//! ```text
//! { "Algorithm": "AES-256/GCM", "KDF": "PBKDF2(SHA-256)",
//!   "KDFIterations": 500000, "Salt": <base64>, "Nonce": <base64>,
//!   "Data": <base64 ciphertext> }
//! ```
//!
//! The algorithm and KDF identifiers are embedded so each vault file is
//! self-describing.  Decryption validates them against a small allow-list
//! instead of trusting the caller, so a tampered or downgraded envelope
//! is rejected before any key derivation happens.

use aes_gcm::aead::{Aead, KeyInit, OsRng};
use aes_gcm::{AeadCore, Aes256Gcm, Nonce};
use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use crate::errors::{PassVaultError, Result};

use super::kdf::derive_key;

/// The only supported AEAD algorithm identifier.
pub const AES_256_GCM: &str = "AES-256/GCM";

/// The only supported KDF identifier.
pub const PBKDF2_SHA256: &str = "PBKDF2(SHA-256)";

/// Size of the AES-256-GCM nonce in bytes.
const NONCE_LEN: usize = 12;

/// The on-disk envelope: algorithm identifiers, KDF parameters, and the
/// authenticated ciphertext.  This is the only artifact that touches
/// disk; the plaintext vault document never does.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncryptedBlob {
    #[serde(rename = "Algorithm")]
    pub algorithm: String,

    #[serde(rename = "KDF")]
    pub kdf: String,

    #[serde(rename = "KDFIterations")]
    pub kdf_iterations: u32,

    /// The vault's long-lived salt (base64 in JSON).
    #[serde(
        rename = "Salt",
        serialize_with = "base64_encode",
        deserialize_with = "base64_decode"
    )]
    pub salt: Vec<u8>,

    /// Single-use nonce, regenerated on every save (base64 in JSON).
    #[serde(
        rename = "Nonce",
        serialize_with = "base64_encode",
        deserialize_with = "base64_decode"
    )]
    pub nonce: Vec<u8>,

    /// Ciphertext with the GCM authentication tag appended (base64 in JSON).
    #[serde(
        rename = "Data",
        serialize_with = "base64_encode",
        deserialize_with = "base64_decode"
    )]
    pub ciphertext: Vec<u8>,
}

/// Reject any algorithm/KDF pair outside the allow-lists.
fn ensure_supported(algorithm: &str, kdf: &str) -> Result<()> {
    if algorithm != AES_256_GCM {
        return Err(PassVaultError::UnsupportedAlgorithm(algorithm.to_string()));
    }
    if kdf != PBKDF2_SHA256 {
        return Err(PassVaultError::UnsupportedAlgorithm(kdf.to_string()));
    }
    Ok(())
}

/// Encrypt `plaintext` under a key derived from `password` and the
/// supplied per-vault parameters.
///
/// A fresh random 12-byte nonce is generated on every call, never reused
/// even for the same key.  The derived key is wiped as soon as the cipher
/// has been built.
pub fn encrypt(
    plaintext: &[u8],
    password: &[u8],
    algorithm: &str,
    kdf: &str,
    salt: &[u8],
    kdf_iterations: u32,
) -> Result<EncryptedBlob> {
    ensure_supported(algorithm, kdf)?;

    let key = derive_key(password, salt, kdf_iterations)?;
    let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|e| PassVaultError::Encryption(format!("invalid key length: {e}")))?;
    drop(key);

    let nonce = Aes256Gcm::generate_nonce(&mut OsRng);

    let ciphertext = cipher
        .encrypt(&nonce, plaintext)
        .map_err(|e| PassVaultError::Encryption(format!("encryption error: {e}")))?;

    Ok(EncryptedBlob {
        algorithm: algorithm.to_string(),
        kdf: kdf.to_string(),
        kdf_iterations,
        salt: salt.to_vec(),
        nonce: nonce.to_vec(),
        ciphertext,
    })
}

/// Decrypt an envelope produced by `encrypt`.
///
/// The key is re-derived from the blob's own salt, KDF, and iteration
/// count.  Any authentication failure, whether from a wrong password or
/// a tampered envelope, yields the same error; the two cases are
/// indistinguishable by design and no partial plaintext is ever
/// returned.
pub fn decrypt(blob: &EncryptedBlob, password: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
    ensure_supported(&blob.algorithm, &blob.kdf)?;

    if blob.nonce.len() != NONCE_LEN {
        return Err(PassVaultError::Authentication);
    }
    let nonce = Nonce::from_slice(&blob.nonce);

    let key = derive_key(password, &blob.salt, blob.kdf_iterations)?;
    let cipher =
        Aes256Gcm::new_from_slice(key.as_bytes()).map_err(|_| PassVaultError::Authentication)?;
    drop(key);

    let plaintext = cipher
        .decrypt(nonce, blob.ciphertext.as_ref())
        .map_err(|_| PassVaultError::Authentication)?;

    Ok(Zeroizing::new(plaintext))
}

// ---------------------------------------------------------------------------
// Serde helpers for base64-encoded Vec<u8> fields
// ---------------------------------------------------------------------------

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

pub(crate) fn base64_encode<S>(data: &[u8], serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    let encoded = BASE64.encode(data);
    serializer.serialize_str(&encoded)
}

pub(crate) fn base64_decode<'de, D>(deserializer: D) -> std::result::Result<Vec<u8>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    BASE64.decode(&s).map_err(serde::de::Error::custom)
}
