//! Password-based key derivation using PBKDF2-HMAC-SHA256.
//!
//! The iteration count stretches the master password into a symmetric
//! key; it is stored per-vault so re-opening always replays the exact
//! parameters the vault was created with.

use pbkdf2::pbkdf2_hmac;
use rand::RngCore;
use sha2::Sha256;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::errors::{PassVaultError, Result};

/// Length of the salt in bytes (128 bits).
pub const SALT_LEN: usize = 16;

/// Length of the derived key in bytes (256 bits, for AES-256).
const KEY_LEN: usize = 32;

/// Default PBKDF2 iteration count for newly created vaults.
pub const DEFAULT_KDF_ITERATIONS: u32 = 500_000;

/// A derived symmetric key whose backing memory is wiped on every exit
/// path, including early returns and failures.
///
/// The raw bytes never appear in logs or error messages.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct DerivedKey {
    bytes: [u8; KEY_LEN],
}

impl DerivedKey {
    /// Access the raw key bytes (e.g. to build a cipher).
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.bytes
    }
}

/// Derive a 32-byte key from a password and salt.
///
/// The same password + salt + iteration count always produces the same
/// key.  Fails if the iteration count is zero.
pub fn derive_key(password: &[u8], salt: &[u8], iterations: u32) -> Result<DerivedKey> {
    if iterations == 0 {
        return Err(PassVaultError::Validation(
            "KDF iteration count must be at least 1".into(),
        ));
    }

    let mut bytes = [0u8; KEY_LEN];
    pbkdf2_hmac::<Sha256>(password, salt, iterations, &mut bytes);

    let key = DerivedKey { bytes };
    bytes.zeroize();
    Ok(key)
}

/// Generate a cryptographically random 16-byte salt.
pub fn generate_salt() -> [u8; SALT_LEN] {
    let mut salt = [0u8; SALT_LEN];
    rand::rng().fill_bytes(&mut salt);
    salt
}
