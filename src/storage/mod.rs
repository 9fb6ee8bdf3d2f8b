//! File-per-vault persistence.
//!
//! Saving is serialize -> encrypt -> write: the plaintext document never
//! touches disk, only the encryption envelope does.  The destination
//! file is named deterministically from the vault's name
//! (`<name>.json`), so two vaults with the same name cannot collide; a
//! save simply overwrites.
//!
//! The directory is treated as exclusively owned by one running process;
//! there is no file locking, and concurrent writers are out of scope.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use zeroize::Zeroizing;

use crate::crypto::{decrypt, encrypt, EncryptedBlob};
use crate::errors::{PassVaultError, Result};
use crate::vault::{document, CryptoParams, Vault};

/// Manages saving and loading vaults in a single directory.
pub struct Storage {
    vaults_dir: PathBuf,
}

impl Storage {
    /// Open a storage directory, creating it if it does not exist.
    pub fn new(directory: impl Into<PathBuf>) -> Result<Self> {
        let vaults_dir = directory.into();
        if !vaults_dir.exists() {
            fs::create_dir_all(&vaults_dir)?;
        }
        Ok(Self { vaults_dir })
    }

    /// The directory vault files live in.
    pub fn vaults_dir(&self) -> &Path {
        &self.vaults_dir
    }

    /// Full path of the file backing the named vault.
    fn vault_path(&self, name: &str) -> PathBuf {
        self.vaults_dir.join(format!("{name}.json"))
    }

    // ------------------------------------------------------------------
    // Save / load
    // ------------------------------------------------------------------

    /// Serialize, encrypt, and write a vault **atomically**.
    ///
    /// Encryption reuses the vault's own parameters (salt, KDF,
    /// iteration count), so re-saving keeps the established salt while
    /// the nonce is fresh on every call.  The envelope is written to a
    /// temp file in the same directory and renamed over the target, so
    /// readers never see a half-written file.
    pub fn save_vault(&self, vault: &Vault, password: &[u8]) -> Result<()> {
        let plaintext = Zeroizing::new(document::to_json(vault)?);

        let params = vault.crypto();
        let blob = encrypt(
            plaintext.as_bytes(),
            password,
            &params.algorithm,
            &params.kdf,
            &params.salt,
            params.kdf_iterations,
        )?;

        let envelope = serde_json::to_string_pretty(&blob)
            .map_err(|e| PassVaultError::Validation(format!("serialize envelope: {e}")))?;

        let path = self.vault_path(vault.name());
        let tmp_path = self.vaults_dir.join(format!(".{}.tmp", vault.name()));

        fs::write(&tmp_path, envelope)?;
        fs::rename(&tmp_path, &path)?;

        Ok(())
    }

    /// Read, decrypt, and rebuild the named vault.
    ///
    /// The envelope's algorithm, KDF, iteration count, and salt are
    /// copied back onto the reconstructed vault so a subsequent save
    /// reuses the same parameters.
    pub fn load_vault(&self, name: &str, password: &[u8]) -> Result<Vault> {
        let path = self.vault_path(name);
        if !path.exists() {
            return Err(PassVaultError::NotFound(format!("vault '{name}'")));
        }

        let data = fs::read_to_string(&path)?;

        // Envelope syntax errors (bad JSON, missing keys, bad base64)
        // are parse failures; they say nothing about the password.
        let blob: EncryptedBlob =
            serde_json::from_str(&data).map_err(|e| PassVaultError::Parse(e.to_string()))?;

        let plaintext = decrypt(&blob, password)?;
        let text = std::str::from_utf8(&plaintext)
            .map_err(|_| PassVaultError::Validation("vault document is not valid UTF-8".into()))?;

        let mut vault = document::from_json(text)?;
        vault.set_crypto(CryptoParams {
            algorithm: blob.algorithm,
            kdf: blob.kdf,
            kdf_iterations: blob.kdf_iterations,
            salt: blob.salt,
        });

        Ok(vault)
    }

    // ------------------------------------------------------------------
    // Directory helpers
    // ------------------------------------------------------------------

    /// Returns `true` if a file backing the named vault exists.
    pub fn vault_exists(&self, name: &str) -> bool {
        self.vault_path(name).exists()
    }

    /// Remove the named vault's file.  Returns whether a file was
    /// actually removed; a missing file is not an error here.
    pub fn delete_vault(&self, name: &str) -> Result<bool> {
        match fs::remove_file(self.vault_path(name)) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    /// Names of all vaults in the directory, sorted.
    ///
    /// Only regular files matching the `<name>.json` convention are
    /// reported; unrelated files are ignored.
    pub fn list_vault_names(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();

        for dir_entry in fs::read_dir(&self.vaults_dir)? {
            let dir_entry = dir_entry?;
            if !dir_entry.file_type()?.is_file() {
                continue;
            }

            let path = dir_entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }

            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                if !stem.is_empty() {
                    names.push(stem.to_string());
                }
            }
        }

        names.sort();
        Ok(names)
    }

    /// Rename a vault, moving its backing file.
    ///
    /// Loads with the password (so the rename is authenticated), saves
    /// under the new name, and removes the old file.  Fails with
    /// `DuplicateName` if the target name is already taken.
    pub fn rename_vault(&self, old_name: &str, new_name: &str, password: &[u8]) -> Result<()> {
        if old_name == new_name {
            return Ok(());
        }
        if self.vault_exists(new_name) {
            return Err(PassVaultError::DuplicateName(format!(
                "vault '{new_name}'"
            )));
        }

        let mut vault = self.load_vault(old_name, password)?;
        vault.rename(new_name);
        self.save_vault(&vault, password)?;
        self.delete_vault(old_name)?;

        Ok(())
    }
}

/// Platform default vaults directory: `<data_dir>/passvault/vaults`.
///
/// Resolves to `~/.local/share` (XDG), `~/Library/Application Support`,
/// or `%LOCALAPPDATA%` depending on the platform.
pub fn default_vaults_dir() -> Result<PathBuf> {
    let data_dir = dirs::data_dir().ok_or_else(|| {
        PassVaultError::CommandFailed("could not determine the platform data directory".into())
    })?;
    Ok(data_dir.join("passvault").join("vaults"))
}
