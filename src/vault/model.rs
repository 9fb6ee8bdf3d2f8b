//! The vault: a named collection of folders plus the encryption
//! parameters used to protect it at rest.
//!
//! Crypto parameters are per-vault state.  They are generated once when
//! the vault is created (fresh random salt, fixed default algorithm and
//! KDF) and carried forward on every re-save, so re-encryption keeps the
//! vault's established salt and iteration count.

use std::collections::BTreeMap;

use crate::crypto::kdf::{generate_salt, DEFAULT_KDF_ITERATIONS};
use crate::crypto::{AES_256_GCM, PBKDF2_SHA256};
use crate::errors::{PassVaultError, Result};

use super::entry::Entry;
use super::folder::Folder;

/// Encryption parameters carried by a vault.
///
/// The salt is long-lived: generated at vault creation and reused across
/// re-saves unless deliberately rotated.  The nonce is NOT part of this
/// state; a fresh one is generated on every encryption call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CryptoParams {
    pub algorithm: String,
    pub kdf: String,
    pub kdf_iterations: u32,
    pub salt: Vec<u8>,
}

impl CryptoParams {
    /// Fresh parameters for a new vault: default algorithm pair and a
    /// newly generated random salt.
    pub fn generate(kdf_iterations: u32) -> Self {
        Self {
            algorithm: AES_256_GCM.to_string(),
            kdf: PBKDF2_SHA256.to_string(),
            kdf_iterations,
            salt: generate_salt().to_vec(),
        }
    }
}

/// A named vault owning folders, which in turn own entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vault {
    name: String,
    folders: BTreeMap<String, Folder>,
    crypto: CryptoParams,
}

impl Vault {
    /// Create an empty vault with default crypto parameters.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_kdf_iterations(name, DEFAULT_KDF_ITERATIONS)
    }

    /// Create an empty vault with an explicit KDF iteration count
    /// (e.g. from the config file).
    pub fn with_kdf_iterations(name: impl Into<String>, kdf_iterations: u32) -> Self {
        Self {
            name: name.into(),
            folders: BTreeMap::new(),
            crypto: CryptoParams::generate(kdf_iterations),
        }
    }

    /// The vault's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Change the vault's name.
    ///
    /// This only updates the in-memory object; the backing file is keyed
    /// by name too, so `Storage::rename_vault` is the operation that keeps
    /// disk and memory consistent.
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// The vault's encryption parameters.
    pub fn crypto(&self) -> &CryptoParams {
        &self.crypto
    }

    /// Replace the encryption parameters.
    ///
    /// Used by storage to copy the envelope's parameters back onto a
    /// freshly loaded vault so the next save reuses them.
    pub fn set_crypto(&mut self, crypto: CryptoParams) {
        self.crypto = crypto;
    }

    // ------------------------------------------------------------------
    // Folder operations
    // ------------------------------------------------------------------

    /// Insert a folder, taking ownership.  The folder's own name becomes
    /// the map key.
    ///
    /// Fails with `DuplicateName` if a folder with that name is already
    /// present; the vault is left unchanged in that case.
    pub fn add_folder(&mut self, folder: Folder) -> Result<()> {
        let name = folder.name().to_string();
        if self.folders.contains_key(&name) {
            return Err(PassVaultError::DuplicateName(format!(
                "folder '{name}' in vault '{}'",
                self.name
            )));
        }
        self.folders.insert(name, folder);
        Ok(())
    }

    /// Look up a folder by name.
    pub fn get_folder(&self, name: &str) -> Result<&Folder> {
        self.folders.get(name).ok_or_else(|| {
            PassVaultError::NotFound(format!("folder '{name}' in vault '{}'", self.name))
        })
    }

    /// Look up a folder by name, returning a mutable reference.
    pub fn get_folder_mut(&mut self, name: &str) -> Result<&mut Folder> {
        self.folders.get_mut(name).ok_or_else(|| {
            PassVaultError::NotFound(format!("folder '{name}' in vault '{}'", self.name))
        })
    }

    /// Remove a folder and everything in it.  Absent names are a no-op.
    pub fn delete_folder(&mut self, name: &str) {
        self.folders.remove(name);
    }

    /// Returns `true` if the vault contains a folder with the given name.
    pub fn folder_exists(&self, name: &str) -> bool {
        self.folders.contains_key(name)
    }

    /// All folder names, ordered by name.
    pub fn folder_names(&self) -> Vec<String> {
        self.folders.keys().cloned().collect()
    }

    /// Iterate over folders, ordered by name.
    pub fn folders(&self) -> impl Iterator<Item = &Folder> {
        self.folders.values()
    }

    /// Rename a folder, atomically re-keying the map and updating the
    /// folder's own name field so the two never diverge.
    ///
    /// Fails with `NotFound` if `old_name` is absent and `DuplicateName`
    /// if `new_name` is already taken; nothing is mutated on failure.
    pub fn rename_folder(&mut self, old_name: &str, new_name: &str) -> Result<()> {
        if !self.folders.contains_key(old_name) {
            return Err(PassVaultError::NotFound(format!(
                "folder '{old_name}' in vault '{}'",
                self.name
            )));
        }
        if old_name != new_name && self.folders.contains_key(new_name) {
            return Err(PassVaultError::DuplicateName(format!(
                "folder '{new_name}' in vault '{}'",
                self.name
            )));
        }

        // Checked above, so the remove cannot fail.
        if let Some(mut folder) = self.folders.remove(old_name) {
            folder.set_name(new_name.to_string());
            self.folders.insert(new_name.to_string(), folder);
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Entry pass-throughs
    // ------------------------------------------------------------------

    /// Add an entry to the named folder.  Fails with `NotFound` if the
    /// folder itself is missing.
    pub fn add_entry(
        &mut self,
        folder_name: &str,
        entry_name: impl Into<String>,
        entry: Entry,
    ) -> Result<()> {
        self.get_folder_mut(folder_name)?.add_entry(entry_name, entry)
    }

    /// Look up an entry inside the named folder.
    pub fn get_entry(&self, folder_name: &str, entry_name: &str) -> Result<&Entry> {
        self.get_folder(folder_name)?.get_entry(entry_name)
    }

    /// Remove an entry from the named folder.  Fails with `NotFound` only
    /// if the folder itself is missing; a missing entry is a no-op.
    pub fn delete_entry(&mut self, folder_name: &str, entry_name: &str) -> Result<()> {
        self.get_folder_mut(folder_name)?.delete_entry(entry_name);
        Ok(())
    }

    /// Returns `true` if the named folder exists and contains the named
    /// entry.  A missing folder simply yields `false`.
    pub fn entry_exists(&self, folder_name: &str, entry_name: &str) -> bool {
        self.folders
            .get(folder_name)
            .is_some_and(|f| f.entry_exists(entry_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_vault_has_default_crypto_params() {
        let vault = Vault::new("Personal");
        assert_eq!(vault.crypto().algorithm, AES_256_GCM);
        assert_eq!(vault.crypto().kdf, PBKDF2_SHA256);
        assert_eq!(vault.crypto().kdf_iterations, DEFAULT_KDF_ITERATIONS);
        assert_eq!(vault.crypto().salt.len(), 16);
    }

    #[test]
    fn fresh_vaults_get_fresh_salts() {
        let a = Vault::new("A");
        let b = Vault::new("B");
        assert_ne!(a.crypto().salt, b.crypto().salt);
    }

    #[test]
    fn add_and_get_folder() {
        let mut vault = Vault::new("Personal");
        vault.add_folder(Folder::new("Email")).unwrap();

        assert!(vault.folder_exists("Email"));
        assert_eq!(vault.get_folder("Email").unwrap().name(), "Email");
    }

    #[test]
    fn duplicate_folder_rejected() {
        let mut vault = Vault::new("Personal");
        vault.add_folder(Folder::new("Email")).unwrap();

        let result = vault.add_folder(Folder::new("Email"));
        assert!(matches!(result, Err(PassVaultError::DuplicateName(_))));
        assert_eq!(vault.folder_names().len(), 1);
    }

    #[test]
    fn delete_missing_folder_is_noop() {
        let mut vault = Vault::new("Personal");
        vault.add_folder(Folder::new("Email")).unwrap();

        vault.delete_folder("not-there");
        assert!(vault.folder_exists("Email"));
    }

    #[test]
    fn rename_folder_rekeys_map_and_member() {
        let mut vault = Vault::new("Personal");
        vault.add_folder(Folder::new("Email")).unwrap();

        vault.rename_folder("Email", "Mail").unwrap();

        assert!(!vault.folder_exists("Email"));
        assert!(vault.folder_exists("Mail"));
        // The map key and the folder's own name field must agree.
        assert_eq!(vault.get_folder("Mail").unwrap().name(), "Mail");
    }

    #[test]
    fn rename_folder_to_taken_name_fails_without_mutation() {
        let mut vault = Vault::new("Personal");
        vault.add_folder(Folder::new("Email")).unwrap();
        vault.add_folder(Folder::new("Banking")).unwrap();

        let result = vault.rename_folder("Email", "Banking");
        assert!(matches!(result, Err(PassVaultError::DuplicateName(_))));

        // Both folders still present under their original names.
        assert!(vault.folder_exists("Email"));
        assert!(vault.folder_exists("Banking"));
    }

    #[test]
    fn rename_missing_folder_fails() {
        let mut vault = Vault::new("Personal");
        let result = vault.rename_folder("ghost", "anything");
        assert!(matches!(result, Err(PassVaultError::NotFound(_))));
    }

    #[test]
    fn entry_passthroughs_resolve_folder_first() {
        let mut vault = Vault::new("Personal");
        vault.add_folder(Folder::new("Email")).unwrap();

        vault
            .add_entry("Email", "gmail", Entry::credential("me", "pw"))
            .unwrap();
        assert_eq!(
            vault.get_entry("Email", "gmail").unwrap(),
            &Entry::credential("me", "pw")
        );

        // Missing folder fails the pass-through.
        let result = vault.add_entry("ghost", "x", Entry::note("n"));
        assert!(matches!(result, Err(PassVaultError::NotFound(_))));
    }

    #[test]
    fn entry_exists_is_pure() {
        let mut vault = Vault::new("Personal");
        vault.add_folder(Folder::new("Email")).unwrap();

        // Missing folder is false, not an error.
        assert!(!vault.entry_exists("ghost", "anything"));
        assert!(!vault.entry_exists("Email", "anything"));

        vault
            .add_entry("Email", "gmail", Entry::note("hi"))
            .unwrap();
        assert!(vault.entry_exists("Email", "gmail"));
    }
}
