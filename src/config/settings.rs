use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::crypto::kdf::DEFAULT_KDF_ITERATIONS;
use crate::errors::{PassVaultError, Result};

/// User-level configuration, loaded from
/// `<config_dir>/passvault/config.toml`.
///
/// Every field has a sensible default so PassVault works out-of-the-box
/// without any config file at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Directory where vault files are stored.  When unset, the
    /// platform default data directory is used.
    #[serde(default)]
    pub vaults_dir: Option<String>,

    /// PBKDF2 iteration count applied to newly created vaults.
    /// Existing vaults keep the count stored in their envelope.
    #[serde(default = "default_kdf_iterations")]
    pub kdf_iterations: u32,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_kdf_iterations() -> u32 {
    DEFAULT_KDF_ITERATIONS
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            vaults_dir: None,
            kdf_iterations: default_kdf_iterations(),
        }
    }
}

impl Settings {
    /// Config file path relative to the platform config directory.
    const FILE_NAME: &'static str = "config.toml";

    /// Load settings from `<config_dir>/passvault/config.toml`.
    ///
    /// If the file does not exist, defaults are returned.  If the file
    /// exists but cannot be parsed, an error is returned.
    pub fn load() -> Result<Self> {
        match dirs::config_dir() {
            Some(dir) => Self::load_from(&dir.join("passvault")),
            None => Ok(Self::default()),
        }
    }

    /// Load settings from `<dir>/config.toml` (separated out for tests).
    pub fn load_from(dir: &Path) -> Result<Self> {
        let config_path = dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            PassVaultError::CommandFailed(format!(
                "failed to parse {}: {e}",
                config_path.display()
            ))
        })?;

        Ok(settings)
    }

    /// Resolve the vaults directory: an explicit CLI flag wins, then the
    /// config file, then the platform default.
    pub fn resolve_vaults_dir(&self, cli_override: Option<&str>) -> Result<PathBuf> {
        if let Some(dir) = cli_override {
            return Ok(PathBuf::from(dir));
        }
        if let Some(dir) = &self.vaults_dir {
            return Ok(PathBuf::from(dir));
        }
        crate::storage::default_vaults_dir()
    }
}

// ── Tests ────────────────────────────────────────────────────────────
