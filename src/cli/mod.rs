//! CLI module: Clap argument parser, prompts, output helpers, and
//! command implementations.

pub mod commands;
pub mod output;
pub mod path;

use clap::Parser;

use zeroize::Zeroizing;

use crate::config::Settings;
use crate::errors::{PassVaultError, Result};
use crate::storage::Storage;

/// Minimum master password length for newly created vaults.
const MIN_PASSWORD_LEN: usize = 8;

/// PassVault CLI: encrypted password and note manager.
#[derive(Parser)]
#[command(
    name = "passvault",
    about = "Encrypted password and note manager",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Vaults directory (default: the platform data directory)
    #[arg(long, global = true)]
    pub vaults_dir: Option<String>,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Add a vault, folder, or entry
    Add {
        /// Target in vault[/folder[/entry]] form
        path: String,

        /// The entry being added is a credential
        #[arg(short, long)]
        credential: bool,

        /// The entry being added is a note
        #[arg(short, long)]
        note: bool,
    },

    /// Show all vaults, one vault, one folder, or one entry
    Show {
        /// Target in vault[/folder[/entry]] form (omit to list vaults)
        path: Option<String>,
    },

    /// Rename a vault or folder, or replace an entry's name and contents
    Update {
        /// Target in vault[/folder[/entry]] form
        path: String,
    },

    /// Delete a vault, folder, or entry
    Delete {
        /// Target in vault[/folder[/entry]] form
        path: String,

        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell)
        shell: String,
    },
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Open the storage directory, honoring the `--vaults-dir` flag, then
/// the config file, then the platform default.
pub fn open_storage(cli: &Cli) -> Result<Storage> {
    let settings = Settings::load()?;
    let dir = settings.resolve_vaults_dir(cli.vaults_dir.as_deref())?;
    Storage::new(dir)
}

/// Translate a prompt failure into a typed error.
///
/// An interrupted read (Ctrl-C / closed stdin) is a cancellation, not a
/// generic failure, so callers can exit quietly.
fn prompt_error(context: &str, e: dialoguer::Error) -> PassVaultError {
    let dialoguer::Error::IO(io_err) = e;
    match io_err.kind() {
        std::io::ErrorKind::Interrupted | std::io::ErrorKind::UnexpectedEof => {
            PassVaultError::UserCancelled
        }
        _ => PassVaultError::CommandFailed(format!("{context}: {io_err}")),
    }
}

/// Get the master password for an existing vault, trying in order:
/// 1. `PASSVAULT_PASSWORD` env var (scripting/CI)
/// 2. Interactive prompt
///
/// Returns `Zeroizing<String>` so the password is wiped from memory on drop.
pub fn prompt_password() -> Result<Zeroizing<String>> {
    if let Ok(pw) = std::env::var("PASSVAULT_PASSWORD") {
        if !pw.is_empty() {
            return Ok(Zeroizing::new(pw));
        }
    }

    let pw = dialoguer::Password::new()
        .with_prompt("Master password")
        .interact()
        .map_err(|e| prompt_error("password prompt", e))?;
    Ok(Zeroizing::new(pw))
}

/// Prompt for a new master password with confirmation (used when a
/// vault is created).
///
/// Also respects `PASSVAULT_PASSWORD` for scripted usage.  Enforces a
/// minimum password length.
pub fn prompt_new_password() -> Result<Zeroizing<String>> {
    if let Ok(pw) = std::env::var("PASSVAULT_PASSWORD") {
        if !pw.is_empty() {
            if pw.len() < MIN_PASSWORD_LEN {
                return Err(PassVaultError::CommandFailed(format!(
                    "password must be at least {MIN_PASSWORD_LEN} characters"
                )));
            }
            return Ok(Zeroizing::new(pw));
        }
    }

    loop {
        let password = dialoguer::Password::new()
            .with_prompt("Choose master password")
            .with_confirmation("Confirm master password", "Passwords do not match, try again")
            .interact()
            .map_err(|e| prompt_error("password prompt", e))?;

        if password.len() < MIN_PASSWORD_LEN {
            output::warning(&format!(
                "Password must be at least {MIN_PASSWORD_LEN} characters. Try again."
            ));
            continue;
        }

        return Ok(Zeroizing::new(password));
    }
}

/// Prompt for a single line of visible input (names, usernames, notes).
pub fn prompt_line(label: &str) -> Result<String> {
    dialoguer::Input::new()
        .with_prompt(label)
        .allow_empty(true)
        .interact_text()
        .map_err(|e| prompt_error("input prompt", e))
}

/// Prompt for a hidden value (an entry's password).
pub fn prompt_secret(label: &str) -> Result<Zeroizing<String>> {
    let value = dialoguer::Password::new()
        .with_prompt(label)
        .allow_empty_password(true)
        .interact()
        .map_err(|e| prompt_error("input prompt", e))?;
    Ok(Zeroizing::new(value))
}

/// Ask for a yes/no confirmation, defaulting to no.
pub fn confirm(prompt: &str) -> Result<bool> {
    dialoguer::Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| prompt_error("confirm prompt", e))
}
