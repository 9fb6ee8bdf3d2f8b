//! `passvault add` — create a vault, folder, credential, or note.

use crate::cli::path::TargetPath;
use crate::cli::{
    open_storage, output, prompt_line, prompt_new_password, prompt_password, prompt_secret, Cli,
};
use crate::config::Settings;
use crate::errors::{PassVaultError, Result};
use crate::storage::Storage;
use crate::vault::{Entry, Folder, Vault};

/// Execute the `add` command.
pub fn execute(cli: &Cli, path: &str, credential: bool, note: bool) -> Result<()> {
    let target = TargetPath::parse(path)?;
    let storage = open_storage(cli)?;

    match target {
        TargetPath::Vault { vault } => add_vault(&storage, &vault),
        TargetPath::Folder { vault, folder } => add_folder(&storage, &vault, &folder),
        TargetPath::Entry {
            vault,
            folder,
            entry,
        } => add_entry(&storage, &vault, &folder, &entry, credential, note),
    }
}

/// Create a new empty vault, prompting for a fresh master password.
fn add_vault(storage: &Storage, name: &str) -> Result<()> {
    if storage.vault_exists(name) {
        return Err(PassVaultError::DuplicateName(format!("vault '{name}'")));
    }

    let password = prompt_new_password()?;

    let settings = Settings::load()?;
    let vault = Vault::with_kdf_iterations(name, settings.kdf_iterations);
    storage.save_vault(&vault, password.as_bytes())?;

    output::success(&format!("Vault '{name}' created"));
    output::tip("Run `passvault add <vault>/<folder>` to add a folder.");
    Ok(())
}

/// Add an empty folder to an existing vault.
fn add_folder(storage: &Storage, vault_name: &str, folder_name: &str) -> Result<()> {
    let password = prompt_password()?;
    let mut vault = storage.load_vault(vault_name, password.as_bytes())?;

    vault.add_folder(Folder::new(folder_name))?;
    storage.save_vault(&vault, password.as_bytes())?;

    output::success(&format!("Folder '{folder_name}' added to '{vault_name}'"));
    Ok(())
}

/// Add a credential or note entry, prompting for its contents.
fn add_entry(
    storage: &Storage,
    vault_name: &str,
    folder_name: &str,
    entry_name: &str,
    credential: bool,
    note: bool,
) -> Result<()> {
    if credential == note {
        return Err(PassVaultError::CommandFailed(
            "specify exactly one of --credential or --note when adding an entry".into(),
        ));
    }

    let password = prompt_password()?;
    let mut vault = storage.load_vault(vault_name, password.as_bytes())?;

    // Check before prompting for contents so a typo fails fast.
    vault.get_folder(folder_name)?;
    if vault.entry_exists(folder_name, entry_name) {
        return Err(PassVaultError::DuplicateName(format!(
            "entry '{entry_name}' in folder '{folder_name}'"
        )));
    }

    let entry = if credential {
        let username = prompt_line("Username")?;
        let entry_password = prompt_secret("Password")?;
        Entry::credential(username, entry_password.as_str())
    } else {
        let text = prompt_line("Note contents")?;
        Entry::note(text)
    };

    vault.add_entry(folder_name, entry_name, entry)?;
    storage.save_vault(&vault, password.as_bytes())?;

    output::success(&format!(
        "Entry '{entry_name}' added to '{vault_name}/{folder_name}'"
    ));
    Ok(())
}
