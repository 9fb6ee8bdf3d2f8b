//! `passvault update` — rename a vault or folder, or replace an entry.

use crate::cli::path::TargetPath;
use crate::cli::{open_storage, output, prompt_line, prompt_password, prompt_secret, Cli};
use crate::errors::{PassVaultError, Result};
use crate::storage::Storage;
use crate::vault::{Entry, EntryKind};

/// Execute the `update` command.
pub fn execute(cli: &Cli, path: &str) -> Result<()> {
    let target = TargetPath::parse(path)?;
    let storage = open_storage(cli)?;

    match target {
        TargetPath::Vault { vault } => rename_vault(&storage, &vault),
        TargetPath::Folder { vault, folder } => rename_folder(&storage, &vault, &folder),
        TargetPath::Entry {
            vault,
            folder,
            entry,
        } => update_entry(&storage, &vault, &folder, &entry),
    }
}

/// Rename a vault, moving its backing file.
fn rename_vault(storage: &Storage, old_name: &str) -> Result<()> {
    let password = prompt_password()?;
    let new_name = prompt_line("New vault name")?;

    storage.rename_vault(old_name, &new_name, password.as_bytes())?;

    output::success(&format!("Vault '{old_name}' renamed to '{new_name}'"));
    Ok(())
}

/// Rename a folder inside a vault.
fn rename_folder(storage: &Storage, vault_name: &str, folder_name: &str) -> Result<()> {
    let password = prompt_password()?;
    let mut vault = storage.load_vault(vault_name, password.as_bytes())?;

    // Fail before prompting if the folder is missing.
    vault.get_folder(folder_name)?;

    let new_name = prompt_line("New folder name")?;
    vault.rename_folder(folder_name, &new_name)?;
    storage.save_vault(&vault, password.as_bytes())?;

    output::success(&format!(
        "Folder '{folder_name}' renamed to '{new_name}' in '{vault_name}'"
    ));
    Ok(())
}

/// Replace an entry's name and contents, keeping its variant.
fn update_entry(
    storage: &Storage,
    vault_name: &str,
    folder_name: &str,
    entry_name: &str,
) -> Result<()> {
    let password = prompt_password()?;
    let mut vault = storage.load_vault(vault_name, password.as_bytes())?;

    let kind = vault.get_entry(folder_name, entry_name)?.kind();

    let new_name = prompt_line("New entry name")?;
    if new_name != entry_name && vault.entry_exists(folder_name, &new_name) {
        return Err(PassVaultError::DuplicateName(format!(
            "entry '{new_name}' in folder '{folder_name}'"
        )));
    }

    let new_entry = match kind {
        EntryKind::Credential => {
            let username = prompt_line("New username")?;
            let entry_password = prompt_secret("New password")?;
            Entry::credential(username, entry_password.as_str())
        }
        EntryKind::Note => {
            let text = prompt_line("New note contents")?;
            Entry::note(text)
        }
    };

    let folder = vault.get_folder_mut(folder_name)?;
    // Delete first so re-using the same name does not trip the
    // duplicate check; the new-name collision was checked above.
    folder.delete_entry(entry_name);
    folder.add_entry(new_name.as_str(), new_entry)?;
    storage.save_vault(&vault, password.as_bytes())?;

    output::success(&format!(
        "Entry '{entry_name}' updated in '{vault_name}/{folder_name}'"
    ));
    Ok(())
}
