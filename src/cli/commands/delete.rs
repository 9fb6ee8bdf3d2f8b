//! `passvault delete` — delete a vault, folder, or entry.

use crate::cli::path::TargetPath;
use crate::cli::{confirm, open_storage, output, prompt_password, Cli};
use crate::errors::{PassVaultError, Result};
use crate::storage::Storage;

/// Execute the `delete` command.
pub fn execute(cli: &Cli, path: &str, force: bool) -> Result<()> {
    let target = TargetPath::parse(path)?;
    let storage = open_storage(cli)?;

    match target {
        TargetPath::Vault { vault } => delete_vault(&storage, &vault, force),
        TargetPath::Folder { vault, folder } => delete_folder(&storage, &vault, &folder, force),
        TargetPath::Entry {
            vault,
            folder,
            entry,
        } => delete_entry(&storage, &vault, &folder, &entry, force),
    }
}

/// Delete a whole vault file.  Requires the master password even though
/// the file could be removed without it; an unauthenticated caller
/// should not be able to destroy a vault through this tool.
fn delete_vault(storage: &Storage, name: &str, force: bool) -> Result<()> {
    let password = prompt_password()?;
    storage.load_vault(name, password.as_bytes())?;

    if !force
        && !confirm(&format!(
            "Delete vault '{name}' and all of its content?"
        ))?
    {
        output::info("Cancelled.");
        return Ok(());
    }

    storage.delete_vault(name)?;
    output::success(&format!("Vault '{name}' deleted"));
    Ok(())
}

/// Delete a folder and everything in it.
fn delete_folder(storage: &Storage, vault_name: &str, folder_name: &str, force: bool) -> Result<()> {
    let password = prompt_password()?;
    let mut vault = storage.load_vault(vault_name, password.as_bytes())?;

    // The model-level delete is a no-op for absent names; at the CLI
    // level the user named something specific, so a typo is an error.
    vault.get_folder(folder_name)?;

    if !force
        && !confirm(&format!(
            "Delete folder '{folder_name}' and all of its content?"
        ))?
    {
        output::info("Cancelled.");
        return Ok(());
    }

    vault.delete_folder(folder_name);
    storage.save_vault(&vault, password.as_bytes())?;

    output::success(&format!("Folder '{folder_name}' deleted from '{vault_name}'"));
    Ok(())
}

/// Delete a single entry.
fn delete_entry(
    storage: &Storage,
    vault_name: &str,
    folder_name: &str,
    entry_name: &str,
    force: bool,
) -> Result<()> {
    let password = prompt_password()?;
    let mut vault = storage.load_vault(vault_name, password.as_bytes())?;

    if !vault.entry_exists(folder_name, entry_name) {
        return Err(PassVaultError::NotFound(format!(
            "entry '{entry_name}' in folder '{folder_name}'"
        )));
    }

    if !force && !confirm(&format!("Delete entry '{entry_name}'?"))? {
        output::info("Cancelled.");
        return Ok(());
    }

    vault.delete_entry(folder_name, entry_name)?;
    storage.save_vault(&vault, password.as_bytes())?;

    output::success(&format!(
        "Entry '{entry_name}' deleted from '{vault_name}/{folder_name}'"
    ));
    Ok(())
}
