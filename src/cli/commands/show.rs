//! `passvault show` — list vaults or print a vault, folder, or entry.

use crate::cli::path::TargetPath;
use crate::cli::{open_storage, output, prompt_password, Cli};
use crate::errors::Result;

/// Execute the `show` command.
pub fn execute(cli: &Cli, path: Option<&str>) -> Result<()> {
    let storage = open_storage(cli)?;

    // No path: list the vault names, no password required.
    let Some(path) = path else {
        let names = storage.list_vault_names()?;
        output::print_vault_names(&names);
        return Ok(());
    };

    let target = TargetPath::parse(path)?;
    let password = prompt_password()?;
    let vault = storage.load_vault(target.vault(), password.as_bytes())?;

    match &target {
        TargetPath::Vault { .. } => {
            output::print_vault_tree(&vault);
        }
        TargetPath::Folder { folder, .. } => {
            output::print_folder_table(vault.get_folder(folder)?);
        }
        TargetPath::Entry { folder, entry, .. } => {
            output::print_entry(vault.get_entry(folder, entry)?);
        }
    }

    Ok(())
}
