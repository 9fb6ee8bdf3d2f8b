//! Colored terminal output helpers.
//!
//! All user-facing output goes through these functions so we get
//! consistent styling across every command.  The core library never
//! prints; only this layer does.

use comfy_table::{ContentArrangement, Table};
use console::style;

use crate::vault::{Entry, Folder, Vault};

/// Print a green success message: "check_mark {msg}"
pub fn success(msg: &str) {
    println!("{} {}", style("\u{2713}").green().bold(), msg);
}

/// Print a red error message: "x_mark {msg}"
pub fn error(msg: &str) {
    eprintln!("{} {}", style("\u{2717}").red().bold(), msg);
}

/// Print a yellow warning: "warning_sign {msg}"
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("\u{26a0}").yellow().bold(), msg);
}

/// Print a blue info message: "info_sign {msg}"
pub fn info(msg: &str) {
    println!("{} {}", style("\u{2139}").blue().bold(), msg);
}

/// Print a dim tip/hint: "arrow {msg}"
pub fn tip(msg: &str) {
    println!("{} {}", style("\u{2192}").dim(), style(msg).dim());
}

/// Print the names of all vaults, one per line.
pub fn print_vault_names(names: &[String]) {
    if names.is_empty() {
        info("No vaults found.");
        tip("Run `passvault add <vault>` to create one.");
        return;
    }

    for name in names {
        println!("{name}");
    }
}

/// Print a vault as a tree of folders and entry names.
pub fn print_vault_tree(vault: &Vault) {
    if vault.folder_names().is_empty() {
        info("This vault has no folders yet.");
        tip("Run `passvault add <vault>/<folder>` to add one.");
        return;
    }

    for folder in vault.folders() {
        println!("/{}", style(folder.name()).bold());
        for name in folder.entry_names() {
            println!("  {name}");
        }
    }
}

/// Print a table of a folder's entries (Name, Type).
pub fn print_folder_table(folder: &Folder) {
    if folder.entry_count() == 0 {
        info("This folder has no entries yet.");
        tip("Run `passvault add <vault>/<folder>/<entry> -c` to add a credential.");
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Name", "Type"]);

    for (name, entry) in folder.entries() {
        table.add_row(vec![name.clone(), entry.kind().label().to_string()]);
    }

    println!("{table}");
}

/// Print a single entry's contents.
pub fn print_entry(entry: &Entry) {
    match entry {
        Entry::Credential { username, password } => {
            println!("Username: {username}");
            println!("Password: {password}");
        }
        Entry::Note { text } => {
            println!("{text}");
        }
    }
}
