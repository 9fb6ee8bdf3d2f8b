//! The canonical JSON document for a vault.
//!
//! ```text
//! Vault  := { "name": string, "folders": [Folder, ...] }
//! Folder := { "name": string, "entries": [Entry, ...] }
//! Entry  := { "type": "CREDENTIAL", "name": ..., "username": ..., "password": ... }
//!         | { "type": "NOTE", "name": ..., "text": ... }
//! ```
//!
//! Each entry element carries its own `name` alongside the type-tagged
//! payload: the writer inlines the owning folder's map key into the
//! element, and the reader re-extracts it into the map key.  Array order
//! is not part of the contract and must not be relied upon.
//!
//! Inbound validation is strict and fail-fast: a missing or wrong-typed
//! field, a `type` outside the known tags, or a duplicate name anywhere
//! rejects the whole document.  Unrecognized extra fields are ignored so
//! newer writers stay readable.

use serde::{Deserialize, Serialize};

use crate::errors::{PassVaultError, Result};

use super::entry::Entry;
use super::folder::Folder;
use super::model::Vault;

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Serialize, Deserialize)]
struct VaultDocument {
    name: String,
    folders: Vec<FolderDocument>,
}

#[derive(Serialize, Deserialize)]
struct FolderDocument {
    name: String,
    entries: Vec<EntryDocument>,
}

#[derive(Serialize, Deserialize)]
#[serde(tag = "type")]
enum EntryDocument {
    #[serde(rename = "CREDENTIAL")]
    Credential {
        name: String,
        username: String,
        password: String,
    },

    #[serde(rename = "NOTE")]
    Note { name: String, text: String },
}

impl EntryDocument {
    fn from_entry(name: &str, entry: &Entry) -> Self {
        match entry {
            Entry::Credential { username, password } => EntryDocument::Credential {
                name: name.to_string(),
                username: username.clone(),
                password: password.clone(),
            },
            Entry::Note { text } => EntryDocument::Note {
                name: name.to_string(),
                text: text.clone(),
            },
        }
    }

    fn into_parts(self) -> (String, Entry) {
        match self {
            EntryDocument::Credential {
                name,
                username,
                password,
            } => (name, Entry::Credential { username, password }),
            EntryDocument::Note { name, text } => (name, Entry::Note { text }),
        }
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Serialize a vault to its canonical JSON document.
///
/// Total for any in-memory vault; the crypto parameters are not part of
/// the document (they live in the envelope).
pub fn to_json(vault: &Vault) -> Result<String> {
    let doc = VaultDocument {
        name: vault.name().to_string(),
        folders: vault
            .folders()
            .map(|folder| FolderDocument {
                name: folder.name().to_string(),
                entries: folder
                    .entries()
                    .map(|(name, entry)| EntryDocument::from_entry(name, entry))
                    .collect(),
            })
            .collect(),
    };

    serde_json::to_string(&doc).map_err(|e| PassVaultError::Validation(format!("serialize: {e}")))
}

/// Rebuild a vault from its canonical JSON document.
///
/// The returned vault carries fresh default crypto parameters; the
/// loader copies the envelope's stored parameters over them.
pub fn from_json(json: &str) -> Result<Vault> {
    let doc: VaultDocument =
        serde_json::from_str(json).map_err(|e| PassVaultError::Validation(e.to_string()))?;

    let mut vault = Vault::new(doc.name);
    for folder_doc in doc.folders {
        let mut folder = Folder::new(folder_doc.name);
        for entry_doc in folder_doc.entries {
            let (name, entry) = entry_doc.into_parts();
            folder.add_entry(name, entry).map_err(reject_duplicate)?;
        }
        vault.add_folder(folder).map_err(reject_duplicate)?;
    }
    Ok(vault)
}

/// A duplicate name inside a document means the document is malformed:
/// the model cannot represent it, and dropping one of the two would
/// silently lose data.
fn reject_duplicate(err: PassVaultError) -> PassVaultError {
    PassVaultError::Validation(format!("duplicate name: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_vault() -> Vault {
        let mut vault = Vault::new("Personal");
        let mut email = Folder::new("Email");
        email
            .add_entry("gmail", Entry::credential("me@example.com", "hunter2"))
            .unwrap();
        email
            .add_entry("recovery codes", Entry::note("1111\n2222\n3333"))
            .unwrap();
        vault.add_folder(email).unwrap();
        vault.add_folder(Folder::new("Banking")).unwrap();
        vault
    }

    #[test]
    fn roundtrip_preserves_tree() {
        let vault = sample_vault();
        let json = to_json(&vault).unwrap();
        let rebuilt = from_json(&json).unwrap();

        assert_eq!(rebuilt.name(), "Personal");
        assert_eq!(rebuilt.folder_names(), vec!["Banking", "Email"]);

        let email = rebuilt.get_folder("Email").unwrap();
        assert_eq!(email.entry_names(), vec!["gmail", "recovery codes"]);
        assert_eq!(
            email.get_entry("gmail").unwrap(),
            &Entry::credential("me@example.com", "hunter2")
        );
        assert_eq!(
            email.get_entry("recovery codes").unwrap(),
            &Entry::note("1111\n2222\n3333")
        );
    }

    #[test]
    fn entries_carry_inlined_names_and_tags() {
        let json = to_json(&sample_vault()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let folders = value["folders"].as_array().unwrap();
        let email = folders
            .iter()
            .find(|f| f["name"] == "Email")
            .expect("Email folder present");

        let entries = email["entries"].as_array().unwrap();
        let gmail = entries
            .iter()
            .find(|e| e["name"] == "gmail")
            .expect("gmail entry present");
        assert_eq!(gmail["type"], "CREDENTIAL");
        assert_eq!(gmail["username"], "me@example.com");
        assert_eq!(gmail["password"], "hunter2");
    }

    #[test]
    fn missing_vault_name_rejected() {
        let result = from_json(r#"{"folders": []}"#);
        assert!(matches!(result, Err(PassVaultError::Validation(_))));
    }

    #[test]
    fn wrong_typed_name_rejected() {
        let result = from_json(r#"{"name": 42, "folders": []}"#);
        assert!(matches!(result, Err(PassVaultError::Validation(_))));
    }

    #[test]
    fn missing_folders_array_rejected() {
        let result = from_json(r#"{"name": "V"}"#);
        assert!(matches!(result, Err(PassVaultError::Validation(_))));
    }

    #[test]
    fn folder_missing_entries_rejected() {
        let result = from_json(r#"{"name": "V", "folders": [{"name": "F"}]}"#);
        assert!(matches!(result, Err(PassVaultError::Validation(_))));
    }

    #[test]
    fn entry_missing_required_field_rejected() {
        // A CREDENTIAL without a password is malformed.
        let json = r#"{"name": "V", "folders": [{"name": "F", "entries": [
            {"type": "CREDENTIAL", "name": "e", "username": "u"}
        ]}]}"#;
        let result = from_json(json);
        assert!(matches!(result, Err(PassVaultError::Validation(_))));
    }

    #[test]
    fn unknown_type_tag_rejected() {
        let json = r#"{"name": "V", "folders": [{"name": "F", "entries": [
            {"type": "TOTP", "name": "e", "secret": "s"}
        ]}]}"#;
        let result = from_json(json);
        assert!(matches!(result, Err(PassVaultError::Validation(_))));
    }

    #[test]
    fn duplicate_entry_names_rejected() {
        let json = r#"{"name": "V", "folders": [{"name": "F", "entries": [
            {"type": "NOTE", "name": "e", "text": "one"},
            {"type": "NOTE", "name": "e", "text": "two"}
        ]}]}"#;
        let result = from_json(json);
        assert!(matches!(result, Err(PassVaultError::Validation(_))));
    }

    #[test]
    fn extra_fields_ignored() {
        let json = r#"{"name": "V", "schema": 3, "folders": [
            {"name": "F", "color": "red", "entries": [
                {"type": "NOTE", "name": "e", "text": "t", "pinned": true}
            ]}
        ]}"#;
        let vault = from_json(json).unwrap();
        assert_eq!(vault.get_entry("F", "e").unwrap(), &Entry::note("t"));
    }
}
