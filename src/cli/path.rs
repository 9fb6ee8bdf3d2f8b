//! Slash-separated target paths.
//!
//! Commands address things with a `vault/folder/entry` path, e.g.
//! `passvault add Personal/Email/gmail -c`.  One segment names a vault,
//! two a folder, three an entry.

use crate::errors::{PassVaultError, Result};

/// A parsed target path: vault, folder, or entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetPath {
    Vault {
        vault: String,
    },
    Folder {
        vault: String,
        folder: String,
    },
    Entry {
        vault: String,
        folder: String,
        entry: String,
    },
}

impl TargetPath {
    /// Parse a `vault[/folder[/entry]]` path.
    ///
    /// Empty segments (leading/trailing slashes, `a//b`) and more than
    /// three segments are rejected.
    pub fn parse(path: &str) -> Result<Self> {
        let segments: Vec<&str> = path.split('/').collect();

        if segments.iter().any(|s| s.is_empty()) {
            return Err(PassVaultError::CommandFailed(format!(
                "invalid path '{path}': empty segment"
            )));
        }

        match segments.as_slice() {
            [vault] => Ok(TargetPath::Vault {
                vault: (*vault).to_string(),
            }),
            [vault, folder] => Ok(TargetPath::Folder {
                vault: (*vault).to_string(),
                folder: (*folder).to_string(),
            }),
            [vault, folder, entry] => Ok(TargetPath::Entry {
                vault: (*vault).to_string(),
                folder: (*folder).to_string(),
                entry: (*entry).to_string(),
            }),
            _ => Err(PassVaultError::CommandFailed(format!(
                "invalid path '{path}': expected vault[/folder[/entry]]"
            ))),
        }
    }

    /// The vault segment, present at every depth.
    pub fn vault(&self) -> &str {
        match self {
            TargetPath::Vault { vault }
            | TargetPath::Folder { vault, .. }
            | TargetPath::Entry { vault, .. } => vault,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_vault_path() {
        assert_eq!(
            TargetPath::parse("Personal").unwrap(),
            TargetPath::Vault {
                vault: "Personal".into()
            }
        );
    }

    #[test]
    fn parses_folder_path() {
        assert_eq!(
            TargetPath::parse("Personal/Email").unwrap(),
            TargetPath::Folder {
                vault: "Personal".into(),
                folder: "Email".into()
            }
        );
    }

    #[test]
    fn parses_entry_path() {
        assert_eq!(
            TargetPath::parse("Personal/Email/gmail").unwrap(),
            TargetPath::Entry {
                vault: "Personal".into(),
                folder: "Email".into(),
                entry: "gmail".into()
            }
        );
    }

    #[test]
    fn rejects_empty_path() {
        assert!(TargetPath::parse("").is_err());
    }

    #[test]
    fn rejects_empty_segments() {
        assert!(TargetPath::parse("/Email").is_err());
        assert!(TargetPath::parse("Personal//gmail").is_err());
        assert!(TargetPath::parse("Personal/Email/").is_err());
    }

    #[test]
    fn rejects_too_many_segments() {
        assert!(TargetPath::parse("a/b/c/d").is_err());
    }

    #[test]
    fn vault_accessor_works_at_every_depth() {
        assert_eq!(TargetPath::parse("v").unwrap().vault(), "v");
        assert_eq!(TargetPath::parse("v/f").unwrap().vault(), "v");
        assert_eq!(TargetPath::parse("v/f/e").unwrap().vault(), "v");
    }

    #[test]
    fn names_may_contain_spaces() {
        assert_eq!(
            TargetPath::parse("My Vault/Bank Accounts").unwrap(),
            TargetPath::Folder {
                vault: "My Vault".into(),
                folder: "Bank Accounts".into()
            }
        );
    }
}
