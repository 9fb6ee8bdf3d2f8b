//! Entry types stored inside a folder.
//!
//! An entry is either a credential (username + password) or a free-text
//! note.  Entries carry no name of their own: the owning folder's map key
//! is the name, assigned at insertion time.

/// A single secret stored in a folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// A username/password pair.  Both strings are opaque; empty is valid.
    Credential { username: String, password: String },

    /// Arbitrary text, including newlines and control characters.
    Note { text: String },
}

/// Discriminator for the two entry variants, used at display sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Credential,
    Note,
}

impl Entry {
    /// Build a credential entry.
    pub fn credential(username: impl Into<String>, password: impl Into<String>) -> Self {
        Entry::Credential {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Build a note entry.
    pub fn note(text: impl Into<String>) -> Self {
        Entry::Note { text: text.into() }
    }

    /// Which variant this entry is.
    pub fn kind(&self) -> EntryKind {
        match self {
            Entry::Credential { .. } => EntryKind::Credential,
            Entry::Note { .. } => EntryKind::Note,
        }
    }
}

impl EntryKind {
    /// Lowercase label used in listings (e.g. "credential", "note").
    pub fn label(self) -> &'static str {
        match self {
            EntryKind::Credential => "credential",
            EntryKind::Note => "note",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_matches_variant() {
        let cred = Entry::credential("user", "pass");
        assert_eq!(cred.kind(), EntryKind::Credential);

        let note = Entry::note("remember the milk");
        assert_eq!(note.kind(), EntryKind::Note);
    }

    #[test]
    fn empty_strings_are_valid() {
        let cred = Entry::credential("", "");
        assert_eq!(
            cred,
            Entry::Credential {
                username: String::new(),
                password: String::new()
            }
        );
    }

    #[test]
    fn kind_labels() {
        assert_eq!(EntryKind::Credential.label(), "credential");
        assert_eq!(EntryKind::Note.label(), "note");
    }
}
