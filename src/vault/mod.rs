//! Vault module: the in-memory data model and its JSON document.
//!
//! This module provides:
//! - `Entry` and `EntryKind` types (`entry`)
//! - `Folder`, a uniquely-keyed entry collection (`folder`)
//! - `Vault` and its per-vault `CryptoParams` (`model`)
//! - The canonical JSON serialization contract (`document`)

pub mod document;
pub mod entry;
pub mod folder;
pub mod model;

// Re-export the most commonly used items.
pub use entry::{Entry, EntryKind};
pub use folder::Folder;
pub use model::{CryptoParams, Vault};
