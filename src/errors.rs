use thiserror::Error;

/// All errors that can occur in PassVault.
#[derive(Debug, Error)]
pub enum PassVaultError {
    // --- Model / serialization errors ---
    #[error("Invalid vault data: {0}")]
    Validation(String),

    #[error("{0} already exists")]
    DuplicateName(String),

    #[error("{0} not found")]
    NotFound(String),

    // --- Crypto errors ---
    #[error("Unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    #[error("Encryption failed: {0}")]
    Encryption(String),

    #[error("Decryption failed: wrong password or corrupted data")]
    Authentication,

    // --- Envelope file errors ---
    #[error("Invalid vault file: {0}")]
    Parse(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),

    #[error("User cancelled operation")]
    UserCancelled,
}

/// Convenience type alias for PassVault results.
pub type Result<T> = std::result::Result<T, PassVaultError>;
