use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur in SeedLock.
#[derive(Debug, Error)]
pub enum SeedLockError {
    // --- Crypto errors ---
    #[error("Invalid entropy length — expected {expected} bytes, got {got}")]
    InvalidEntropyLength { expected: usize, got: usize },

    #[error("Hardware secret unavailable — the authenticator does not support hmac-secret or the derivation was refused")]
    MissingSecret,

    #[error("Decryption failed — wrong wrapping secret or corrupted blob")]
    AuthenticationFailed,

    #[error("Crypto backend error: {0}")]
    CryptoBackendError(String),

    // --- Blob errors ---
    #[error("Malformed blob: {0}")]
    MalformedBlob(String),

    #[error("Blob not found at {0}")]
    BlobNotFound(PathBuf),

    #[error("Blob already exists at {0} (use --force to overwrite)")]
    BlobAlreadyExists(PathBuf),

    // --- Mnemonic errors ---
    #[error("Mnemonic error: {0}")]
    MnemonicError(String),

    // --- Keyfile errors ---
    #[error("Keyfile error: {0}")]
    KeyfileError(String),

    // --- Keyring errors ---
    #[error("Keyring error: {0}")]
    KeyringError(String),

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),

    #[error("User cancelled operation")]
    UserCancelled,
}

/// Convenience type alias for SeedLock results.
pub type Result<T> = std::result::Result<T, SeedLockError>;
