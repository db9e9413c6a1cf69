//! OS keyring integration for the device keyfile.
//!
//! Caches the 32-byte device key in the operating system's secure
//! credential store so day-to-day use needs no keyfile on disk:
//! - macOS: Keychain
//! - Windows: Credential Manager
//! - Linux: Secret Service (GNOME Keyring / KDE Wallet)
//!
//! Keyring entries are strings, so the key bytes travel base64-encoded.
//! All operations fail gracefully — if the keyring is unavailable, the
//! error is returned and the caller falls back to the keyfile path.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use crate::errors::{Result, SeedLockError};

/// Service name used in the OS keyring.
const SERVICE_NAME: &str = "seedlock";

/// Build a keyring entry key from a keyfile path.
///
/// Uses the path so that different keyfiles resolve to different
/// keyring entries.
fn entry_key(keyfile_path: &str) -> String {
    format!("device-key:{keyfile_path}")
}

/// Store a device key in the OS keyring.
pub fn store_device_key(keyfile_path: &str, key: &[u8]) -> Result<()> {
    let entry = keyring::Entry::new(SERVICE_NAME, &entry_key(keyfile_path))
        .map_err(|e| SeedLockError::KeyringError(format!("failed to create keyring entry: {e}")))?;

    entry.set_password(&BASE64.encode(key)).map_err(|e| {
        SeedLockError::KeyringError(format!("failed to store device key in keyring: {e}"))
    })?;

    Ok(())
}

/// Retrieve a device key from the OS keyring.
///
/// Returns `None` if no key is stored (rather than an error).
pub fn get_device_key(keyfile_path: &str) -> Result<Option<Vec<u8>>> {
    let entry = keyring::Entry::new(SERVICE_NAME, &entry_key(keyfile_path))
        .map_err(|e| SeedLockError::KeyringError(format!("failed to create keyring entry: {e}")))?;

    match entry.get_password() {
        Ok(encoded) => {
            let key = BASE64.decode(encoded.trim()).map_err(|e| {
                SeedLockError::KeyringError(format!("stored device key is not valid base64: {e}"))
            })?;
            Ok(Some(key))
        }
        Err(keyring::Error::NoEntry) => Ok(None),
        Err(e) => Err(SeedLockError::KeyringError(format!(
            "failed to read from keyring: {e}"
        ))),
    }
}

/// Delete a stored device key from the OS keyring.
pub fn delete_device_key(keyfile_path: &str) -> Result<()> {
    let entry = keyring::Entry::new(SERVICE_NAME, &entry_key(keyfile_path))
        .map_err(|e| SeedLockError::KeyringError(format!("failed to create keyring entry: {e}")))?;

    match entry.delete_credential() {
        Ok(()) => Ok(()),
        Err(keyring::Error::NoEntry) => Ok(()), // Already gone, that's fine.
        Err(e) => Err(SeedLockError::KeyringError(format!(
            "failed to delete from keyring: {e}"
        ))),
    }
}
