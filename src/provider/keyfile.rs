//! Keyfile-backed secret provider.
//!
//! An authenticator's hmac-secret extension computes
//! `HMAC-SHA256(internal key, salt)`. This provider performs the same
//! derivation against a 32-byte keyfile on disk, so the seal/open flow
//! works without a hardware device — the keyfile stands in for the
//! authenticator's internal key and must be guarded accordingly.
//!
//! This is an explicit, user-configured provider, never a silent
//! fallback: with no keyfile set up, sealing and opening simply fail.

use std::fs;
use std::path::Path;

use hmac::{Hmac, Mac};
use rand::RngCore;
use rand::TryRngCore;
use sha2::Sha256;
use zeroize::Zeroizing;

use crate::blob::SALT_LEN;
use crate::crypto::keys::WrappingSecret;
use crate::errors::{Result, SeedLockError};

use super::SecretProvider;

/// Expected length of a device keyfile in bytes (256 bits).
pub const KEYFILE_LEN: usize = 32;

/// A provider that derives wrapping secrets from a local keyfile.
pub struct KeyfileProvider {
    key: Zeroizing<Vec<u8>>,
}

impl KeyfileProvider {
    /// Load the keyfile at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let key = load_keyfile(path)?;
        Ok(Self {
            key: Zeroizing::new(key),
        })
    }

    /// Build a provider from raw key bytes (e.g. keyring-cached keys).
    pub fn from_key(key: Vec<u8>) -> Result<Self> {
        if key.len() != KEYFILE_LEN {
            return Err(SeedLockError::KeyfileError(format!(
                "device key must be exactly {KEYFILE_LEN} bytes, got {}",
                key.len()
            )));
        }
        Ok(Self {
            key: Zeroizing::new(key),
        })
    }

}

impl SecretProvider for KeyfileProvider {
    fn derive_secret(&mut self, salt: &[u8; SALT_LEN]) -> Result<Option<WrappingSecret>> {
        let mut mac = Hmac::<Sha256>::new_from_slice(&self.key)
            .map_err(|e| SeedLockError::KeyfileError(format!("HMAC init failed: {e}")))?;

        mac.update(salt);

        let secret = mac.finalize().into_bytes().to_vec();
        Ok(Some(WrappingSecret::new(secret)?))
    }
}

/// Generate a new random keyfile and write it to `path`.
///
/// The file is written with restrictive permissions (owner-only).
/// Returns the raw keyfile bytes so the caller can use them immediately.
pub fn generate_keyfile(path: &Path) -> Result<Vec<u8>> {
    if path.exists() {
        return Err(SeedLockError::KeyfileError(format!(
            "keyfile already exists at {}",
            path.display()
        )));
    }

    // Generate 32 cryptographically random bytes.
    let mut keyfile = vec![0u8; KEYFILE_LEN];
    rand::rngs::OsRng.unwrap_err().fill_bytes(&mut keyfile);

    // Ensure the parent directory exists.
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| {
                SeedLockError::KeyfileError(format!("cannot create keyfile directory: {e}"))
            })?;
        }
    }

    fs::write(path, &keyfile)
        .map_err(|e| SeedLockError::KeyfileError(format!("failed to write keyfile: {e}")))?;

    // On Unix, restrict permissions to owner-only read/write.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let perms = fs::Permissions::from_mode(0o600);
        fs::set_permissions(path, perms).map_err(|e| {
            SeedLockError::KeyfileError(format!("failed to set keyfile permissions: {e}"))
        })?;
    }

    Ok(keyfile)
}

/// Load a keyfile from disk and validate its length.
pub fn load_keyfile(path: &Path) -> Result<Vec<u8>> {
    if !path.exists() {
        return Err(SeedLockError::KeyfileError(format!(
            "keyfile not found at {} — run `seedlock auth keyfile-generate` first",
            path.display()
        )));
    }

    let data = fs::read(path)
        .map_err(|e| SeedLockError::KeyfileError(format!("failed to read keyfile: {e}")))?;

    if data.len() != KEYFILE_LEN {
        return Err(SeedLockError::KeyfileError(format!(
            "keyfile must be exactly {} bytes, got {}",
            KEYFILE_LEN,
            data.len()
        )));
    }

    Ok(data)
}
