//! Key material types and wrap-key derivation.
//!
//! The wrapping secret returned by an authenticator's hmac-secret
//! extension has an authenticator-determined length. HKDF-SHA256
//! (RFC 5869) normalizes it to the 32-byte AES-256 key that wraps the
//! data key, with a fixed `info` string binding the derivation to this
//! single purpose.

use hkdf::Hkdf;
use sha2::Sha256;
use zeroize::{Zeroize, Zeroizing};

use crate::errors::{Result, SeedLockError};

/// Length of AES-256 keys (256 bits).
pub const KEY_LEN: usize = 32;

/// Derive the 32-byte wrap key from a hardware-derived wrapping secret.
///
/// We skip the `extract` step and use the secret directly as the
/// pseudo-random key (PRK) — hmac-secret output is already an HMAC over
/// high-entropy key material.
pub fn derive_wrap_key(secret: &WrappingSecret) -> Result<[u8; KEY_LEN]> {
    let hk = Hkdf::<Sha256>::new(None, secret.as_bytes());

    let mut okm = [0u8; KEY_LEN];
    hk.expand(b"seedlock-wrap-key", &mut okm)
        .map_err(|e| SeedLockError::CryptoBackendError(format!("HKDF expand failed: {e}")))?;

    Ok(okm)
}

/// The ephemeral per-seal data key.
///
/// Generated fresh for every seal, never persisted except in its
/// wrapped form, and zeroed when dropped.
#[derive(Zeroize)]
#[zeroize(drop)]
pub struct DataKey {
    bytes: [u8; KEY_LEN],
}

impl DataKey {
    /// Create a new `DataKey` from raw bytes.
    pub fn new(bytes: [u8; KEY_LEN]) -> Self {
        Self { bytes }
    }

    /// Access the raw key bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.bytes
    }
}

/// A wrapping secret obtained from a `SecretProvider`.
///
/// Never persisted; the inner buffer is wiped on drop.
pub struct WrappingSecret {
    bytes: Zeroizing<Vec<u8>>,
}

impl WrappingSecret {
    /// Wrap raw secret bytes.
    ///
    /// Rejects an empty secret: an authenticator that does not support
    /// hmac-secret yields no secret at all, and the engine must never
    /// run with a placeholder.
    pub fn new(bytes: Vec<u8>) -> Result<Self> {
        if bytes.is_empty() {
            return Err(SeedLockError::MissingSecret);
        }
        Ok(Self {
            bytes: Zeroizing::new(bytes),
        })
    }

    /// Access the raw secret bytes (e.g. to feed HKDF).
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}
