//! AES-256-GCM authenticated encryption.
//!
//! Both envelope layers use the same sealed-box convention: the 12-byte
//! nonce is prepended to the ciphertext, so each box is self-contained.
//!
//! Layout of a sealed box:
//!   [ 12-byte nonce | ciphertext + 16-byte auth tag ]

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce};

use crate::errors::{Result, SeedLockError};

/// Size of the AES-256-GCM nonce in bytes.
pub const NONCE_LEN: usize = 12;

/// Size of the GCM authentication tag in bytes.
pub const TAG_LEN: usize = 16;

/// Encrypt `plaintext` with a 32-byte `key` and a caller-supplied nonce.
///
/// The nonce comes from the engine's `RandomSource`, never from ambient
/// state, and must be fresh for every call.
///
/// Returns the nonce prepended to the ciphertext (nonce || ciphertext).
pub fn encrypt(key: &[u8], nonce_bytes: &[u8; NONCE_LEN], plaintext: &[u8]) -> Result<Vec<u8>> {
    // Build the cipher from the raw key bytes.
    let cipher = Aes256Gcm::new_from_slice(key)
        .map_err(|e| SeedLockError::CryptoBackendError(format!("invalid key length: {e}")))?;

    let nonce = Nonce::from_slice(nonce_bytes);

    // Encrypt and authenticate the plaintext.
    let ciphertext = cipher
        .encrypt(nonce, plaintext)
        .map_err(|e| SeedLockError::CryptoBackendError(format!("encryption error: {e}")))?;

    // Prepend the nonce so each layer travels as one self-contained box.
    let mut output = Vec::with_capacity(NONCE_LEN + ciphertext.len());
    output.extend_from_slice(nonce_bytes);
    output.extend_from_slice(&ciphertext);
    Ok(output)
}

/// Decrypt a sealed box produced by `encrypt`.
///
/// Expects the first 12 bytes to be the nonce, followed by the
/// ciphertext. Every failure surfaces as the single
/// `AuthenticationFailed` variant — callers never learn whether the key
/// was wrong or the ciphertext corrupted, or which layer it came from.
pub fn decrypt(key: &[u8], sealed: &[u8]) -> Result<Vec<u8>> {
    // Make sure we have at least a nonce and a tag worth of bytes.
    if sealed.len() < NONCE_LEN + TAG_LEN {
        return Err(SeedLockError::AuthenticationFailed);
    }

    // Split nonce from ciphertext.
    let (nonce_bytes, ciphertext) = sealed.split_at(NONCE_LEN);
    let nonce = Nonce::from_slice(nonce_bytes);

    // Build the cipher from the raw key bytes.
    let cipher = Aes256Gcm::new_from_slice(key).map_err(|_| SeedLockError::AuthenticationFailed)?;

    // Decrypt and verify the auth tag.
    let plaintext = cipher
        .decrypt(nonce, ciphertext)
        .map_err(|_| SeedLockError::AuthenticationFailed)?;

    Ok(plaintext)
}
