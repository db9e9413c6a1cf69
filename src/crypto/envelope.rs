//! Two-layer envelope encryption for seed entropy.
//!
//! Sealing:
//! 1. Generate a fresh 32-byte data key.
//! 2. Seal the entropy under the data key (AES-256-GCM, fresh nonce).
//! 3. Seal the data key under the wrap key derived from the
//!    hardware-provided wrapping secret (independent fresh nonce).
//! 4. Assemble salt || sealed entropy || sealed data key into a blob.
//!
//! Opening reverses the order: the data key is unwrapped first, so a
//! wrong secret fails before the entropy ciphertext is ever touched.
//!
//! The salt is an input, not generated here — the caller must already
//! have used the very same salt to derive the wrapping secret, which is
//! what binds the secret to this specific blob. `generate_salt` exists
//! so callers draw it from the same randomness capability.

use zeroize::Zeroize;

use crate::blob::SeedBlob;
use crate::errors::{Result, SeedLockError};
use crate::seed::Entropy;

use super::encryption::{self, NONCE_LEN};
use super::keys::{derive_wrap_key, DataKey, WrappingSecret, KEY_LEN};
use super::random::RandomSource;

pub use crate::blob::SALT_LEN;

/// Generate a fresh random salt for one seal operation.
///
/// The same value must be fed to the secret provider *and* to `seal`.
/// It is stored in the blob so that `open` callers can re-derive the
/// secret, and must never be reused for a different seal.
pub fn generate_salt(rng: &mut dyn RandomSource) -> Result<[u8; SALT_LEN]> {
    let mut salt = [0u8; SALT_LEN];
    rng.fill(&mut salt)?;
    Ok(salt)
}

/// Seal `entropy` into a blob under the given wrapping secret.
///
/// `salt` must be the exact value the wrapping secret was derived from.
/// All randomness (data key, both nonces) is drawn from `rng`; the two
/// layers never share a nonce.
pub fn seal(
    entropy: &Entropy,
    salt: &[u8; SALT_LEN],
    secret: &WrappingSecret,
    rng: &mut dyn RandomSource,
) -> Result<SeedBlob> {
    // Fresh data key, used for this seal only.
    let mut key_bytes = [0u8; KEY_LEN];
    rng.fill(&mut key_bytes)?;
    let data_key = DataKey::new(key_bytes);
    key_bytes.zeroize();

    // Layer 1: entropy under the data key.
    let mut nonce_data = [0u8; NONCE_LEN];
    rng.fill(&mut nonce_data)?;
    let entropy_box = encryption::encrypt(data_key.as_bytes(), &nonce_data, entropy.as_bytes())?;

    // Layer 2: data key under the wrap key, with its own nonce.
    let mut wrap_key = derive_wrap_key(secret)?;
    let mut nonce_wrap = [0u8; NONCE_LEN];
    rng.fill(&mut nonce_wrap)?;
    let key_box = encryption::encrypt(&wrap_key, &nonce_wrap, data_key.as_bytes())?;
    wrap_key.zeroize();

    SeedBlob::new(*salt, &entropy_box, &key_box)
}

/// Open a blob and recover the entropy.
///
/// `secret` must have been re-derived from the salt stored in the blob
/// (`blob.salt()`). The data key recovered mid-operation is wiped before
/// this function returns; only the entropy reaches the caller.
pub fn open(blob: &SeedBlob, secret: &WrappingSecret) -> Result<Entropy> {
    // Unwrap the data key first — a wrong secret fails here, without
    // touching the entropy layer.
    let mut wrap_key = derive_wrap_key(secret)?;
    let unwrap_result = encryption::decrypt(&wrap_key, blob.key_box());
    wrap_key.zeroize();
    let mut key_bytes = unwrap_result?;

    if key_bytes.len() != KEY_LEN {
        // Unreachable with the fixed blob layout; kept as a hard stop.
        key_bytes.zeroize();
        return Err(SeedLockError::CryptoBackendError(
            "unwrapped key has unexpected length".into(),
        ));
    }
    let mut key_arr = [0u8; KEY_LEN];
    key_arr.copy_from_slice(&key_bytes);
    key_bytes.zeroize();
    let data_key = DataKey::new(key_arr);
    key_arr.zeroize();

    // Decrypt the entropy under the recovered data key.
    let mut plaintext = encryption::decrypt(data_key.as_bytes(), blob.entropy_box())?;
    let entropy = Entropy::from_slice(&plaintext);
    plaintext.zeroize();
    entropy
}
