//! Fixed-offset binary layout of a sealed seed blob.
//!
//! A blob is a fixed-width record with no magic, no length prefixes and
//! no metadata — it has to fit a capacity-constrained authenticator
//! large-blob store:
//!
//! ```text
//! offset   0..32    salt (input to the hmac-secret derivation)
//! offset  32..44    IV of the entropy layer
//! offset  44..92    entropy ciphertext + 16-byte tag
//! offset  92..104   IV of the wrap layer
//! offset 104..152   wrapped data key ciphertext + 16-byte tag
//! ```
//!
//! Total: 152 bytes for the fixed 32-byte entropy payload. The payload
//! length is a protocol constant, not on-wire metadata, so any other
//! total length is rejected outright — no tolerant parsing, no field
//! inference from content.
//!
//! Everything in this module is pure slicing and concatenation; no
//! cryptographic operation happens here.

use crate::crypto::encryption::{NONCE_LEN, TAG_LEN};
use crate::crypto::keys::KEY_LEN;
use crate::errors::{Result, SeedLockError};
use crate::seed::ENTROPY_LEN;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Length of the stored salt in bytes (256 bits).
pub const SALT_LEN: usize = 32;

/// Length of the sealed entropy box: nonce + ciphertext + tag.
pub const ENTROPY_BOX_LEN: usize = NONCE_LEN + ENTROPY_LEN + TAG_LEN;

/// Length of the sealed data-key box: nonce + ciphertext + tag.
pub const KEY_BOX_LEN: usize = NONCE_LEN + KEY_LEN + TAG_LEN;

/// Total blob length: 32 + 60 + 60 = 152 bytes.
pub const BLOB_LEN: usize = SALT_LEN + ENTROPY_BOX_LEN + KEY_BOX_LEN;

/// Start of the sealed entropy box.
const ENTROPY_BOX_OFF: usize = SALT_LEN;

/// Start of the sealed data-key box.
const KEY_BOX_OFF: usize = SALT_LEN + ENTROPY_BOX_LEN;

// ---------------------------------------------------------------------------
// SeedBlob
// ---------------------------------------------------------------------------

/// A parsed (or freshly sealed) seed blob.
///
/// Immutable once constructed — the engine writes a blob exactly once
/// and reads it any number of times. All fields are ciphertext or
/// public derivation inputs; nothing in here is secret on its own.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeedBlob {
    salt: [u8; SALT_LEN],
    entropy_box: [u8; ENTROPY_BOX_LEN],
    key_box: [u8; KEY_BOX_LEN],
}

impl SeedBlob {
    /// Assemble a blob from the salt and the two sealed boxes.
    ///
    /// The box lengths are fixed by construction on the encrypt path; a
    /// mismatch here means the cipher produced something impossible.
    pub fn new(salt: [u8; SALT_LEN], entropy_box: &[u8], key_box: &[u8]) -> Result<Self> {
        if entropy_box.len() != ENTROPY_BOX_LEN {
            return Err(SeedLockError::CryptoBackendError(format!(
                "sealed entropy is {} bytes, expected {ENTROPY_BOX_LEN}",
                entropy_box.len()
            )));
        }
        if key_box.len() != KEY_BOX_LEN {
            return Err(SeedLockError::CryptoBackendError(format!(
                "sealed data key is {} bytes, expected {KEY_BOX_LEN}",
                key_box.len()
            )));
        }

        let mut eb = [0u8; ENTROPY_BOX_LEN];
        eb.copy_from_slice(entropy_box);
        let mut kb = [0u8; KEY_BOX_LEN];
        kb.copy_from_slice(key_box);

        Ok(Self {
            salt,
            entropy_box: eb,
            key_box: kb,
        })
    }

    /// Parse a blob from its wire bytes.
    ///
    /// The total length is validated before any offset access; anything
    /// other than exactly 152 bytes is a fatal format error.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        if data.len() != BLOB_LEN {
            return Err(SeedLockError::MalformedBlob(format!(
                "expected {BLOB_LEN} bytes, got {}",
                data.len()
            )));
        }

        let mut salt = [0u8; SALT_LEN];
        salt.copy_from_slice(&data[..ENTROPY_BOX_OFF]);
        let mut entropy_box = [0u8; ENTROPY_BOX_LEN];
        entropy_box.copy_from_slice(&data[ENTROPY_BOX_OFF..KEY_BOX_OFF]);
        let mut key_box = [0u8; KEY_BOX_LEN];
        key_box.copy_from_slice(&data[KEY_BOX_OFF..]);

        Ok(Self {
            salt,
            entropy_box,
            key_box,
        })
    }

    /// Serialize the blob to its wire bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(BLOB_LEN);
        buf.extend_from_slice(&self.salt); // 32 bytes
        buf.extend_from_slice(&self.entropy_box); // 60 bytes
        buf.extend_from_slice(&self.key_box); // 60 bytes
        buf
    }

    /// The salt the wrapping secret must be derived from.
    pub fn salt(&self) -> &[u8; SALT_LEN] {
        &self.salt
    }

    /// The sealed entropy box (nonce || ciphertext || tag).
    pub fn entropy_box(&self) -> &[u8] {
        &self.entropy_box
    }

    /// The sealed data-key box (nonce || ciphertext || tag).
    pub fn key_box(&self) -> &[u8] {
        &self.key_box
    }

    /// The entropy-layer IV (for inspection output only).
    pub fn iv_data(&self) -> &[u8] {
        &self.entropy_box[..NONCE_LEN]
    }

    /// The wrap-layer IV (for inspection output only).
    pub fn iv_wrap(&self) -> &[u8] {
        &self.key_box[..NONCE_LEN]
    }
}
