//! BIP-39 mnemonic codec.
//!
//! The mnemonic is a display encoding only — the cryptographic path
//! always works on the raw entropy bytes, so a word-list mismatch can
//! never corrupt a blob. The English word list is pinned; 32 bytes of
//! entropy maps to exactly 24 words.

use bip39::{Language, Mnemonic};
use zeroize::Zeroize;

use crate::errors::{Result, SeedLockError};

use super::Entropy;

/// Encode entropy as a 24-word English mnemonic.
pub fn encode(entropy: &Entropy) -> Result<Mnemonic> {
    Mnemonic::from_entropy_in(Language::English, entropy.as_bytes())
        .map_err(|e| SeedLockError::MnemonicError(format!("encoding failed: {e}")))
}

/// Decode a mnemonic phrase back into the raw entropy.
///
/// Whitespace is normalized and the checksum word is verified by the
/// codec; anything that is not a valid 24-word English phrase fails.
pub fn decode(phrase: &str) -> Result<Entropy> {
    let mnemonic = Mnemonic::parse_in(Language::English, phrase)
        .map_err(|e| SeedLockError::MnemonicError(format!("invalid mnemonic: {e}")))?;

    let mut entropy_bytes = mnemonic.to_entropy();
    let entropy = Entropy::from_slice(&entropy_bytes);
    entropy_bytes.zeroize();
    entropy
}
