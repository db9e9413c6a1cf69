//! Seed entropy — generation and the BIP-39 display codec.
//!
//! This module provides:
//! - The `Entropy` type: 32 bytes of raw seed material (`mod.rs`)
//! - BIP-39 mnemonic encoding/decoding for display (`mnemonic`)

pub mod mnemonic;

use zeroize::Zeroize;

use crate::crypto::random::RandomSource;
use crate::errors::{Result, SeedLockError};

/// Length of seed entropy in bytes (256 bits — 24 mnemonic words).
///
/// This is a protocol constant: the blob layout bakes it into fixed
/// offsets, so it cannot change without a new format.
pub const ENTROPY_LEN: usize = 32;

/// Raw seed material.
///
/// Exists only transiently: generated (or decoded from a mnemonic),
/// sealed into a blob, then dropped. The buffer is wiped on drop and
/// must never be logged or persisted outside a sealed blob.
#[derive(Zeroize)]
#[zeroize(drop)]
pub struct Entropy {
    bytes: [u8; ENTROPY_LEN],
}

impl Entropy {
    /// Generate fresh entropy from the given randomness source.
    pub fn generate(rng: &mut dyn RandomSource) -> Result<Self> {
        let mut bytes = [0u8; ENTROPY_LEN];
        rng.fill(&mut bytes)?;
        Ok(Self { bytes })
    }

    /// Build entropy from raw bytes, validating the fixed length.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != ENTROPY_LEN {
            return Err(SeedLockError::InvalidEntropyLength {
                expected: ENTROPY_LEN,
                got: bytes.len(),
            });
        }
        let mut arr = [0u8; ENTROPY_LEN];
        arr.copy_from_slice(bytes);
        Ok(Self { bytes: arr })
    }

    /// Access the raw entropy bytes (e.g. to seal them).
    pub fn as_bytes(&self) -> &[u8; ENTROPY_LEN] {
        &self.bytes
    }
}

impl std::fmt::Debug for Entropy {
    /// Redacted: the raw seed material must never be logged.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Entropy").finish_non_exhaustive()
    }
}
