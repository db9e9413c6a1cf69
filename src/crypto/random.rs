//! Randomness capability used by the envelope engine.
//!
//! Every random value the engine needs (entropy, salts, data keys, both
//! nonces) is drawn through the `RandomSource` trait, so the whole seal
//! operation can run against a deterministic source in tests.
//! Production code uses `OsRandom`, backed by the operating system CSPRNG.

use rand::RngCore;
use rand::TryRngCore;

use crate::errors::Result;

/// A cryptographically secure source of random bytes.
///
/// Implementations must be suitable for key material — the engine uses
/// the output as-is, with no mixing or stretching.
pub trait RandomSource {
    /// Fill `dest` entirely with random bytes.
    fn fill(&mut self, dest: &mut [u8]) -> Result<()>;
}

/// The production source: the operating system CSPRNG.
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn fill(&mut self, dest: &mut [u8]) -> Result<()> {
        rand::rngs::OsRng.unwrap_err().fill_bytes(dest);
        Ok(())
    }
}
