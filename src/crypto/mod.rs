//! Cryptographic primitives for SeedLock.
//!
//! This module provides:
//! - AES-256-GCM sealed boxes shared by both envelope layers (`encryption`)
//! - Wrap-key derivation and key material types (`keys`)
//! - The injectable randomness capability (`random`)
//! - The two-layer envelope engine (`envelope`)

pub mod encryption;
pub mod envelope;
pub mod keys;
pub mod random;

// Re-export the most commonly used items so callers can write:
//   use crate::crypto::{seal, open, WrappingSecret, OsRandom};
pub use encryption::{decrypt, encrypt};
pub use envelope::{generate_salt, open, seal, SALT_LEN};
pub use keys::{derive_wrap_key, DataKey, WrappingSecret};
pub use random::{OsRandom, RandomSource};
