//! Hardware secret providers.
//!
//! A `SecretProvider` yields the wrapping secret for a given salt — the
//! output of an authenticator's hmac-secret extension, or something
//! shaped exactly like it. The envelope engine never sees how the
//! secret is produced.
//!
//! Contract for implementations:
//! - Single-shot: one derivation per call, no internal retries.
//! - `Ok(None)` means the capability is absent (the authenticator or
//!   client does not support the extension). The caller maps that to
//!   `MissingSecret` and must never substitute a software default.
//! - User cancellation (dismissing a device prompt) is an error, not
//!   a `None`.

pub mod keyfile;

use crate::blob::SALT_LEN;
use crate::crypto::keys::WrappingSecret;
use crate::errors::Result;

/// Source of hardware-bound wrapping secrets.
pub trait SecretProvider {
    /// Derive the wrapping secret bound to `salt`.
    ///
    /// The same salt always yields the same secret from the same
    /// device, which is what makes a stored blob recoverable.
    fn derive_secret(&mut self, salt: &[u8; SALT_LEN]) -> Result<Option<WrappingSecret>>;
}

pub use keyfile::KeyfileProvider;
