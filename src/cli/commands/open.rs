//! `seedlock open` — decrypt a blob and recover its mnemonic.
//!
//! The salt comes out of the blob itself; the wrapping secret is
//! re-derived from that exact salt before decryption, which is what
//! binds the blob to the device key.

use crate::blob::{BlobStore, FileStore, SeedBlob};
use crate::cli::{self, output, Cli};
use crate::config::Settings;
use crate::crypto::envelope;
use crate::errors::{Result, SeedLockError};
use crate::provider::SecretProvider;
use crate::seed::mnemonic;

/// Execute the `open` command.
pub fn execute(cli: &Cli, show: bool, copy: bool) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let settings = Settings::load(&cwd)?;
    let path = cli::blob_path(cli, &settings, &cwd);

    // 1. Read and parse the blob. Length is validated before any
    //    cryptographic work happens.
    let mut store = FileStore::new(&path, cli::use_armor(cli, &settings));
    let bytes = store.read_bytes()?;
    let blob = SeedBlob::from_bytes(&bytes)?;

    // 2. Re-derive the wrapping secret from the stored salt.
    let mut provider = cli::load_provider(cli, &settings, &cwd)?;
    let secret = provider
        .derive_secret(blob.salt())?
        .ok_or(SeedLockError::MissingSecret)?;

    // 3. Unwrap and decrypt.
    let entropy = envelope::open(&blob, &secret)?;

    // 4. Display.
    let phrase = mnemonic::encode(&entropy)?;
    output::success("Seed recovered from blob.");
    output::print_mnemonic(&phrase, show, copy)?;

    Ok(())
}
