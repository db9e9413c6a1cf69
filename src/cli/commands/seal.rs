//! `seedlock seal` — generate a seed, encrypt it, and write the blob.
//!
//! Flow: fresh entropy + fresh salt → wrapping secret bound to that
//! salt → two-layer envelope → verify the blob opens → write it out →
//! show the mnemonic once for backup.

use subtle::ConstantTimeEq;

use crate::blob::{BlobStore, FileStore};
use crate::cli::{self, output, Cli};
use crate::config::Settings;
use crate::crypto::{envelope, OsRandom};
use crate::errors::{Result, SeedLockError};
use crate::provider::SecretProvider;
use crate::seed::{mnemonic, Entropy};

/// Execute the `seal` command.
pub fn execute(cli: &Cli, show: bool, force: bool) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let settings = Settings::load(&cwd)?;
    let path = cli::blob_path(cli, &settings, &cwd);

    if path.exists() && !force {
        return Err(SeedLockError::BlobAlreadyExists(path));
    }

    let mut provider = cli::load_provider(cli, &settings, &cwd)?;
    let mut rng = OsRandom;

    // 1. Fresh entropy and a fresh salt for this seal only.
    let entropy = Entropy::generate(&mut rng)?;
    let salt = envelope::generate_salt(&mut rng)?;

    // 2. Wrapping secret bound to the salt. Absence of the capability
    //    is an error — never a software fallback.
    let secret = provider
        .derive_secret(&salt)?
        .ok_or(SeedLockError::MissingSecret)?;

    // 3. Envelope-encrypt.
    let blob = envelope::seal(&entropy, &salt, &secret, &mut rng)?;

    // 4. Prove the blob opens before anything touches disk.
    let recovered = envelope::open(&blob, &secret)?;
    let verified: bool = recovered
        .as_bytes()
        .as_slice()
        .ct_eq(entropy.as_bytes().as_slice())
        .into();
    if !verified {
        return Err(SeedLockError::CryptoBackendError(
            "post-seal verification mismatch".into(),
        ));
    }

    // 5. Persist.
    let armor = cli::use_armor(cli, &settings);
    let mut store = FileStore::new(&path, armor);
    store.write_bytes(&blob.to_bytes())?;
    output::success(&format!("Sealed blob written to {}", path.display()));
    if armor {
        output::info("Blob is base64-armored — safe for copy/paste transport.");
    }

    // 6. Show the mnemonic exactly once.
    let phrase = mnemonic::encode(&entropy)?;
    output::warning("Back up this mnemonic now — it will not be shown again.");
    output::print_mnemonic(&phrase, show, false)?;
    output::tip("Run `seedlock open` to recover the seed from the blob later.");

    Ok(())
}
