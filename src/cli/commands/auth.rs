//! `seedlock auth` — manage the device keyfile.
//!
//! Subcommands:
//! - `seedlock auth keyfile-generate`  — generate a new random keyfile
//! - `seedlock auth keyring`           — cache the keyfile in the OS keyring
//! - `seedlock auth keyring --delete`  — remove it from the keyring
//!
//! When the keyring feature is not compiled in, keyring commands return
//! a helpful error message.

use crate::cli::{output, Cli};
use crate::config::Settings;
use crate::errors::{Result, SeedLockError};
use crate::provider::keyfile;

/// Execute `seedlock auth keyfile-generate` — create a new device keyfile.
pub fn execute_keyfile_generate(cli: &Cli, keyfile_path: Option<&str>) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let settings = Settings::load(&cwd)?;

    let path = match keyfile_path {
        Some(p) => std::path::PathBuf::from(p),
        None => crate::cli::keyfile_path(cli, &settings, &cwd),
    };

    keyfile::generate_keyfile(&path)?;

    let path_display = path.display();
    output::success(&format!("Device keyfile generated at {path_display}"));
    output::warning("Keep this file secret! Anyone holding it can decrypt your sealed seeds.");
    output::tip("Back the keyfile up separately from the blob — losing it means losing the seed.");

    Ok(())
}

/// Execute `seedlock auth keyring` — cache or remove the device key in
/// the OS keyring.
pub fn execute_keyring(cli: &Cli, delete: bool) -> Result<()> {
    #[cfg(feature = "keyring-store")]
    {
        let cwd = std::env::current_dir()?;
        let settings = Settings::load(&cwd)?;
        let path = crate::cli::keyfile_path(cli, &settings, &cwd);
        let key_id = path.to_string_lossy().to_string();

        if delete {
            crate::keyring::delete_device_key(&key_id)?;
            output::success("Device key removed from OS keyring.");
        } else {
            // The keyfile must exist and be valid before we cache it.
            let key = keyfile::load_keyfile(&path)?;
            crate::keyring::store_device_key(&key_id, &key)?;
            output::success("Device key saved to OS keyring.");
            output::tip("The keyfile can now be moved to offline backup — the keyring copy will be used.");
        }

        Ok(())
    }

    #[cfg(not(feature = "keyring-store"))]
    {
        let _ = (cli, delete);
        Err(SeedLockError::KeyringError(
            "keyring support not compiled — rebuild with `cargo build --features keyring-store`"
                .into(),
        ))
    }
}
