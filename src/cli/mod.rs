//! CLI module — Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod output;

use std::path::{Path, PathBuf};

use clap::Parser;

use crate::config::Settings;
use crate::errors::{Result, SeedLockError};
use crate::provider::KeyfileProvider;

/// SeedLock CLI: hardware-bound BIP-39 seed vault.
#[derive(Parser)]
#[command(
    name = "seedlock",
    about = "Hardware-bound BIP-39 seed vault",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Blob file to read/write (default: blob.bin, or from .seedlock.toml)
    #[arg(short, long, global = true)]
    pub blob: Option<String>,

    /// Device keyfile used to derive wrapping secrets
    #[arg(long, global = true, env = "SEEDLOCK_KEYFILE")]
    pub keyfile: Option<String>,

    /// Treat the blob file as base64 text instead of raw bytes
    #[arg(long, global = true)]
    pub armor: bool,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Generate a seed and show its mnemonic (nothing is stored)
    Generate {
        /// Print the mnemonic without the reveal prompt
        #[arg(long)]
        show: bool,
    },

    /// Generate a seed, encrypt it, and write the blob
    Seal {
        /// Print the mnemonic without the reveal prompt
        #[arg(long)]
        show: bool,

        /// Overwrite an existing blob file
        #[arg(short, long)]
        force: bool,
    },

    /// Decrypt a blob and recover its mnemonic
    Open {
        /// Print the mnemonic without the reveal prompt
        #[arg(long)]
        show: bool,

        /// Copy the mnemonic to the clipboard instead of printing it
        #[arg(long)]
        copy: bool,
    },

    /// Show the field layout of a blob without decrypting it
    Inspect,

    /// Manage the device keyfile (generate, keyring cache)
    Auth {
        #[command(subcommand)]
        action: AuthAction,
    },

    /// Show version information
    Version,

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell)
        shell: String,
    },
}

/// Auth subcommands for device keyfile management.
#[derive(clap::Subcommand)]
pub enum AuthAction {
    /// Generate a new random device keyfile
    KeyfileGenerate {
        /// Path for the keyfile (default: .seedlock/keyfile)
        path: Option<String>,
    },

    /// Cache the device keyfile in the OS keyring (auto-load)
    Keyring {
        /// Remove the key from the keyring instead of saving
        #[arg(long)]
        delete: bool,
    },
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Resolve the blob file path from CLI arguments and settings.
pub fn blob_path(cli: &Cli, settings: &Settings, project_dir: &Path) -> PathBuf {
    match &cli.blob {
        Some(p) => project_dir.join(p),
        None => settings.blob_path(project_dir),
    }
}

/// Resolve the device keyfile path from CLI arguments and settings.
pub fn keyfile_path(cli: &Cli, settings: &Settings, project_dir: &Path) -> PathBuf {
    match &cli.keyfile {
        Some(p) => project_dir.join(p),
        None => settings.keyfile_path(project_dir),
    }
}

/// Whether blob files should be read/written as base64 text.
pub fn use_armor(cli: &Cli, settings: &Settings) -> bool {
    cli.armor || settings.armor
}

/// Build the secret provider, trying in order:
/// 1. The device keyfile on disk (`--keyfile`, `SEEDLOCK_KEYFILE`, or config)
/// 2. The OS keyring (if compiled with `keyring-store`)
pub fn load_provider(cli: &Cli, settings: &Settings, project_dir: &Path) -> Result<KeyfileProvider> {
    let path = keyfile_path(cli, settings, project_dir);

    if path.exists() {
        return KeyfileProvider::load(&path);
    }

    #[cfg(feature = "keyring-store")]
    {
        match crate::keyring::get_device_key(&path.to_string_lossy()) {
            Ok(Some(key)) => return KeyfileProvider::from_key(key),
            Ok(None) => {}  // No cached key, fall through to the error.
            Err(_) => {}    // Keyring unavailable, fall through to the error.
        }
    }

    Err(SeedLockError::KeyfileError(format!(
        "no device keyfile at {} — run `seedlock auth keyfile-generate` first",
        path.display()
    )))
}
