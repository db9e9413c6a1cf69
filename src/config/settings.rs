use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{Result, SeedLockError};

/// Project-level configuration, loaded from `.seedlock.toml`.
///
/// Every field has a sensible default so SeedLock works out-of-the-box
/// without any config file at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Blob file to read and write (relative to the working directory).
    #[serde(default = "default_blob_file")]
    pub blob_file: String,

    /// Path to the device keyfile used to derive wrapping secrets.
    #[serde(default = "default_keyfile")]
    pub keyfile: String,

    /// Store the blob as base64 text instead of raw bytes.
    #[serde(default)]
    pub armor: bool,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_blob_file() -> String {
    "blob.bin".to_string()
}

fn default_keyfile() -> String {
    ".seedlock/keyfile".to_string()
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            blob_file: default_blob_file(),
            keyfile: default_keyfile(),
            armor: false,
        }
    }
}

impl Settings {
    /// Name of the config file we look for in the working directory.
    const FILE_NAME: &'static str = ".seedlock.toml";

    /// Load settings from `<project_dir>/.seedlock.toml`.
    ///
    /// If the file does not exist, sensible defaults are returned.
    /// If the file exists but cannot be parsed, an error is returned.
    pub fn load(project_dir: &Path) -> Result<Self> {
        let config_path = project_dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            SeedLockError::ConfigError(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        Ok(settings)
    }

    /// Build the full path to the blob file.
    pub fn blob_path(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.blob_file)
    }

    /// Build the full path to the device keyfile.
    pub fn keyfile_path(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.keyfile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_when_no_config_file() {
        let dir = TempDir::new().unwrap();
        let settings = Settings::load(dir.path()).unwrap();

        assert_eq!(settings.blob_file, "blob.bin");
        assert_eq!(settings.keyfile, ".seedlock/keyfile");
        assert!(!settings.armor);
    }

    #[test]
    fn partial_config_fills_in_defaults() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(".seedlock.toml"), "armor = true\n").unwrap();

        let settings = Settings::load(dir.path()).unwrap();
        assert!(settings.armor);
        assert_eq!(settings.blob_file, "blob.bin");
    }

    #[test]
    fn full_config_is_honored() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(".seedlock.toml"),
            "blob_file = \"vault/seed.blob\"\nkeyfile = \"keys/device.key\"\narmor = true\n",
        )
        .unwrap();

        let settings = Settings::load(dir.path()).unwrap();
        assert_eq!(
            settings.blob_path(dir.path()),
            dir.path().join("vault/seed.blob")
        );
        assert_eq!(
            settings.keyfile_path(dir.path()),
            dir.path().join("keys/device.key")
        );
        assert!(settings.armor);
    }

    #[test]
    fn malformed_config_is_an_error() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(".seedlock.toml"), "blob_file = [not toml").unwrap();

        assert!(Settings::load(dir.path()).is_err());
    }
}
