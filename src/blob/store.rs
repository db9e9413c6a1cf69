//! Blob persistence — the `BlobStore` trait and a file-backed store.
//!
//! The engine treats storage as an opaque byte sink/source: an
//! authenticator's large-blob extension, a file, anything that can hold
//! 152 bytes. `FileStore` is the file-download path; armor mode wraps
//! the bytes in base64 so a blob survives copy/paste channels. Length
//! and structure are enforced by the parser, never by the store.

use std::fs;
use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use crate::errors::{Result, SeedLockError};

/// A byte sink/source for sealed blobs.
///
/// Implementations are single-shot per call and must not retry
/// internally — a failed or cancelled write surfaces as an error.
pub trait BlobStore {
    /// Persist the blob bytes, replacing any previous content.
    fn write_bytes(&mut self, data: &[u8]) -> Result<()>;

    /// Retrieve the previously persisted blob bytes.
    fn read_bytes(&mut self) -> Result<Vec<u8>>;
}

/// File-backed blob store.
///
/// Raw mode writes the 152 bytes as-is; armor mode base64-encodes them
/// (one line, trailing newline) for copy/paste transport.
pub struct FileStore {
    path: PathBuf,
    armor: bool,
}

impl FileStore {
    /// Create a store for the given path.
    pub fn new(path: &Path, armor: bool) -> Self {
        Self {
            path: path.to_path_buf(),
            armor,
        }
    }

    /// Returns the path this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BlobStore for FileStore {
    /// Write the blob **atomically**: temp file in the same directory,
    /// then rename, so readers never see a half-written blob.
    fn write_bytes(&mut self, data: &[u8]) -> Result<()> {
        let contents = if self.armor {
            let mut encoded = BASE64.encode(data);
            encoded.push('\n');
            encoded.into_bytes()
        } else {
            data.to_vec()
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let parent = self.path.parent().unwrap_or(Path::new("."));
        let tmp_path = parent.join(format!(
            ".{}.tmp",
            self.path.file_name().unwrap_or_default().to_string_lossy()
        ));

        fs::write(&tmp_path, &contents)?;
        fs::rename(&tmp_path, &self.path)?;

        Ok(())
    }

    fn read_bytes(&mut self) -> Result<Vec<u8>> {
        if !self.path.exists() {
            return Err(SeedLockError::BlobNotFound(self.path.clone()));
        }

        let data = fs::read(&self.path)?;

        if self.armor {
            let text = String::from_utf8(data)
                .map_err(|_| SeedLockError::MalformedBlob("armored blob is not UTF-8".into()))?;
            BASE64
                .decode(text.trim())
                .map_err(|e| SeedLockError::MalformedBlob(format!("invalid base64: {e}")))
        } else {
            Ok(data)
        }
    }
}
