//! Blob module — the serialized ciphertext package and its persistence.
//!
//! This module provides:
//! - The fixed-offset 152-byte wire layout (`format`)
//! - Byte-sink persistence: the `BlobStore` trait and a file-backed
//!   store with optional base64 armor (`store`)

pub mod format;
pub mod store;

// Re-export the most commonly used items.
pub use format::{SeedBlob, BLOB_LEN, ENTROPY_BOX_LEN, KEY_BOX_LEN, SALT_LEN};
pub use store::{BlobStore, FileStore};
