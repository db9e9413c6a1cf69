//! `seedlock inspect` — show the field layout of a blob.
//!
//! Parses without decrypting: no keyfile needed, no secret touched.
//! Useful for checking that a file really is a well-formed blob before
//! writing it to an authenticator's large-blob store.

use crate::blob::{BlobStore, FileStore, SeedBlob, BLOB_LEN};
use crate::cli::{self, output, Cli};
use crate::config::Settings;
use crate::errors::Result;

/// Execute the `inspect` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let settings = Settings::load(&cwd)?;
    let path = cli::blob_path(cli, &settings, &cwd);

    let mut store = FileStore::new(&path, cli::use_armor(cli, &settings));
    let bytes = store.read_bytes()?;
    let blob = SeedBlob::from_bytes(&bytes)?;

    output::info(&format!(
        "{} — well-formed seed blob ({BLOB_LEN} bytes)",
        path.display()
    ));
    output::print_blob_table(&blob);

    Ok(())
}
