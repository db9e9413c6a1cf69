//! `seedlock version` — show version information.

use crate::errors::Result;

/// Execute the `version` command.
pub fn execute() -> Result<()> {
    println!("seedlock {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}
