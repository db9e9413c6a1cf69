//! `seedlock generate` — generate a seed and show its mnemonic.
//!
//! Nothing is stored: the entropy lives only for the duration of this
//! command. Use `seedlock seal` to generate *and* persist a seed.

use crate::cli::output;
use crate::crypto::OsRandom;
use crate::errors::Result;
use crate::seed::{mnemonic, Entropy};

/// Execute the `generate` command.
pub fn execute(show: bool) -> Result<()> {
    let entropy = Entropy::generate(&mut OsRandom)?;
    let phrase = mnemonic::encode(&entropy)?;

    output::warning("This seed is NOT stored anywhere. Write it down, or run `seedlock seal`.");
    output::print_mnemonic(&phrase, show, false)?;

    Ok(())
}
