//! Colored terminal output helpers.
//!
//! All user-facing output goes through these functions so we get
//! consistent styling across every command. The mnemonic printer is the
//! only place a recovered phrase ever reaches stdout, and it masks by
//! default.

use comfy_table::{ContentArrangement, Table};
use console::style;
use dialoguer::Confirm;
use zeroize::Zeroizing;

use crate::blob::SeedBlob;
use crate::crypto::encryption::NONCE_LEN;
use crate::errors::{Result, SeedLockError};

/// Print a green success message: "check_mark {msg}"
pub fn success(msg: &str) {
    println!("{} {}", style("\u{2713}").green().bold(), msg);
}

/// Print a red error message: "x_mark {msg}"
pub fn error(msg: &str) {
    eprintln!("{} {}", style("\u{2717}").red().bold(), msg);
}

/// Print a yellow warning: "warning_sign {msg}"
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("\u{26a0}").yellow().bold(), msg);
}

/// Print a blue info message: "info_sign {msg}"
pub fn info(msg: &str) {
    println!("{} {}", style("\u{2139}").blue().bold(), msg);
}

/// Print a dim tip/hint: "arrow {msg}"
pub fn tip(msg: &str) {
    println!("{} {}", style("\u{2192}").dim(), style(msg).dim());
}

/// Print a mnemonic, masked by default.
///
/// - `show` skips the mask and the reveal prompt (scripted use).
/// - `copy` sends the phrase to the clipboard instead of the terminal.
///
/// The phrase buffer is wiped when this function returns.
pub fn print_mnemonic(mnemonic: &bip39::Mnemonic, show: bool, copy: bool) -> Result<()> {
    let phrase = Zeroizing::new(mnemonic.to_string());

    if copy {
        let mut clipboard = arboard::Clipboard::new()
            .map_err(|e| SeedLockError::CommandFailed(format!("clipboard unavailable: {e}")))?;
        clipboard
            .set_text(phrase.to_string())
            .map_err(|e| SeedLockError::CommandFailed(format!("clipboard write failed: {e}")))?;
        success("Mnemonic copied to clipboard — paste it into your backup now.");
        return Ok(());
    }

    if !show {
        // Mask first; the phrase only prints after an explicit opt-in.
        println!("{}", style("\u{2022}".repeat(64)).dim());

        let reveal = Confirm::new()
            .with_prompt("Reveal the mnemonic now?")
            .default(false)
            .interact()
            .map_err(|e| {
                SeedLockError::CommandFailed(format!("failed to read confirmation: {e}"))
            })?;

        if !reveal {
            tip("Run again with --show to print the mnemonic directly.");
            return Ok(());
        }
    }

    println!("{}", style(phrase.as_str()).bold());
    Ok(())
}

/// Print the field layout of a parsed blob (Field, Offset, Length, Value).
///
/// Only public fields (salt, IVs) are shown as hex; ciphertext regions
/// are elided.
pub fn print_blob_table(blob: &SeedBlob) {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Field", "Offset", "Length", "Value"]);

    let salt_len = blob.salt().len();
    let entropy_ct_len = blob.entropy_box().len() - NONCE_LEN;
    let key_ct_len = blob.key_box().len() - NONCE_LEN;

    let entropy_iv_off = salt_len;
    let entropy_ct_off = entropy_iv_off + NONCE_LEN;
    let wrap_iv_off = entropy_ct_off + entropy_ct_len;
    let wrap_ct_off = wrap_iv_off + NONCE_LEN;

    table.add_row(vec![
        "Salt".to_string(),
        format!("{}..{}", 0, salt_len),
        salt_len.to_string(),
        hex(blob.salt()),
    ]);
    table.add_row(vec![
        "Entropy IV".to_string(),
        format!("{entropy_iv_off}..{entropy_ct_off}"),
        NONCE_LEN.to_string(),
        hex(blob.iv_data()),
    ]);
    table.add_row(vec![
        "Entropy ciphertext + tag".to_string(),
        format!("{entropy_ct_off}..{wrap_iv_off}"),
        entropy_ct_len.to_string(),
        "(ciphertext)".to_string(),
    ]);
    table.add_row(vec![
        "Wrap IV".to_string(),
        format!("{wrap_iv_off}..{wrap_ct_off}"),
        NONCE_LEN.to_string(),
        hex(blob.iv_wrap()),
    ]);
    table.add_row(vec![
        "Wrapped key ciphertext + tag".to_string(),
        format!("{}..{}", wrap_ct_off, wrap_ct_off + key_ct_len),
        key_ct_len.to_string(),
        "(ciphertext)".to_string(),
    ]);

    println!("{table}");
}

/// Lowercase hex rendering of a byte slice.
fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}
