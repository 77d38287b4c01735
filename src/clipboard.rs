//! Copying committed values to the system clipboard.

use crate::engine::format_raw;
use arboard::Clipboard;

/// Copy a committed value to the clipboard as raw digits (no separators).
///
/// Returns the copied text, or an error message when the clipboard is
/// unavailable (no display server, headless session).
pub fn copy_value(value: f64) -> Result<String, String> {
    let text = format_raw(value);
    let mut clipboard =
        Clipboard::new().map_err(|e| format!("clipboard unavailable: {e}"))?;
    clipboard
        .set_text(text.clone())
        .map_err(|e| format!("could not copy {text}: {e}"))?;
    Ok(text)
}
