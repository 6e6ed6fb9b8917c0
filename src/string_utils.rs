//! UTF-8 Safe String Utilities
//!
//! Titles and sidebar labels are cut to a fixed number of characters. Rust
//! strings are UTF-8 encoded, so a cut must land on a character boundary or
//! slicing panics. Everything here counts characters, never bytes.
//!
//! # Example
//! ```ignore
//! use crate::string_utils::truncate_with_ellipsis;
//!
//! let label = truncate_with_ellipsis("Hvordan lærer jeg Rust raskt?", 12);
//! assert_eq!(label, "Hvordan lære...");
//! ```

/// Characters that are not allowed in exported file names.
const FORBIDDEN_FILENAME_CHARS: [char; 7] = ['?', '<', '>', ':', '*', '|', '"'];

/// Maximum length of an exported file name stem, in characters.
pub const MAX_FILENAME_CHARS: usize = 200;

// ─────────────────────────────────────────────────────────────────────────────
// Character Index Functions
// ─────────────────────────────────────────────────────────────────────────────

/// Convert a character index to a byte index.
///
/// Returns the string length if `char_index` is beyond the string.
pub fn char_index_to_byte_index(s: &str, char_index: usize) -> usize {
    s.char_indices()
        .nth(char_index)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

/// The first `max_chars` characters of `s`.
pub fn safe_prefix(s: &str, max_chars: usize) -> &str {
    &s[..char_index_to_byte_index(s, max_chars)]
}

// ─────────────────────────────────────────────────────────────────────────────
// Titles and File Names
// ─────────────────────────────────────────────────────────────────────────────

/// Shorten `text` to at most `max_chars` characters plus `...`.
///
/// Text that already fits is returned unchanged. Otherwise the prefix is
/// trimmed of surrounding whitespace before the ellipsis is appended.
pub fn truncate_with_ellipsis(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    format!("{}...", safe_prefix(text, max_chars).trim())
}

/// Make a title usable as a file name stem.
///
/// Removes `? < > : * | "` and keeps at most 200 characters.
pub fn sanitize_filename(title: &str) -> String {
    let cleaned: String = title
        .chars()
        .filter(|c| !FORBIDDEN_FILENAME_CHARS.contains(c))
        .collect();
    safe_prefix(&cleaned, MAX_FILENAME_CHARS).to_string()
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
