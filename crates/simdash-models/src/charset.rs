//! ASCII detection and folding for the modem's GSM text mode.
//!
//! The modem is driven in plain-ASCII text mode, so anything outside
//! U+0000–U+007F is folded before transmission:
//!
//! 1. canonical decomposition (NFD),
//! 2. combining diacritical marks U+0300–U+036F are dropped,
//! 3. every remaining non-ASCII character becomes `?`.
//!
//! The same folding drives the compose-box warning and the preview the
//! service reports back after a send.

use unicode_normalization::UnicodeNormalization;

/// Replacement for characters with no ASCII base letter.
pub const REPLACEMENT: char = '?';

/// Whether `c` is in the combining diacritical marks block.
fn is_combining_mark(c: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&c)
}

/// Whether `text` would be transmitted unchanged.
pub fn is_ascii_only(text: &str) -> bool {
    text.is_ascii()
}

/// Fold `text` to the ASCII form the modem will actually transmit.
///
/// # Examples
///
/// ```
/// use simdash_models::ascii_fold;
///
/// assert_eq!(ascii_fold("café ☎ 123"), "cafe ? 123");
/// assert_eq!(ascii_fold("plain"), "plain");
/// ```
pub fn ascii_fold(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(|c| if c.is_ascii() { c } else { REPLACEMENT })
        .collect()
}

/// The folded preview, or `None` if `text` is already pure ASCII.
pub fn transliteration_preview(text: &str) -> Option<String> {
    if is_ascii_only(text) {
        None
    } else {
        Some(ascii_fold(text))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
