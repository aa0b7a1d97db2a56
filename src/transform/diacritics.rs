//! Diacritic stripping

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Remove combining marks from a string
///
/// The text is decomposed (NFD) so that accented letters become a base
/// letter followed by combining marks, the marks are dropped, and the rest
/// is recomposed (NFC).
///
/// # Examples
/// ```
/// use miniblog::transform::strip_diacritics;
///
/// assert_eq!(strip_diacritics("café"), "cafe");
/// ```
pub fn strip_diacritics(text: &str) -> String {
    text.nfd().filter(|c| !is_combining_mark(*c)).nfc().collect()
}
