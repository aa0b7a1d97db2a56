//! URL slug generation

use super::diacritics::strip_diacritics;

/// Default maximum slug length in characters
pub const DEFAULT_SLUG_LENGTH: usize = 50;

/// Characters deleted outright from a slug
const RESERVED_CHARACTERS: &[char] = &[
    '!', '#', '$', '&', '\'', '(', ')', '*', ',', '/', ':', ';', '=', '?', '@', '[', ']', '"',
    '%', '.', '<', '>', '\\', '^', '_', '{', '}', '|', '~', '`', '+',
];

/// Create a URL slug from a title
///
/// The title is lowercased, spaces become hyphens, diacritics are stripped,
/// reserved URL characters are deleted, anything else outside `[a-z0-9-]`
/// is dropped and the result is cut to `max_length` characters. Truncation
/// is a plain prefix and may end on a hyphen.
///
/// An absent title produces an empty slug.
///
/// # Examples
/// ```ignore
/// create_slug("Café au Lait", 50) // -> "cafe-au-lait"
/// create_slug(None, 50)           // -> ""
/// ```
pub fn create_slug<'a>(title: impl Into<Option<&'a str>>, max_length: usize) -> String {
    let title = title.into().unwrap_or_default();

    // Diacritics must go before the reserved/ASCII filters, otherwise the
    // base letter of "é" would be dropped together with its mark.
    let slug = title.to_lowercase().replace(' ', "-");
    let slug = strip_diacritics(&slug);
    let slug = remove_reserved_characters(&slug);
    let slug = retain_slug_characters(&slug);

    let slug: String = slug.chars().take(max_length).collect();
    slug.to_lowercase()
}

/// Create a slug with the default maximum length
pub fn slugify(title: &str) -> String {
    create_slug(title, DEFAULT_SLUG_LENGTH)
}

/// Delete every reserved URL character from `text`
pub fn remove_reserved_characters(text: &str) -> String {
    text.chars()
        .filter(|c| !RESERVED_CHARACTERS.contains(c))
        .collect()
}

/// Keep only lowercase ASCII letters, ASCII digits and hyphens
fn retain_slug_characters(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
        .collect()
}
