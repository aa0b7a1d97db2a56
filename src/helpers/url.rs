//! URL helper functions

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use sha2::{Digest, Sha256};

/// Bytes left as-is when encoding a path segment: alphanumerics and `-_.!*()`
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'*')
    .remove(b'(')
    .remove(b')');

/// Default avatar size in pixels
pub const GRAVATAR_SIZE: u32 = 60;

/// Percent-encode a single URL path segment
///
/// # Examples
/// ```ignore
/// encode_path_segment("a&b c") // -> "a%26b%20c"
/// ```
pub fn encode_path_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}

/// Join a base URL and a path without doubling or dropping the slash
///
/// # Examples
/// ```ignore
/// join_url("https://example.com/", "/blog/post/") // -> "https://example.com/blog/post/"
/// ```
pub fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", base)
    } else {
        format!("{}/{}", base, path)
    }
}

/// Gravatar URL for an email address
///
/// The address is trimmed and lowercased before hashing, so the URL does
/// not depend on how the commenter typed it. Unknown addresses get a blank
/// image.
pub fn gravatar(email: &str, size: Option<u32>) -> String {
    let hash = Sha256::digest(email.trim().to_lowercase().as_bytes());
    let size = size.unwrap_or(GRAVATAR_SIZE);
    format!(
        "https://www.gravatar.com/avatar/{}?s={}&d=blank",
        hex::encode(hash),
        size
    )
}
