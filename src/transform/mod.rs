//! Text transforms applied to post titles and post content
//!
//! Everything in here is a pure function over `&str`: no I/O, no shared
//! mutable state. The compiled regexes are immutable statics, so the
//! functions can be called from any thread.

mod diacritics;
mod render;
mod slug;

pub use diacritics::strip_diacritics;
pub use render::{expand_shortcodes, lazy_load_media, render_content, LAZY_PLACEHOLDER_SRC};
pub use slug::{create_slug, remove_reserved_characters, slugify, DEFAULT_SLUG_LENGTH};
