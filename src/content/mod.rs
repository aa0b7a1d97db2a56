//! Content module - posts, comments and the files they are authored in

mod comment;
mod error;
mod frontmatter;
pub mod loader;
mod post;

pub use comment::Comment;
pub use error::ContentError;
pub use frontmatter::FrontMatter;
pub use loader::ContentLoader;
pub use post::{Post, BLOG_PATH};
