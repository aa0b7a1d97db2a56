//! Post model

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::{Comment, ContentError, FrontMatter};
use crate::helpers::encode_path_segment;
use crate::transform::{create_slug, render_content, DEFAULT_SLUG_LENGTH};

/// Path prefix of every post permalink
pub const BLOG_PATH: &str = "/blog";

/// A blog post
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// Post identifier
    pub id: String,

    /// Post title
    pub title: String,

    /// URL slug, generated from the title when the post is created or
    /// retitled, otherwise whatever was last set
    pub slug: String,

    /// Raw content, may contain `[youtube:<id>]` shortcodes
    pub content: String,

    /// Short summary
    pub excerpt: String,

    /// Publication date
    pub pub_date: DateTime<Utc>,

    /// Last modification date
    pub last_modified: DateTime<Utc>,

    /// Whether the post is published
    pub is_published: bool,

    /// Post categories, in authored order
    pub categories: Vec<String>,

    /// Post tags, in authored order
    pub tags: Vec<String>,

    /// Comments, oldest first
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Default for Post {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            id: now.timestamp_micros().to_string(),
            title: String::new(),
            slug: String::new(),
            content: String::new(),
            excerpt: String::new(),
            pub_date: now,
            last_modified: now,
            is_published: true,
            categories: Vec::new(),
            tags: Vec::new(),
            comments: Vec::new(),
        }
    }
}

impl Post {
    /// Create a new post, deriving its slug from the title
    pub fn new(title: impl Into<String>) -> Self {
        let mut post = Self::default();
        post.set_title(title, DEFAULT_SLUG_LENGTH);
        post
    }

    /// Parse a post file: optional YAML front-matter followed by the content
    pub fn from_source(source: &str, slug_max_length: usize) -> Result<Self, ContentError> {
        let (fm, body) = FrontMatter::parse(source)?;
        fm.into_post(body, slug_max_length)
    }

    /// Change the title and regenerate the slug from it
    pub fn set_title(&mut self, title: impl Into<String>, slug_max_length: usize) {
        self.title = title.into();
        self.slug = create_slug(self.title.as_str(), slug_max_length);
        self.last_modified = Utc::now();
    }

    /// Site-relative link to the post
    pub fn link(&self) -> String {
        format!("{}/{}/", BLOG_PATH, self.slug)
    }

    /// Site-relative link with the slug percent-encoded
    pub fn encoded_link(&self) -> String {
        format!("{}/{}/", BLOG_PATH, encode_path_segment(&self.slug))
    }

    /// Whether readers can see the post right now
    pub fn is_visible(&self) -> bool {
        self.is_visible_at(Utc::now())
    }

    /// Whether the post is published and its publication date is not after `now`
    pub fn is_visible_at(&self, now: DateTime<Utc>) -> bool {
        self.is_published && self.pub_date <= now
    }

    /// Whether new comments are still accepted
    pub fn are_comments_open(&self, close_after_days: u32) -> bool {
        self.are_comments_open_at(close_after_days, Utc::now())
    }

    /// Whether `now` is within `close_after_days` of the publication date
    pub fn are_comments_open_at(&self, close_after_days: u32, now: DateTime<Utc>) -> bool {
        match self
            .pub_date
            .checked_add_signed(Duration::days(i64::from(close_after_days)))
        {
            Some(cutoff) => now <= cutoff,
            // Cutoff beyond the representable range
            None => true,
        }
    }

    /// Content with lazy-loaded media and expanded shortcodes
    pub fn render_content(&self) -> String {
        render_content(&self.content)
    }
}
