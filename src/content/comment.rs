//! Comment model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::helpers::gravatar;

/// A reader comment on a post
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub author: String,
    pub email: String,
    /// Comment text, shown as written
    pub content: String,
    pub pub_date: DateTime<Utc>,
    /// Whether the comment was written by the blog owner
    pub is_admin: bool,
}

impl Default for Comment {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            id: now.timestamp_micros().to_string(),
            author: String::new(),
            email: String::new(),
            content: String::new(),
            pub_date: now,
            is_admin: false,
        }
    }
}

impl Comment {
    /// Create a comment posted now
    pub fn new(
        author: impl Into<String>,
        email: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            author: author.into(),
            email: email.into(),
            content: content.into(),
            ..Default::default()
        }
    }

    /// Avatar URL of the commenter
    pub fn gravatar(&self) -> String {
        gravatar(&self.email, None)
    }

    /// Comment content; comments get no shortcode or lazy-load rendering
    pub fn render_content(&self) -> &str {
        &self.content
    }
}
