//! Blog configuration (_config.yml)

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::content::Post;
use crate::helpers::join_url;
use crate::transform::DEFAULT_SLUG_LENGTH;

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Main blog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogConfig {
    // Site
    pub title: String,
    pub author: String,
    pub url: String,

    // Paths
    pub blog_path: String,
    pub posts_dir: String,

    // Writing
    pub slug_max_length: usize,

    // Comments
    pub comments_close_after_days: u32,

    // Display
    pub date_format: String,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            title: "Miniblog".to_string(),
            author: String::new(),
            url: "http://example.com".to_string(),

            blog_path: "/blog".to_string(),
            posts_dir: "posts".to_string(),

            slug_max_length: DEFAULT_SLUG_LENGTH,

            comments_close_after_days: 10,

            date_format: "YYYY-MM-DD".to_string(),

            extra: HashMap::new(),
        }
    }
}

impl BlogConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: BlogConfig = serde_yaml::from_str(&content)?;
        tracing::debug!("Loaded configuration from {:?}", path.as_ref());
        Ok(config)
    }

    /// Absolute URL of a post
    pub fn permalink(&self, post: &Post) -> String {
        let path = format!("{}/{}/", self.blog_path.trim_end_matches('/'), post.slug);
        join_url(&self.url, &path)
    }
}
