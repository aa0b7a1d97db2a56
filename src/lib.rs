//! miniblog: slug generation and content rendering for a small blog engine
//!
//! The core of the crate is [`transform`]: turning post titles into URL
//! slugs and rewriting post content so embedded media is lazy-loaded. The
//! [`content`] module holds the `Post` and `Comment` entities and reads
//! posts from files with YAML front-matter.

pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;
pub mod transform;

use anyhow::Result;
use std::path::{Path, PathBuf};

pub use content::{Comment, Post};
pub use transform::{create_slug, render_content, slugify};

/// A blog rooted in a directory
#[derive(Clone)]
pub struct Miniblog {
    /// Blog configuration
    pub config: config::BlogConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Directory holding the post files
    pub posts_dir: PathBuf,
}

impl Miniblog {
    /// Open a blog directory, reading `_config.yml` when present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::BlogConfig::load(&config_path)?
        } else {
            config::BlogConfig::default()
        };

        let posts_dir = base_dir.join(&config.posts_dir);

        Ok(Self {
            config,
            base_dir,
            posts_dir,
        })
    }

    /// Load every post, newest first
    pub fn posts(&self) -> Result<Vec<Post>> {
        Ok(content::ContentLoader::new(self).load_posts()?)
    }

    /// Create a new post file
    pub fn new_post(&self, title: &str) -> Result<PathBuf> {
        commands::new::create_post(self, title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_open_with_config() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("_config.yml"),
            "title: Notes\nposts_dir: articles\nslug_max_length: 8\n",
        )
        .unwrap();

        let blog = Miniblog::new(dir.path()).unwrap();
        assert_eq!(blog.config.title, "Notes");
        assert_eq!(blog.posts_dir, dir.path().join("articles"));

        let path = blog.new_post("Hello World Again").unwrap();
        assert_eq!(path, dir.path().join("articles").join("hello-wo.md"));

        let posts = blog.posts().unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].slug, "hello-wo");
    }

    #[test]
    fn test_open_without_config() {
        let dir = TempDir::new().unwrap();
        let blog = Miniblog::new(dir.path()).unwrap();
        assert_eq!(blog.config.slug_max_length, 50);
        assert!(blog.posts().unwrap().is_empty());
    }
}
