//! Content loader - loads posts from the posts directory

use chrono::{DateTime, Utc};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use super::{ContentError, FrontMatter, Post};
use crate::transform::create_slug;
use crate::Miniblog;

/// Loads posts from the posts directory
pub struct ContentLoader<'a> {
    blog: &'a Miniblog,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(blog: &'a Miniblog) -> Self {
        Self { blog }
    }

    /// Load every post, newest first
    ///
    /// Files that fail to parse are logged and skipped.
    pub fn load_posts(&self) -> Result<Vec<Post>, ContentError> {
        let posts_dir = &self.blog.posts_dir;
        if !posts_dir.exists() {
            tracing::debug!("Posts directory {:?} does not exist", posts_dir);
            return Ok(Vec::new());
        }

        let mut posts = Vec::new();

        for entry in WalkDir::new(posts_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if path.is_file() && is_post_file(path) {
                match self.load_post(path) {
                    Ok(post) => posts.push(post),
                    Err(e) => {
                        tracing::warn!("Failed to load post {:?}: {}", path, e);
                    }
                }
            }
        }

        posts.sort_by(|a, b| b.pub_date.cmp(&a.pub_date));
        tracing::debug!("Loaded {} posts from {:?}", posts.len(), posts_dir);

        Ok(posts)
    }

    /// Load the posts readers can see at `now`, newest first
    pub fn load_visible_posts(&self, now: DateTime<Utc>) -> Result<Vec<Post>, ContentError> {
        let mut posts = self.load_posts()?;
        posts.retain(|post| post.is_visible_at(now));
        Ok(posts)
    }

    /// Load a single post from a file
    ///
    /// The file name stands in for a missing id or title, and the file's
    /// modification time for a missing date.
    pub fn load_post(&self, path: &Path) -> Result<Post, ContentError> {
        let content = fs::read_to_string(path)?;
        let (fm, body) = FrontMatter::parse(&content)?;

        let has_id = fm.id.is_some();
        let has_date = fm.date.is_some();
        let has_updated = fm.updated.is_some();

        let slug_max_length = self.blog.config.slug_max_length;
        let mut post = fm.into_post(body, slug_max_length)?;

        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("untitled")
            .to_string();

        if !has_id {
            post.id = stem.clone();
        }
        if post.title.is_empty() {
            post.title = stem;
            if post.slug.is_empty() {
                post.slug = create_slug(post.title.as_str(), slug_max_length);
            }
        }

        let file_modified = fs::metadata(path)?
            .modified()
            .ok()
            .map(DateTime::<Utc>::from);
        if let Some(modified) = file_modified {
            if !has_date {
                post.pub_date = modified;
            }
            if !has_updated {
                post.last_modified = modified;
            }
        }

        Ok(post)
    }
}

/// Check if a file is a post file
fn is_post_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| matches!(e, "md" | "markdown" | "html"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn blog_with_posts(files: &[(&str, &str)]) -> (TempDir, Miniblog) {
        let dir = TempDir::new().unwrap();
        let blog = Miniblog::new(dir.path()).unwrap();
        fs::create_dir_all(&blog.posts_dir).unwrap();
        for (name, content) in files {
            fs::write(blog.posts_dir.join(name), content).unwrap();
        }
        (dir, blog)
    }

    #[test]
    fn test_load_posts_sorted_newest_first() {
        let (_dir, blog) = blog_with_posts(&[
            ("older.md", "---\ntitle: Older\ndate: 2024-01-01\n---\nold"),
            ("newer.md", "---\ntitle: Newer\ndate: 2024-06-01\n---\nnew"),
            ("notes.txt", "not a post"),
        ]);

        let posts = ContentLoader::new(&blog).load_posts().unwrap();
        let titles: Vec<_> = posts.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Newer", "Older"]);
        assert_eq!(posts[0].id, "newer");
    }

    #[test]
    fn test_broken_post_is_skipped() {
        let (_dir, blog) = blog_with_posts(&[
            ("good.md", "---\ntitle: Good\n---\nbody"),
            ("bad.md", "---\ntitle: Bad\nno closing line"),
        ]);

        let posts = ContentLoader::new(&blog).load_posts().unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title, "Good");
    }

    #[test]
    fn test_missing_posts_dir() {
        let dir = TempDir::new().unwrap();
        let blog = Miniblog::new(dir.path()).unwrap();
        assert!(ContentLoader::new(&blog).load_posts().unwrap().is_empty());
    }

    #[test]
    fn test_title_falls_back_to_file_name() {
        let (_dir, blog) = blog_with_posts(&[("Plain Page.html", "<p>hi</p>")]);
        let post = ContentLoader::new(&blog)
            .load_post(&blog.posts_dir.join("Plain Page.html"))
            .unwrap();
        assert_eq!(post.title, "Plain Page");
        assert_eq!(post.slug, "plain-page");
        assert_eq!(post.content, "<p>hi</p>");
    }

    #[test]
    fn test_load_visible_posts() {
        let (_dir, blog) = blog_with_posts(&[
            ("draft.md", "---\ntitle: Draft\ndate: 2024-01-01\npublished: false\n---\n"),
            ("future.md", "---\ntitle: Future\ndate: 2030-01-01\n---\n"),
            ("live.md", "---\ntitle: Live\ndate: 2024-01-01\n---\n"),
        ]);

        let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let posts = ContentLoader::new(&blog).load_visible_posts(now).unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title, "Live");
    }
}
