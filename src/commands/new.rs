//! Create a new post

use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use crate::transform::create_slug;
use crate::Miniblog;

/// Create a new unpublished post file named after the title's slug
pub fn create_post(blog: &Miniblog, title: &str) -> Result<PathBuf> {
    let now = chrono::Utc::now();

    let slug = create_slug(title, blog.config.slug_max_length);
    if slug.is_empty() {
        anyhow::bail!("Title {:?} does not produce a usable slug", title);
    }

    fs::create_dir_all(&blog.posts_dir)?;

    let file_path = blog.posts_dir.join(format!("{}.md", slug));
    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let content = format!(
        "---\ntitle: {}\nslug: {}\ndate: {}\npublished: false\ntags: []\ncategories: []\n---\n",
        serde_yaml::to_string(title)?.trim_end(),
        serde_yaml::to_string(&slug)?.trim_end(),
        now.format("%Y-%m-%d %H:%M:%S")
    );

    fs::write(&file_path, content)?;
    tracing::debug!("Created post {:?}", file_path);

    Ok(file_path)
}

/// Run the new command
pub fn run(blog: &Miniblog, title: &str) -> Result<()> {
    let path = create_post(blog, title)?;
    println!("Created: {:?}", path);
    Ok(())
}
