//! List posts

use anyhow::Result;
use chrono::{DateTime, Utc};

use crate::content::{ContentLoader, Post};
use crate::helpers::format_date;
use crate::Miniblog;

/// List visible posts, or every post when `all` is set
pub fn run(blog: &Miniblog, all: bool) -> Result<()> {
    let loader = ContentLoader::new(blog);
    let now = Utc::now();

    let posts = if all {
        loader.load_posts()?
    } else {
        loader.load_visible_posts(now)?
    };

    print!("{}", format_listing(blog, &posts, now));
    Ok(())
}

/// One line per post: date, title, link and a marker for hidden posts
pub fn format_listing(blog: &Miniblog, posts: &[Post], now: DateTime<Utc>) -> String {
    let mut output = format!("Posts ({}):\n", posts.len());
    for post in posts {
        let marker = if post.is_visible_at(now) {
            ""
        } else if !post.is_published {
            " [draft]"
        } else {
            " [scheduled]"
        };
        output.push_str(&format!(
            "  {} - {} {}{}\n",
            format_date(&post.pub_date, &blog.config.date_format),
            post.title,
            post.link(),
            marker
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    #[test]
    fn test_format_listing() {
        let dir = TempDir::new().unwrap();
        let blog = Miniblog::new(dir.path()).unwrap();
        let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();

        let mut live = Post::new("Live Post");
        live.pub_date = Utc.with_ymd_and_hms(2024, 3, 5, 0, 0, 0).unwrap();
        let mut draft = Post::new("Draft Post");
        draft.pub_date = live.pub_date;
        draft.is_published = false;
        let mut scheduled = Post::new("Later Post");
        scheduled.pub_date = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();

        let listing = format_listing(&blog, &[scheduled, live, draft], now);
        assert_eq!(
            listing,
            "Posts (3):\n  2025-06-01 - Later Post /blog/later-post/ [scheduled]\n  2024-03-05 - Live Post /blog/live-post/\n  2024-03-05 - Draft Post /blog/draft-post/ [draft]\n"
        );
    }
}
