//! Show a single post

use anyhow::Result;
use chrono::{DateTime, Utc};
use std::path::Path;

use crate::content::{ContentLoader, Post};
use crate::Miniblog;

/// Print a post's links, state and rendered content, or its JSON form
pub fn run(blog: &Miniblog, path: &Path, json: bool) -> Result<()> {
    let post = ContentLoader::new(blog).load_post(path)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&post)?);
    } else {
        print!("{}", describe(blog, &post, Utc::now()));
    }

    Ok(())
}

/// Human readable summary of a post as of `now`
pub fn describe(blog: &Miniblog, post: &Post, now: DateTime<Utc>) -> String {
    let close_after = blog.config.comments_close_after_days;
    format!(
        "Title:         {}\nLink:          {}\nEncoded link:  {}\nPermalink:     {}\nVisible:       {}\nComments open: {}\n\n{}\n",
        post.title,
        post.link(),
        post.encoded_link(),
        blog.config.permalink(post),
        post.is_visible_at(now),
        post.are_comments_open_at(close_after, now),
        post.render_content()
    )
}
