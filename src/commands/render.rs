//! Render post content

use anyhow::Result;
use std::fs;
use std::io;
use std::path::Path;

use crate::content::FrontMatter;
use crate::transform::render_content;

/// Render a post file's body (front-matter removed) or standard input
pub fn run(path: Option<&Path>) -> Result<()> {
    let source = match path {
        Some(path) => fs::read_to_string(path)?,
        None => io::read_to_string(io::stdin())?,
    };

    print!("{}", render_source(&source)?);
    Ok(())
}

/// Strip front-matter and render what is left
pub fn render_source(source: &str) -> Result<String> {
    let (_, body) = FrontMatter::parse(source)?;
    Ok(render_content(body))
}
