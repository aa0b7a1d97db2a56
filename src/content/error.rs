//! Errors raised while reading post files

use thiserror::Error;

/// Post loading and parsing errors
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid front-matter: {0}")]
    FrontMatter(#[from] serde_yaml::Error),

    #[error("Front-matter is missing its closing ---")]
    UnterminatedFrontMatter,

    #[error("Invalid {field} date: {value}")]
    InvalidDate { field: &'static str, value: String },
}
