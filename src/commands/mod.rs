//! CLI commands

pub mod list;
pub mod new;
pub mod render;
pub mod show;
