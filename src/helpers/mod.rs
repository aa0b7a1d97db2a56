//! Helper functions shared by the entity, the loader and the commands

mod date;
mod url;

pub use date::*;
pub use url::*;
