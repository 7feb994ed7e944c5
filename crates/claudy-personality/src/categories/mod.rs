//! Built-in comment catalog
//!
//! Groups are registered most specific first.

mod clippy;
mod debugging;
mod session;
mod tools;

use crate::base::CommentCategory;

pub use debugging::RepeatedFile;

/// Every built-in category in registration order
pub fn builtin() -> Vec<Box<dyn CommentCategory>> {
    let mut all: Vec<Box<dyn CommentCategory>> = Vec::new();
    all.extend(clippy::categories());
    all.extend(debugging::categories());
    all.extend(session::categories());
    all.extend(tools::categories());
    all
}

/// Names of the built-in categories in registration order
pub fn builtin_names() -> Vec<String> {
    builtin().iter().map(|c| c.name().to_string()).collect()
}
