//! Speech bubble remarks chosen from prioritized comment categories

pub mod base;
pub mod categories;
pub mod config;
pub mod registry;
pub mod selector;

pub use base::{Comment, CommentCategory, CommentSelection, StaticCategory};
pub use config::SelectorConfig;
pub use registry::{CategoryRegistry, UnknownCategory};
pub use selector::CommentSelector;
