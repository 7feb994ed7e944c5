//! Comment and category model

use claudy_core::Context;
use serde::Serialize;

/// One candidate remark; higher priority wins over lower
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comment {
    pub text: String,
    pub priority: i32,
}

impl Comment {
    pub fn new(text: impl Into<String>, priority: i32) -> Self {
        Self {
            text: text.into(),
            priority,
        }
    }
}

/// A remark picked for a context, with the category it came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentSelection {
    pub text: String,
    pub category: String,
    pub priority: i32,
}

/// Named group of remarks guarded by a predicate over the context
pub trait CommentCategory: Send {
    /// Category name (unique identifier)
    fn name(&self) -> &str;

    /// Whether this category applies to the context
    fn matches(&self, ctx: &Context) -> bool;

    /// Candidate remarks; may be computed from the context
    fn comments(&self, ctx: &Context) -> Vec<Comment>;
}

/// Category backed by a fixed table of remarks
#[derive(Clone, Copy)]
pub struct StaticCategory {
    name: &'static str,
    predicate: fn(&Context) -> bool,
    comments: &'static [(&'static str, i32)],
}

impl StaticCategory {
    pub const fn new(
        name: &'static str,
        predicate: fn(&Context) -> bool,
        comments: &'static [(&'static str, i32)],
    ) -> Self {
        Self {
            name,
            predicate,
            comments,
        }
    }
}

impl std::fmt::Debug for StaticCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticCategory")
            .field("name", &self.name)
            .field("comments", &self.comments.len())
            .finish()
    }
}

impl CommentCategory for StaticCategory {
    fn name(&self) -> &str {
        self.name
    }

    fn matches(&self, ctx: &Context) -> bool {
        (self.predicate)(ctx)
    }

    fn comments(&self, _ctx: &Context) -> Vec<Comment> {
        self.comments
            .iter()
            .map(|(text, priority)| Comment::new(*text, *priority))
            .collect()
    }
}

/// True when the context's target file satisfies `test`
pub(crate) fn target_file(ctx: &Context, test: impl Fn(&str) -> bool) -> bool {
    ctx.target_file.as_deref().is_some_and(test)
}

/// True when the context's tool is one of `tools`
pub(crate) fn tool_is(ctx: &Context, tools: &[&str]) -> bool {
    ctx.tool.as_deref().is_some_and(|tool| tools.contains(&tool))
}
