//! Remarks for debugging patterns: repeated files and error streaks

use crate::base::{Comment, CommentCategory, StaticCategory};
use claudy_core::{Context, ResultStatus};
use claudy_telemetry::file_name;

/// Same file touched three or more times in a row; names the file and streak
#[derive(Debug, Clone, Copy, Default)]
pub struct RepeatedFile;

impl RepeatedFile {
    pub const MIN_STREAK: usize = 3;
}

impl CommentCategory for RepeatedFile {
    fn name(&self) -> &str {
        "repeated-file"
    }

    fn matches(&self, ctx: &Context) -> bool {
        ctx.same_file_count >= Self::MIN_STREAK
    }

    fn comments(&self, ctx: &Context) -> Vec<Comment> {
        let name = ctx.target_file.as_deref().map_or("that file", file_name);
        let streak = ctx.same_file_count;
        vec![
            Comment::new(format!("Back to {name} again... a classic!"), 10),
            Comment::new(
                format!("It looks like you're debugging {name}. Would you like help?"),
                15,
            ),
            Comment::new(format!("Visit number {streak} to {name}. Third time's the charm?"), 8),
            Comment::new(format!("{name} is getting a lot of love today!"), 8),
        ]
    }
}

fn multiple_errors(ctx: &Context) -> bool {
    ctx.recent_errors >= 2
}

fn single_error(ctx: &Context) -> bool {
    ctx.result == Some(ResultStatus::Error)
}

const STATIC: [StaticCategory; 2] = [
    StaticCategory::new(
        "multiple-errors",
        multiple_errors,
        &[
            ("A bit bumpy right now, but you've got this!", 12),
            ("Errors happen to the best of us. Deep breath!", 12),
            ("Debugging is an art form...", 10),
        ],
    ),
    StaticCategory::new(
        "single-error",
        single_error,
        &[
            ("Oops! Something went wrong...", 5),
            ("Hmm, that didn't quite work.", 5),
            ("An error! Nothing we can't fix.", 5),
        ],
    ),
];

pub(super) fn categories() -> Vec<Box<dyn CommentCategory>> {
    let mut all: Vec<Box<dyn CommentCategory>> = vec![Box::new(RepeatedFile)];
    all.extend(
        STATIC
            .iter()
            .map(|c| Box::new(*c) as Box<dyn CommentCategory>),
    );
    all
}
