//! Remarks driven by session state and the event itself

use crate::base::{CommentCategory, StaticCategory};
use claudy_core::{Context, EventKind, MessageLength};

fn very_long_session(ctx: &Context) -> bool {
    ctx.session_duration > 7200
}

fn long_session(ctx: &Context) -> bool {
    ctx.session_duration > 3600
}

fn session_start(ctx: &Context) -> bool {
    ctx.kind == EventKind::SessionStart
}

fn long_user_message(ctx: &Context) -> bool {
    ctx.kind == EventKind::UserMessage && ctx.user_message_length == Some(MessageLength::Long)
}

fn user_message(ctx: &Context) -> bool {
    ctx.kind == EventKind::UserMessage
}

fn task_complete(ctx: &Context) -> bool {
    ctx.kind == EventKind::Stop
}

fn thinking(ctx: &Context) -> bool {
    ctx.kind == EventKind::Thinking
}

fn working(ctx: &Context) -> bool {
    ctx.kind == EventKind::ToolUse
}

const CATEGORIES: [StaticCategory; 8] = [
    StaticCategory::new(
        "very-long-session",
        very_long_session,
        &[
            ("Long session! Maybe time for a break?", 15),
            ("You've been coding for over 2 hours. Coffee?", 15),
            ("Marathon session! Don't forget to stretch.", 15),
        ],
    ),
    StaticCategory::new(
        "long-session",
        long_session,
        &[
            ("An hour already! Time flies.", 8),
            ("Productive session so far!", 8),
        ],
    ),
    StaticCategory::new(
        "session-start",
        session_start,
        &[
            ("Hi! Ready to code?", 20),
            ("New session! What are we building today?", 20),
            ("Welcome back!", 20),
        ],
    ),
    StaticCategory::new(
        "long-user-message",
        long_user_message,
        &[
            ("Whoa, that's a lot! Let me read...", 8),
            ("Detailed! Context is good.", 8),
        ],
    ),
    StaticCategory::new(
        "user-message",
        user_message,
        &[("I'm listening...", 2), ("Tell me more...", 2), ("Mhm...", 2)],
    ),
    StaticCategory::new(
        "task-complete",
        task_complete,
        &[
            ("Done!", 10),
            ("Fixed!", 10),
            ("Done and done!", 10),
            ("Nailed it!", 10),
        ],
    ),
    StaticCategory::new(
        "thinking",
        thinking,
        &[
            ("Hmm, let me think...", 3),
            ("One moment...", 3),
            ("Pondering...", 3),
        ],
    ),
    StaticCategory::new(
        "working",
        working,
        &[
            ("Working on it...", 2),
            ("Almost there!", 2),
            ("In progress...", 2),
        ],
    ),
];

pub(super) fn categories() -> Vec<Box<dyn CommentCategory>> {
    CATEGORIES
        .iter()
        .map(|c| Box::new(*c) as Box<dyn CommentCategory>)
        .collect()
}
