use claudy_core::{Context, ContextAggregator, EventKind, RawEvent, ScriptedRandom};
use claudy_personality::{
    CategoryRegistry, Comment, CommentCategory, CommentSelector, SelectorConfig, StaticCategory,
};

fn always(_ctx: &Context) -> bool {
    true
}

fn always_on() -> SelectorConfig {
    SelectorConfig {
        comment_chance: 1.0,
        ..SelectorConfig::new()
    }
}

fn single_comment_selector() -> CommentSelector {
    let mut registry = CategoryRegistry::new();
    registry.register(Box::new(StaticCategory::new(
        "only",
        always,
        &[("The one and only.", 1)],
    )));
    CommentSelector::with_parts(always_on(), registry, Box::new(ScriptedRandom::constant(0.5)))
}

#[test]
fn test_single_comment_always_returned() {
    let mut selector = single_comment_selector();
    let ctx = Context::for_event(EventKind::Thinking);
    assert_eq!(selector.select(&ctx).as_deref(), Some("The one and only."));
}

#[test]
fn test_repeats_when_no_alternative_exists() {
    let mut selector = single_comment_selector();
    let ctx = Context::for_event(EventKind::Thinking);

    for round in 0..11 {
        assert_eq!(
            selector.select(&ctx).as_deref(),
            Some("The one and only."),
            "round {} should repeat the only comment",
            round
        );
    }
    assert_eq!(selector.recent().count(), 1);
}

#[test]
fn test_recent_text_falls_back_to_lower_priority() {
    let mut registry = CategoryRegistry::new();
    registry.register(Box::new(StaticCategory::new(
        "mixed",
        always,
        &[("Top pick.", 10), ("Runner up.", 1)],
    )));
    let mut selector =
        CommentSelector::with_parts(always_on(), registry, Box::new(ScriptedRandom::constant(0.0)));
    let ctx = Context::for_event(EventKind::Thinking);

    assert_eq!(selector.select(&ctx).as_deref(), Some("Top pick."));
    assert_eq!(selector.select(&ctx).as_deref(), Some("Runner up."));
    assert_eq!(selector.last_comment(), Some("Runner up."));
}

#[test]
fn test_min_priority_floor() {
    let config = SelectorConfig {
        comment_chance: 1.0,
        min_priority: 5,
        ..SelectorConfig::new()
    };
    let mut selector = CommentSelector::with_random(config, Box::new(ScriptedRandom::constant(0.0)));

    // only p3 bash remarks and p2 working remarks match
    let ctx = Context::for_event(EventKind::ToolUse).with_tool("Bash");
    assert_eq!(selector.select(&ctx), None);
}

#[test]
fn test_context_computed_comments() {
    struct Echo;

    impl CommentCategory for Echo {
        fn name(&self) -> &str {
            "echo"
        }

        fn matches(&self, ctx: &Context) -> bool {
            ctx.tool.is_some()
        }

        fn comments(&self, ctx: &Context) -> Vec<Comment> {
            let tool = ctx.tool.clone().unwrap_or_default();
            vec![Comment::new(format!("Using {tool}"), 100)]
        }
    }

    let mut selector = CommentSelector::with_random(always_on(), Box::new(ScriptedRandom::constant(0.0)));
    selector.register(Box::new(Echo));

    let ctx = Context::for_event(EventKind::ToolUse).with_tool("Grep");
    assert_eq!(selector.select(&ctx).as_deref(), Some("Using Grep"));
}

#[test]
fn test_repeated_file_streak_from_aggregator() {
    let mut aggregator = ContextAggregator::new();
    let mut selector =
        CommentSelector::with_random(always_on(), Box::new(ScriptedRandom::constant(0.0)));

    let event = RawEvent::new("tool_use")
        .with_tool("Edit")
        .with_file("src/lib.rs");
    let mut last = None;
    for _ in 0..3 {
        let ctx = aggregator.handle_event(&event);
        last = selector.select(&ctx);
    }

    // p15 repeated-file remark outranks every other match at streak 3
    assert_eq!(
        last.as_deref(),
        Some("It looks like you're debugging lib.rs. Would you like help?")
    );
}
