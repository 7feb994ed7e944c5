//! Remarks about the tool in use

use crate::base::{tool_is, CommentCategory, StaticCategory};
use claudy_core::{Context, FileType};

fn editing(ctx: &Context, file_type: FileType) -> bool {
    tool_is(ctx, &["Edit"]) && ctx.file_type == Some(file_type)
}

fn style_edit(ctx: &Context) -> bool {
    editing(ctx, FileType::Style)
}

fn test_edit(ctx: &Context) -> bool {
    editing(ctx, FileType::Test)
}

fn reading(ctx: &Context) -> bool {
    tool_is(ctx, &["Read", "Grep", "Glob"])
}

fn write(ctx: &Context) -> bool {
    tool_is(ctx, &["Write"])
}

fn bash(ctx: &Context) -> bool {
    tool_is(ctx, &["Bash"])
}

fn config_edit(ctx: &Context) -> bool {
    editing(ctx, FileType::Config)
}

fn general_edit(ctx: &Context) -> bool {
    tool_is(ctx, &["Edit"])
}

const CATEGORIES: [StaticCategory; 7] = [
    StaticCategory::new(
        "style-edit",
        style_edit,
        &[
            ("Fiddling with the styling!", 5),
            ("CSS magic in progress...", 5),
            ("Make it pretty!", 5),
        ],
    ),
    StaticCategory::new(
        "test-edit",
        test_edit,
        &[
            ("Tests! Good thinking.", 6),
            ("TDD for the win!", 6),
            ("Quality control in progress...", 5),
        ],
    ),
    StaticCategory::new(
        "reading",
        reading,
        &[
            ("Reading and learning...", 3),
            ("What does this say, then?", 3),
            ("Exploring the code...", 3),
        ],
    ),
    StaticCategory::new(
        "write",
        write,
        &[("A new file on the way!", 4), ("Creating something new...", 4)],
    ),
    StaticCategory::new(
        "bash",
        bash,
        &[
            ("Running the terminal...", 3),
            ("Bash magic!", 3),
            ("Command line time!", 3),
        ],
    ),
    StaticCategory::new(
        "config-edit",
        config_edit,
        &[("Configuring...", 4), ("Fine-tuning the settings.", 4)],
    ),
    StaticCategory::new(
        "general-edit",
        general_edit,
        &[("Editing...", 2), ("A few changes here and there.", 2)],
    ),
];

pub(super) fn categories() -> Vec<Box<dyn CommentCategory>> {
    CATEGORIES
        .iter()
        .map(|c| Box::new(*c) as Box<dyn CommentCategory>)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use claudy_core::EventKind;

    #[test]
    fn test_edit_by_file_type() {
        let css = Context::for_event(EventKind::ToolUse)
            .with_tool("Edit")
            .with_file("app/styles.css");
        assert!(style_edit(&css));
        assert!(general_edit(&css));
        assert!(!test_edit(&css));

        let toml = Context::for_event(EventKind::ToolUse)
            .with_tool("Edit")
            .with_file("Cargo.toml");
        assert!(config_edit(&toml));
    }

    #[test]
    fn test_tool_predicates() {
        let grep = Context::for_event(EventKind::ToolUse).with_tool("Grep");
        assert!(reading(&grep));
        assert!(!write(&grep));
        assert!(bash(&Context::for_event(EventKind::ToolUse).with_tool("Bash")));
    }
}
