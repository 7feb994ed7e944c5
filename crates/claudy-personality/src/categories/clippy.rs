//! "It looks like you're..." remarks about well-known files

use crate::base::{target_file, CommentCategory, StaticCategory};
use claudy_core::Context;

fn readme(ctx: &Context) -> bool {
    target_file(ctx, |f| f.to_lowercase().contains("readme"))
}

fn package_json(ctx: &Context) -> bool {
    target_file(ctx, |f| f.ends_with("package.json"))
}

fn git(ctx: &Context) -> bool {
    target_file(ctx, |f| f.contains(".git") || f.contains("gitignore"))
}

fn cicd(ctx: &Context) -> bool {
    target_file(ctx, |f| {
        f.contains(".github/workflows") || f.contains("Dockerfile") || f.contains("docker-compose")
    })
}

fn env(ctx: &Context) -> bool {
    target_file(ctx, |f| f.contains(".env"))
}

fn index(ctx: &Context) -> bool {
    target_file(ctx, |f| {
        f.ends_with("index.ts") || f.ends_with("index.js") || f.ends_with("index.tsx")
    })
}

fn busy_session(ctx: &Context) -> bool {
    ctx.event_count > 50
}

fn same_tool(ctx: &Context) -> bool {
    ctx.same_tool_count >= 5
}

const CATEGORIES: [StaticCategory; 8] = [
    StaticCategory::new(
        "readme",
        readme,
        &[
            ("A README? Do people actually read those?", 20),
            ("Documentation! HAH! How optimistic of you.", 18),
            ("Writing docs no one will read. Noble.", 15),
            ("README.md - the most fictional file in any repo.", 18),
        ],
    ),
    StaticCategory::new(
        "package-json",
        package_json,
        &[
            ("Ah yes, the dependency casino.", 18),
            ("Adding more node_modules? Bold.", 15),
            ("package.json - where dreams become 2GB folders.", 18),
        ],
    ),
    StaticCategory::new(
        "git",
        git,
        &[
            ("Hiding your sins in .gitignore?", 15),
            ("What are we pretending doesn't exist today?", 12),
            ("Hiding that .claude folder are we? Don't forget CLAUDE.md", 12),
        ],
    ),
    StaticCategory::new(
        "cicd",
        cicd,
        &[
            ("CI/CD - because breaking prod manually is too easy.", 18),
            ("Automating the destruction. Efficient.", 15),
            ("Docker? Hope you like debugging YAML.", 15),
        ],
    ),
    StaticCategory::new(
        "env",
        env,
        &[
            ("Secrets! Don't commit those. Again.", 20),
            (".env - where API keys go to get leaked.", 18),
            ("Environment variables. Very mysterious.", 12),
        ],
    ),
    StaticCategory::new(
        "index",
        index,
        &[
            ("The index file. Where exports go to party.", 8),
            ("Barrel file time. How exciting.", 8),
        ],
    ),
    StaticCategory::new(
        "busy-session",
        busy_session,
        &[
            ("Wow, you're really going at it. Coffee break?", 12),
            ("Someone's productive today. Suspicious.", 12),
        ],
    ),
    StaticCategory::new(
        "same-tool",
        same_tool,
        &[
            ("Using that tool a lot. Found a favorite?", 8),
            ("Same tool, fifth time. Stuck in a loop?", 10),
        ],
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

    fn editing(path: &str) -> Context {
        Context::for_event(EventKind::ToolUse)
            .with_tool("Edit")
            .with_file(path)
    }

    #[test]
    fn test_file_predicates() {
        assert!(readme(&editing("docs/ReadMe.md")));
        assert!(package_json(&editing("web/package.json")));
        assert!(git(&editing(".gitignore")));
        assert!(cicd(&editing(".github/workflows/ci.yml")));
        assert!(cicd(&editing("deploy/Dockerfile")));
        assert!(env(&editing(".env.local")));
        assert!(index(&editing("src/index.tsx")));
        assert!(!index(&editing("src/index.rs")));
    }

    #[test]
    fn test_counter_predicates() {
        let mut ctx = Context::for_event(EventKind::ToolUse);
        ctx.event_count = 51;
        ctx.same_tool_count = 5;
        assert!(busy_session(&ctx));
        assert!(same_tool(&ctx));

        ctx.event_count = 50;
        ctx.same_tool_count = 4;
        assert!(!busy_session(&ctx));
        assert!(!same_tool(&ctx));
    }
}
