//! File path classification

use crate::types::FileType;
use regex::Regex;
use std::sync::OnceLock;

static FILE_RULES: OnceLock<Vec<(Regex, FileType)>> = OnceLock::new();
static DOTRC_RE: OnceLock<Regex> = OnceLock::new();

/// Ordered rules: tests win over styles, styles over docs, docs over config,
/// config over code.
fn file_rules() -> &'static [(Regex, FileType)] {
    FILE_RULES.get_or_init(|| {
        let table: &[(&str, FileType)] = &[
            (r"\.(test|spec)\.(ts|js|tsx|jsx)$", FileType::Test),
            (r"__tests__/", FileType::Test),
            (r"\.test\.(py|rb|go)$", FileType::Test),
            (r"\.(css|scss|sass|less)$", FileType::Style),
            (r"\.styled\.(ts|js|tsx|jsx)$", FileType::Style),
            (r"tailwind\.config", FileType::Style),
            (r"\.(md|mdx|txt|doc|docx|rst)$", FileType::Docs),
            (r"(?i)README", FileType::Docs),
            (r"(?i)CHANGELOG", FileType::Docs),
            (r"(?i)LICENSE", FileType::Docs),
            (r"(package|tsconfig|jsconfig)\.json$", FileType::Config),
            (r"\.(config|rc)\.(ts|js|json|yaml|yml)$", FileType::Config),
            (r"\.env(\..+)?$", FileType::Config),
            (r"Cargo\.toml$", FileType::Config),
            (r"pyproject\.toml$", FileType::Config),
            (r"\.(ts|tsx|js|jsx|mjs|cjs)$", FileType::Code),
            (r"\.(rs|py|rb|go|java|kt|swift|c|cpp|h|hpp)$", FileType::Code),
            (r"\.(vue|svelte|astro)$", FileType::Code),
        ];
        table
            .iter()
            .map(|(pattern, file_type)| (Regex::new(pattern).unwrap(), *file_type))
            .collect()
    })
}

/// Classify a path into a coarse file category
pub fn classify_file(path: &str) -> FileType {
    if path.is_empty() {
        return FileType::Unknown;
    }

    let dotrc = DOTRC_RE.get_or_init(|| Regex::new(r"^\.[a-z]+rc$").unwrap());

    for (re, file_type) in file_rules() {
        // Dotfile rc configs (.eslintrc, .npmrc) only match on the basename and
        // sit between the glob-style config rules and the code rules.
        if *file_type == FileType::Code && dotrc.is_match(file_name(path)) {
            return FileType::Config;
        }
        if re.is_match(path) {
            return *file_type;
        }
    }

    FileType::Unknown
}

/// Final path segment
pub fn file_name(path: &str) -> &str {
    match path.rsplit('/').next() {
        Some(name) if !name.is_empty() => name,
        _ => path,
    }
}

/// Two paths name the same file when their basenames are equal
pub fn is_same_file(a: &str, b: &str) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    file_name(a) == file_name(b)
}
