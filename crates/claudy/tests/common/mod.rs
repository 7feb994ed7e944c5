use claudy_core::RawEvent;

/// A short coding turn: prompt, thinking, three edits on one file, answer, stop
pub fn sample_turn() -> Vec<RawEvent> {
    vec![
        RawEvent::new("user").with_content("the tokenizer drops the last token, can you fix it?"),
        RawEvent::new("thinking"),
        RawEvent::new("tool_use")
            .with_tool("Read")
            .with_file("src/tokenizer.rs"),
        RawEvent::new("tool_use")
            .with_tool("Edit")
            .with_file("src/tokenizer.rs"),
        RawEvent::new("tool_use")
            .with_tool("Edit")
            .with_file("src/tokenizer.rs"),
        RawEvent::new("assistant").with_content("Fixed the off-by-one in the tokenizer."),
        RawEvent::new("stop"),
    ]
}

pub fn failing_tool(file: &str) -> RawEvent {
    RawEvent::new("tool_result")
        .with_tool("Bash")
        .with_file(file)
        .with_error("command exited with status 1")
}
