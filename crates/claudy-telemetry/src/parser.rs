//! Raw event classification

use crate::files::classify_file;
use crate::types::{EventKind, FileType, MessageLength, RawEvent};
use serde_json::Value;

/// Field names that carry a file path, checked in order
const FILE_FIELDS: &[&str] = &["file_path", "path"];

/// Attributes extracted from one raw event
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedEvent {
    pub kind: EventKind,
    pub tool: Option<String>,
    pub file: Option<String>,
    pub file_type: Option<FileType>,
    pub is_error: bool,
    pub error_message: Option<String>,
    pub message_length: Option<MessageLength>,
}

/// Classify a raw event into the canonical taxonomy plus extracted attributes
pub fn classify(raw: &RawEvent) -> ClassifiedEvent {
    let kind = parse_event_kind(raw);
    let file = extract_file_path(raw);
    let file_type = file.as_deref().map(classify_file);
    let message_length = if kind == EventKind::UserMessage {
        categorize_message_length(raw.text_content())
    } else {
        None
    };

    let classified = ClassifiedEvent {
        kind,
        tool: extract_tool_name(raw),
        file,
        file_type,
        is_error: is_error_result(raw),
        error_message: raw.error_message().map(str::to_string),
        message_length,
    };
    tracing::debug!(
        label = raw.label(),
        kind = %classified.kind,
        tool = ?classified.tool,
        file = ?classified.file,
        is_error = classified.is_error,
        "classified event"
    );
    classified
}

/// Map the raw label to an event kind, falling back to field heuristics
pub fn parse_event_kind(raw: &RawEvent) -> EventKind {
    let label = raw.label().to_lowercase();
    if let Some(kind) = EventKind::from_label(&label) {
        return kind;
    }

    if raw.tool().is_some() {
        EventKind::ToolUse
    } else if raw.has_error_field() {
        EventKind::Error
    } else if raw.text_content().is_some() {
        EventKind::Talking
    } else {
        EventKind::Waiting
    }
}

pub fn extract_tool_name(raw: &RawEvent) -> Option<String> {
    raw.tool().map(str::to_string)
}

/// File path from the top-level fields, or from the nested tool input
pub fn extract_file_path(raw: &RawEvent) -> Option<String> {
    if let Some(path) = raw.direct_file() {
        return Some(path.to_string());
    }

    let input = raw.input.as_ref()?.as_object()?;
    FILE_FIELDS
        .iter()
        .filter_map(|field| input.get(*field).and_then(Value::as_str))
        .find(|p| !p.is_empty())
        .map(str::to_string)
}

pub fn categorize_message_length(content: Option<&str>) -> Option<MessageLength> {
    let content = content.filter(|c| !c.is_empty())?;
    let length = content.chars().count();
    Some(if length < 50 {
        MessageLength::Short
    } else if length < 500 {
        MessageLength::Medium
    } else {
        MessageLength::Long
    })
}

/// Whether the event reports a failure by any of the known conventions
pub fn is_error_result(raw: &RawEvent) -> bool {
    raw.has_error_field()
        || raw.label() == "error"
        || raw.result.as_ref().and_then(Value::as_str) == Some("error")
        || raw.flagged_error()
}
