//! Event and history record types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Canonical event taxonomy every raw event is normalized into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    SessionStart,
    UserMessage,
    Thinking,
    ToolUse,
    ToolResult,
    Talking,
    Waiting,
    Stop,
    Error,
}

impl EventKind {
    pub const ALL: [EventKind; 9] = [
        EventKind::SessionStart,
        EventKind::UserMessage,
        EventKind::Thinking,
        EventKind::ToolUse,
        EventKind::ToolResult,
        EventKind::Talking,
        EventKind::Waiting,
        EventKind::Stop,
        EventKind::Error,
    ];

    /// Look up a lower-cased raw label in the synonym table
    pub fn from_label(label: &str) -> Option<Self> {
        let kind = match label {
            "init" | "system" | "session_start" => EventKind::SessionStart,
            "user" | "human" | "user_message" => EventKind::UserMessage,
            "thinking" => EventKind::Thinking,
            "tool_use" => EventKind::ToolUse,
            "tool_result" => EventKind::ToolResult,
            "text" | "assistant" | "talking" => EventKind::Talking,
            "waiting" | "input_wait" => EventKind::Waiting,
            "stop" | "end" | "result" => EventKind::Stop,
            "error" => EventKind::Error,
            _ => return None,
        };
        Some(kind)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::SessionStart => "session_start",
            EventKind::UserMessage => "user_message",
            EventKind::Thinking => "thinking",
            EventKind::ToolUse => "tool_use",
            EventKind::ToolResult => "tool_result",
            EventKind::Talking => "talking",
            EventKind::Waiting => "waiting",
            EventKind::Stop => "stop",
            EventKind::Error => "error",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse file category used for context-aware remarks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    Code,
    Config,
    Style,
    Docs,
    Test,
    Unknown,
}

/// Length bucket of a user message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLength {
    /// Fewer than 50 characters
    Short,
    /// Fewer than 500 characters
    Medium,
    /// 500 characters or more
    Long,
}

/// A raw activity event as delivered by a transport.
///
/// Upstream producers disagree on field names and value types, so every
/// attribute is optional and kept as a JSON value. The accessors interpret
/// them and treat a value of the wrong type as absent. The alternate
/// spellings (`kind`, `tool`) are read from `extra` rather than aliased, so a
/// record carrying both spellings still deserializes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawEvent {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_name: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_error: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<Value>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl RawEvent {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: Some(Value::String(kind.into())),
            ..Self::default()
        }
    }

    pub fn with_tool(mut self, tool: impl Into<String>) -> Self {
        self.tool_name = Some(Value::String(tool.into()));
        self
    }

    pub fn with_file(mut self, path: impl Into<String>) -> Self {
        self.file_path = Some(Value::String(path.into()));
        self
    }

    pub fn with_error(mut self, message: impl Into<String>) -> Self {
        self.error = Some(Value::String(message.into()));
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(Value::String(content.into()));
        self
    }

    pub fn with_project(mut self, project: impl Into<String>) -> Self {
        self.project = Some(Value::String(project.into()));
        self
    }

    pub fn with_timestamp_millis(mut self, millis: i64) -> Self {
        self.timestamp = Some(Value::from(millis));
        self
    }

    /// The kind label as sent, from `type` or else `kind`; empty when neither is text
    pub fn label(&self) -> &str {
        non_empty_str(self.kind.as_ref())
            .or_else(|| non_empty_str(self.extra.get("kind")))
            .unwrap_or("")
    }

    /// Tool name from `tool_name` or else `tool`
    pub fn tool(&self) -> Option<&str> {
        non_empty_str(self.tool_name.as_ref()).or_else(|| non_empty_str(self.extra.get("tool")))
    }

    /// Top-level file path from `file_path` or else `path`
    pub fn direct_file(&self) -> Option<&str> {
        non_empty_str(self.file_path.as_ref()).or_else(|| non_empty_str(self.path.as_ref()))
    }

    pub fn project_name(&self) -> Option<&str> {
        non_empty_str(self.project.as_ref())
    }

    /// Whether `is_error` is the boolean `true`
    pub fn flagged_error(&self) -> bool {
        matches!(self.is_error, Some(Value::Bool(true)))
    }

    /// Event time, if the producer supplied one as epoch millis or RFC 3339
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        match self.timestamp.as_ref()? {
            Value::Number(n) => n
                .as_i64()
                .or_else(|| n.as_f64().map(|f| f as i64))
                .and_then(DateTime::from_timestamp_millis),
            Value::String(s) => DateTime::parse_from_rfc3339(s)
                .ok()
                .map(|dt| dt.with_timezone(&Utc)),
            _ => None,
        }
    }

    /// Non-empty textual content
    pub fn text_content(&self) -> Option<&str> {
        non_empty_str(self.content.as_ref())
    }

    /// Error message, when the error field carries text
    pub fn error_message(&self) -> Option<&str> {
        non_empty_str(self.error.as_ref())
    }

    /// Whether the error field is present with a meaningful value
    pub fn has_error_field(&self) -> bool {
        self.error.as_ref().is_some_and(is_truthy)
    }
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// One entry of the bounded session history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub kind: EventKind,
    pub timestamp: DateTime<Utc>,
    pub tool: Option<String>,
    pub file: Option<String>,
    pub is_error: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_kind_synonyms() {
        assert_eq!(EventKind::from_label("init"), Some(EventKind::SessionStart));
        assert_eq!(EventKind::from_label("human"), Some(EventKind::UserMessage));
        assert_eq!(EventKind::from_label("assistant"), Some(EventKind::Talking));
        assert_eq!(EventKind::from_label("result"), Some(EventKind::Stop));
        assert_eq!(EventKind::from_label("input_wait"), Some(EventKind::Waiting));
        assert_eq!(EventKind::from_label("bogus"), None);
    }

    #[test]
    fn test_event_kind_labels_roundtrip_through_table() {
        for kind in EventKind::ALL {
            assert_eq!(EventKind::from_label(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn test_raw_event_accepts_loose_shapes() {
        let json = r#"{"type":"tool_use","tool":"Edit","timestamp":1700000000000,"input":{"file_path":"src/a.rs"},"session":"abc"}"#;
        let raw: RawEvent = serde_json::from_str(json).unwrap();
        assert_eq!(raw.label(), "tool_use");
        assert_eq!(raw.tool(), Some("Edit"));
        assert_eq!(raw.timestamp().unwrap().timestamp_millis(), 1_700_000_000_000);
        assert_eq!(raw.extra.get("session"), Some(&Value::from("abc")));
    }

    #[test]
    fn test_raw_event_wrong_value_types_are_absent() {
        let json = r#"{"type":"tool_result","is_error":"true","file_path":42,"tool_name":["Edit"],"project":7}"#;
        let raw: RawEvent = serde_json::from_str(json).unwrap();
        assert_eq!(raw.label(), "tool_result");
        assert!(!raw.flagged_error());
        assert_eq!(raw.direct_file(), None);
        assert_eq!(raw.tool(), None);
        assert_eq!(raw.project_name(), None);
    }

    #[test]
    fn test_raw_event_both_spellings_present() {
        let json = r#"{"type":"tool_use","kind":"human","tool_name":"Edit","tool":"Read"}"#;
        let raw: RawEvent = serde_json::from_str(json).unwrap();
        assert_eq!(raw.label(), "tool_use");
        assert_eq!(raw.tool(), Some("Edit"));

        let only_alternates: RawEvent =
            serde_json::from_str(r#"{"kind":"human","tool":"Bash","type":3}"#).unwrap();
        assert_eq!(only_alternates.label(), "human");
        assert_eq!(only_alternates.tool(), Some("Bash"));
    }

    #[test]
    fn test_raw_event_rfc3339_timestamp() {
        let json = r#"{"type":"user","timestamp":"2025-01-01T00:00:00Z"}"#;
        let raw: RawEvent = serde_json::from_str(json).unwrap();
        assert_eq!(raw.timestamp().unwrap().to_rfc3339(), "2025-01-01T00:00:00+00:00");
    }

    #[test]
    fn test_error_field_truthiness() {
        assert!(RawEvent::new("x").with_error("boom").has_error_field());
        assert!(!RawEvent::new("x").with_error("").has_error_field());

        let mut raw = RawEvent::new("x");
        raw.error = Some(Value::Bool(false));
        assert!(!raw.has_error_field());
        raw.error = Some(Value::Null);
        assert!(!raw.has_error_field());
    }

    #[test]
    fn test_text_content_requires_string() {
        let mut raw = RawEvent::new("x");
        raw.content = Some(serde_json::json!([{"type": "text"}]));
        assert_eq!(raw.text_content(), None);
        assert_eq!(raw.with_content("hi").text_content(), Some("hi"));
    }
}
