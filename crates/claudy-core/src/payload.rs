//! Adapter for the state payloads pushed by the desktop and socket transports

use crate::pose::Pose;
use claudy_telemetry::RawEvent;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// `{current_state, active_projects, focused_project?, last_event?}`
///
/// Fields stay JSON values so a mistyped one is ignored instead of losing the
/// whole payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatePayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_state: Option<Value>,
    /// Older transports send `state`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_projects: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focused_project: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_event: Option<Value>,
}

/// What a payload asks the pipeline to do
#[derive(Debug, Clone, PartialEq)]
pub enum Directive {
    Event(RawEvent),
    Pose(Pose),
    Nothing,
}

impl StatePayload {
    pub fn state_name(&self) -> Option<&str> {
        self.current_state
            .as_ref()
            .and_then(Value::as_str)
            .or_else(|| self.state.as_ref().and_then(Value::as_str))
    }

    /// Project slugs, skipping entries that are not strings
    pub fn projects(&self) -> Vec<String> {
        self.active_projects
            .as_ref()
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn focused(&self) -> Option<&str> {
        self.focused_project.as_ref().and_then(Value::as_str)
    }

    /// The event wins over the bare pose name because it carries context
    pub fn directive(&self) -> Directive {
        if let Some(raw) = self.last_event.as_ref().and_then(event_from_value) {
            return Directive::Event(raw);
        }

        match self.state_name() {
            Some(name) => match name.parse::<Pose>() {
                Ok(pose) => Directive::Pose(pose),
                Err(e) => {
                    tracing::warn!(error = %e, "ignoring payload state");
                    Directive::Nothing
                }
            },
            None => Directive::Nothing,
        }
    }
}

/// One line of transport input: a state payload or a bare raw event
#[derive(Debug, Clone, PartialEq)]
pub enum Inbound {
    Payload(StatePayload),
    Event(RawEvent),
}

impl Inbound {
    pub fn from_json(value: Value) -> Result<Self, serde_json::Error> {
        let is_payload = value.as_object().is_some_and(|obj| {
            ["current_state", "state", "active_projects"]
                .iter()
                .any(|key| obj.contains_key(*key))
        });

        if is_payload {
            serde_json::from_value(value).map(Inbound::Payload)
        } else {
            serde_json::from_value(value).map(Inbound::Event)
        }
    }
}

/// Accepts both a raw-event object and the watcher's tagged event enum,
/// e.g. `{"ToolUse": {"project": "p", "tool": "Edit", "file_path": "a.rs"}}`
fn event_from_value(value: &Value) -> Option<RawEvent> {
    let obj = value.as_object()?;
    if obj.len() == 1 {
        let (tag, body) = obj.iter().next()?;
        if let Some(raw) = tagged_event(tag, body.as_object()) {
            return Some(raw);
        }
    }
    serde_json::from_value(value.clone()).ok()
}

fn tagged_event(tag: &str, body: Option<&Map<String, Value>>) -> Option<RawEvent> {
    let field = |name: &str| body.and_then(|b| b.get(name)).and_then(Value::as_str);

    let mut raw = match tag {
        "SessionStart" => RawEvent::new("session_start"),
        "UserMessage" => RawEvent::new("user_message"),
        "Thinking" => RawEvent::new("thinking"),
        "Talking" => RawEvent::new("talking"),
        "WaitingForTask" => RawEvent::new("waiting"),
        "ToolUse" => {
            let mut raw = RawEvent::new("tool_use");
            if let Some(tool) = field("tool") {
                raw = raw.with_tool(tool);
            }
            if let Some(path) = field("file_path") {
                raw = raw.with_file(path);
            }
            raw
        }
        "Stop" => {
            let success = body
                .and_then(|b| b.get("success"))
                .and_then(Value::as_bool)
                .unwrap_or(true);
            let mut raw = RawEvent::new("stop");
            if !success {
                raw.is_error = Some(Value::Bool(true));
            }
            raw
        }
        "Error" => {
            let mut raw = RawEvent::new("error");
            raw.error = Some(Value::from(field("message").unwrap_or("error")));
            raw
        }
        _ => return None,
    };
    Some(match field("project") {
        Some(project) => raw.with_project(project),
        None => raw,
    })
}
