//! Per-event context snapshots and their fan-out to subscribers

use chrono::{DateTime, Utc};
use claudy_telemetry::{
    classify, classify_file, EventKind, FileType, MessageLength, RawEvent, SessionTracker,
};
use serde::Serialize;
use std::panic::{self, AssertUnwindSafe};

/// Outcome carried by an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultStatus {
    Success,
    Error,
    Pending,
}

/// Immutable snapshot of one event plus the session signals derived up to and
/// including it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Context {
    pub kind: EventKind,
    pub project: String,
    pub timestamp: DateTime<Utc>,

    pub tool: Option<String>,
    pub target_file: Option<String>,
    pub file_type: Option<FileType>,

    pub session_start: DateTime<Utc>,
    /// Seconds since the session started
    pub session_duration: u64,
    pub event_count: u64,

    pub same_file_count: usize,
    pub same_tool_count: usize,
    pub recent_errors: usize,
    pub last_files: Vec<String>,

    pub result: Option<ResultStatus>,
    pub error_message: Option<String>,

    pub user_message_length: Option<MessageLength>,
}

impl Context {
    /// Bare context for `kind` with no history behind it
    pub fn for_event(kind: EventKind) -> Self {
        let now = Utc::now();
        Self {
            kind,
            project: String::new(),
            timestamp: now,
            tool: None,
            target_file: None,
            file_type: None,
            session_start: now,
            session_duration: 0,
            event_count: 1,
            same_file_count: 0,
            same_tool_count: 0,
            recent_errors: 0,
            last_files: Vec::new(),
            result: None,
            error_message: None,
            user_message_length: None,
        }
    }

    pub fn with_tool(mut self, tool: &str) -> Self {
        self.tool = Some(tool.to_string());
        self.same_tool_count = self.same_tool_count.max(1);
        self
    }

    pub fn with_file(mut self, path: &str) -> Self {
        self.target_file = Some(path.to_string());
        self.file_type = Some(classify_file(path));
        self.same_file_count = self.same_file_count.max(1);
        self
    }

    pub fn with_result(mut self, result: ResultStatus) -> Self {
        self.result = Some(result);
        self
    }

    pub fn with_recent_errors(mut self, recent_errors: usize) -> Self {
        self.recent_errors = recent_errors;
        self
    }

    pub fn with_session_duration(mut self, seconds: u64) -> Self {
        self.session_duration = seconds;
        self
    }

    pub fn is_error(&self) -> bool {
        self.result == Some(ResultStatus::Error) || self.kind == EventKind::Error
    }
}

/// Subscriber callback; an `Err` or a panic is contained to that subscriber
pub type ContextListener = Box<dyn FnMut(&Context) -> anyhow::Result<()> + Send>;

/// Handle returned by [`ContextAggregator::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Turns raw events into contexts and broadcasts them in arrival order
pub struct ContextAggregator {
    tracker: SessionTracker,
    listeners: Vec<(ListenerId, ContextListener)>,
    next_id: u64,
    project: String,
}

impl ContextAggregator {
    pub fn new() -> Self {
        Self::with_tracker(SessionTracker::new())
    }

    pub fn with_tracker(tracker: SessionTracker) -> Self {
        Self {
            tracker,
            listeners: Vec::new(),
            next_id: 0,
            project: String::new(),
        }
    }

    pub fn set_project(&mut self, project: impl Into<String>) {
        self.project = project.into();
    }

    pub fn project(&self) -> &str {
        &self.project
    }

    pub fn tracker(&self) -> &SessionTracker {
        &self.tracker
    }

    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&Context) -> anyhow::Result<()> + Send + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false when the id was not subscribed
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn handle_event(&mut self, raw: &RawEvent) -> Context {
        self.handle_event_at(raw, Utc::now())
    }

    /// Classify, record, snapshot and broadcast one event.
    ///
    /// The event is recorded before the snapshot is taken so it takes part in
    /// its own streak and error-window counts. A session start resets the
    /// tracker after the snapshot.
    pub fn handle_event_at(&mut self, raw: &RawEvent, now: DateTime<Utc>) -> Context {
        let classified = classify(raw);
        let timestamp = raw.timestamp().unwrap_or(now);

        self.tracker.record(
            classified.kind,
            timestamp,
            classified.tool.as_deref(),
            classified.file.as_deref(),
            classified.is_error,
        );

        let result = if classified.is_error {
            Some(ResultStatus::Error)
        } else {
            match classified.kind {
                EventKind::ToolResult => Some(ResultStatus::Success),
                EventKind::ToolUse => Some(ResultStatus::Pending),
                _ => None,
            }
        };

        let context = Context {
            kind: classified.kind,
            project: raw
                .project_name()
                .map_or_else(|| self.project.clone(), str::to_string),
            timestamp,
            same_file_count: self.tracker.same_file_count(classified.file.as_deref()),
            same_tool_count: self.tracker.same_tool_count(classified.tool.as_deref()),
            tool: classified.tool,
            target_file: classified.file,
            file_type: classified.file_type,
            session_start: self.tracker.session_start(),
            session_duration: self.tracker.session_duration(now),
            event_count: self.tracker.event_count(),
            recent_errors: self.tracker.recent_errors(),
            last_files: self.tracker.recent_files(),
            result,
            error_message: classified.error_message,
            user_message_length: classified.message_length,
        };

        if context.kind == EventKind::SessionStart {
            self.tracker.reset_at(now);
        }

        self.notify(&context);
        context
    }

    fn notify(&mut self, context: &Context) {
        for (id, listener) in &mut self.listeners {
            match panic::catch_unwind(AssertUnwindSafe(|| listener(context))) {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    tracing::warn!(listener = id.0, error = %e, "context listener failed");
                }
                Err(payload) => {
                    let message = payload
                        .downcast_ref::<&str>()
                        .map(|s| s.to_string())
                        .or_else(|| payload.downcast_ref::<String>().cloned())
                        .unwrap_or_else(|| "unknown panic".to_string());
                    tracing::warn!(listener = id.0, panic = %message, "context listener panicked");
                }
            }
        }
    }
}

impl Default for ContextAggregator {
    fn default() -> Self {
        Self::new()
    }
}
