//! Bounded session history and the behavioral signals derived from it

use crate::files::is_same_file;
use crate::types::{EventKind, HistoryRecord};
use chrono::{DateTime, Utc};
use std::collections::VecDeque;

pub const MAX_HISTORY: usize = 50;
pub const RECENT_ERROR_WINDOW: usize = 10;
const LAST_FILES_LIMIT: usize = 5;

/// Rolling history of the current session.
///
/// Streak queries expect the current event to have been recorded already, so
/// the newest history entry is the event being described.
#[derive(Debug, Clone)]
pub struct SessionTracker {
    session_start: DateTime<Utc>,
    history: VecDeque<HistoryRecord>,
    event_count: u64,
}

impl SessionTracker {
    pub fn new() -> Self {
        Self::starting_at(Utc::now())
    }

    pub fn starting_at(session_start: DateTime<Utc>) -> Self {
        Self {
            session_start,
            history: VecDeque::with_capacity(MAX_HISTORY + 1),
            event_count: 0,
        }
    }

    /// Append a record, evicting the oldest once the history is full
    pub fn record(
        &mut self,
        kind: EventKind,
        timestamp: DateTime<Utc>,
        tool: Option<&str>,
        file: Option<&str>,
        is_error: bool,
    ) {
        self.event_count += 1;
        self.history.push_back(HistoryRecord {
            kind,
            timestamp,
            tool: tool.map(str::to_string),
            file: file.map(str::to_string),
            is_error,
        });

        while self.history.len() > MAX_HISTORY {
            self.history.pop_front();
        }
    }

    pub fn reset(&mut self) {
        self.reset_at(Utc::now());
    }

    /// Start a fresh session at `now`
    pub fn reset_at(&mut self, now: DateTime<Utc>) {
        self.session_start = now;
        self.history.clear();
        self.event_count = 0;
    }

    pub fn session_start(&self) -> DateTime<Utc> {
        self.session_start
    }

    /// Whole seconds elapsed since the session started
    pub fn session_duration(&self, now: DateTime<Utc>) -> u64 {
        (now - self.session_start).num_seconds().max(0) as u64
    }

    pub fn event_count(&self) -> u64 {
        self.event_count
    }

    pub fn history(&self) -> impl DoubleEndedIterator<Item = &HistoryRecord> + '_ {
        self.history.iter()
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Length of the trailing run of operations on `file` (compared by basename).
    /// Records without a file neither extend nor break the run.
    pub fn same_file_count(&self, file: Option<&str>) -> usize {
        let Some(file) = file else {
            return 0;
        };
        Self::streak(&self.history, |r| r.file.as_deref(), |f| is_same_file(f, file))
    }

    /// Length of the trailing run of uses of `tool`
    pub fn same_tool_count(&self, tool: Option<&str>) -> usize {
        let Some(tool) = tool else {
            return 0;
        };
        Self::streak(&self.history, |r| r.tool.as_deref(), |t| t == tool)
    }

    fn streak<'a>(
        history: &'a VecDeque<HistoryRecord>,
        attribute: impl Fn(&'a HistoryRecord) -> Option<&'a str>,
        matches: impl Fn(&str) -> bool,
    ) -> usize {
        let mut count = 0;
        for value in history.iter().rev().filter_map(attribute) {
            if !matches(value) {
                break;
            }
            count += 1;
        }
        // The current occurrence always counts, recorded or not.
        count.max(1)
    }

    /// Errors among the last `RECENT_ERROR_WINDOW` records
    pub fn recent_errors(&self) -> usize {
        self.history
            .iter()
            .rev()
            .take(RECENT_ERROR_WINDOW)
            .filter(|r| r.is_error)
            .count()
    }

    /// Distinct file paths, most recent first
    pub fn last_files(&self, limit: usize) -> Vec<String> {
        let mut files: Vec<String> = Vec::with_capacity(limit);
        for file in self.history.iter().rev().filter_map(|r| r.file.as_ref()) {
            if files.len() >= limit {
                break;
            }
            if !files.contains(file) {
                files.push(file.clone());
            }
        }
        files
    }

    pub fn recent_files(&self) -> Vec<String> {
        self.last_files(LAST_FILES_LIMIT)
    }
}

impl Default for SessionTracker {
    fn default() -> Self {
        Self::new()
    }
}
