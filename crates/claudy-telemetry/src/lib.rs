//! Event ingestion types, classification and session history for the mascot

mod files;
mod io;
mod parser;
mod paths;
mod tracker;
mod types;

pub use files::{classify_file, file_name, is_same_file};
pub use io::{atomic_write, parse_jsonl, read_jsonl};
pub use parser::{
    categorize_message_length, classify, extract_file_path, extract_tool_name, is_error_result,
    parse_event_kind, ClassifiedEvent,
};
pub use paths::Paths;
pub use tracker::{SessionTracker, MAX_HISTORY, RECENT_ERROR_WINDOW};
pub use types::{EventKind, FileType, HistoryRecord, MessageLength, RawEvent};
