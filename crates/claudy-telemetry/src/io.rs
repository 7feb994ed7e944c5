//! JSONL reading and atomic file writes

use serde::Deserialize;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Read all records from a JSONL file; a missing file reads as empty
pub fn read_jsonl<T: for<'de> Deserialize<'de>>(path: &Path) -> std::io::Result<Vec<T>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let file = File::open(path)?;
    parse_jsonl(BufReader::new(file))
}

/// Parse JSONL from any reader, skipping blank and malformed lines
pub fn parse_jsonl<T, R>(reader: R) -> std::io::Result<Vec<T>>
where
    T: for<'de> Deserialize<'de>,
    R: BufRead,
{
    let mut records = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str(&line) {
            Ok(record) => records.push(record),
            Err(e) => tracing::warn!(line = index + 1, error = %e, "skipping malformed line"),
        }
    }

    Ok(records)
}

/// Write data atomically using temp file + rename
pub fn atomic_write(path: &Path, data: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let temp_path = path.with_extension("tmp");
    std::fs::write(&temp_path, data)?;
    std::fs::rename(temp_path, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RawEvent;

    #[test]
    fn test_parse_jsonl_skips_malformed_lines() {
        let input = "{\"type\":\"user\"}\n\nnot json\n{\"type\":\"stop\"}\n";
        let events: Vec<RawEvent> = parse_jsonl(input.as_bytes()).unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].label(), "user");
        assert_eq!(events[1].label(), "stop");
    }

    #[test]
    fn test_read_jsonl_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let events: Vec<RawEvent> = read_jsonl(&dir.path().join("none.jsonl")).unwrap();
        assert!(events.is_empty());
    }

    #[test]
    fn test_atomic_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("events.jsonl");

        atomic_write(&path, b"{\"type\":\"thinking\"}\n").unwrap();

        let events: Vec<RawEvent> = read_jsonl(&path).unwrap();
        assert_eq!(events.len(), 1);
        assert!(!path.with_extension("tmp").exists());
    }
}
