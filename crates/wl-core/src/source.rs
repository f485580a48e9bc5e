//! JSONL event log reader.
//!
//! Each non-blank line is one JSON value. Values that are not transition
//! records become inert events; a line that is not JSON at all fails the
//! whole read, since a corrupt log cannot be summarized reliably.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::SourceError;
use crate::event::Event;

/// Parses events from a reader, one JSON value per line.
pub fn read_events<R: BufRead>(reader: R) -> Result<Vec<Event>, SourceError> {
    let mut events = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| SourceError::Read {
            line: idx + 1,
            source,
        })?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let event: Event = serde_json::from_str(trimmed).map_err(|source| SourceError::Parse {
            line: idx + 1,
            source,
        })?;
        events.push(event);
    }
    Ok(events)
}

/// Opens `path` and parses every event in it.
pub fn load_events(path: &Path) -> Result<Vec<Event>, SourceError> {
    let file = File::open(path).map_err(|source| SourceError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let events = read_events(BufReader::new(file))?;
    tracing::debug!(path = ?path, count = events.len(), "loaded event log");
    Ok(events)
}
