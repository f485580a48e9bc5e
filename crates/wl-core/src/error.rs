//! Error types surfaced to callers.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors from the summary pipeline.
///
/// Individual malformed events are never errors; they are skipped and
/// counted in [`ExtractionStats`](crate::ExtractionStats).
#[derive(Debug, Error)]
pub enum Error {
    /// The event log could not be read or parsed.
    #[error("event source unavailable")]
    SourceUnavailable(#[from] SourceError),

    /// No day holds a work start, so there is nothing to roll up.
    #[error("no work recorded")]
    EmptyInput,
}

/// Failures reading the JSONL event log.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The log file could not be opened.
    #[error("failed to open {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading a line failed.
    #[error("failed to read line {line}")]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },

    /// A line was not valid JSON.
    #[error("invalid JSON on line {line}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}
