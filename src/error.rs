// Error types for loading, resolution and report writing

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Why a source file could not be used
#[derive(Debug, Error)]
pub enum SourceFault {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected a JSON array of records")]
    NotAnArray,
}

/// Batch-level failures
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// A chain file, the chain directory or the shop file could not be read or parsed.
    /// Chain files are skipped; for the shop file this aborts the run.
    #[error("source {path} is unreadable: {fault}")]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        fault: SourceFault,
    },

    /// No supermarket survived loading, so no shop can be resolved
    #[error("no supermarket candidates available to resolve {shops} shop(s)")]
    NoCandidates { shops: usize },

    #[error("failed to write {path}: {source}")]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl AnalysisError {
    pub(crate) fn unreadable(path: impl Into<PathBuf>, fault: impl Into<SourceFault>) -> Self {
        Self::SourceUnreadable {
            path: path.into(),
            fault: fault.into(),
        }
    }

    pub(crate) fn write_failure(path: impl Into<PathBuf>, source: impl Into<io::Error>) -> Self {
        Self::WriteFailure {
            path: path.into(),
            source: source.into(),
        }
    }
}

/// Why a single input record was rejected at the load boundary
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordError {
    #[error("record is not a JSON object")]
    NotAnObject,

    #[error("missing field `{0}`")]
    MissingField(&'static str),

    #[error("field `{field}` is not a finite number: {value}")]
    InvalidNumber { field: &'static str, value: String },
}
