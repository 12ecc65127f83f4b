use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot read TDB file '{}': {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O operation failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("malformed {field} '{value}' in {keyword} statement (at line ~{line})")]
    MalformedValue {
        keyword: &'static str,
        field: &'static str,
        value: String,
        line: usize,
    },

    #[error("{keyword} statement is missing its {field} (at line ~{line})")]
    MissingField {
        keyword: &'static str,
        field: &'static str,
        line: usize,
    },

    #[error("CONSTITUENT statement refers to undeclared phase '{name}' (at line ~{line})")]
    MissingPhase { name: String, line: usize },

    #[error(
        "phase '{phase}' declares {declared} sublattice(s) but lists {found} {what} (at line ~{line})"
    )]
    SublatticeMismatch {
        phase: String,
        declared: usize,
        found: usize,
        what: &'static str,
        line: usize,
    },

    #[error("failed to serialize record: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn file_access(path: &Path, source: std::io::Error) -> Self {
        Self::FileAccess {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn malformed(
        keyword: &'static str,
        field: &'static str,
        value: impl Into<String>,
        line: usize,
    ) -> Self {
        Self::MalformedValue {
            keyword,
            field,
            value: value.into(),
            line,
        }
    }

    pub fn missing_field(keyword: &'static str, field: &'static str, line: usize) -> Self {
        Self::MissingField {
            keyword,
            field,
            line,
        }
    }

    pub fn missing_phase(name: impl Into<String>, line: usize) -> Self {
        Self::MissingPhase {
            name: name.into(),
            line,
        }
    }

    /// Source line the error points at, if it comes from a statement.
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::MalformedValue { line, .. }
            | Error::MissingField { line, .. }
            | Error::MissingPhase { line, .. }
            | Error::SublatticeMismatch { line, .. } => Some(*line),
            Error::FileAccess { .. } | Error::Io { .. } | Error::Json(_) => None,
        }
    }
}
