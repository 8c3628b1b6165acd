//! Error types shared by the parser, the importers and the filter engine.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// What part of a log line failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The line does not follow `YYYY-MM-DD <n>H <tag> [text]`.
    Grammar,
    /// The date token has the right shape but is not a calendar date (e.g. `2021-02-30`).
    InvalidDate,
    /// The duration does not fit in an hour counter.
    InvalidDuration,
    /// The raw line read from a file is not valid UTF-8.
    InvalidUtf8,
}

/// A single line could not be turned into a [`LogEntry`](crate::LogEntry).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: `{line}`")]
pub struct ParseError {
    pub line: String,
    pub kind: ParseErrorKind,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseErrorKind::Grammar => write!(f, "line does not match `YYYY-MM-DD <n>H <tag> [text]`"),
            ParseErrorKind::InvalidDate => write!(f, "invalid calendar date"),
            ParseErrorKind::InvalidDuration => write!(f, "invalid duration"),
            ParseErrorKind::InvalidUtf8 => write!(f, "line is not valid UTF-8"),
        }
    }
}

/// A file (or a directory listing) could not be imported.
///
/// Both variants carry the originating path, so a report can be printed
/// without going back to the source file.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("can't read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("can't import line {line_number} of {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        /// 1-based line number inside `path`.
        line_number: usize,
        #[source]
        source: ParseError,
    },
}

impl ImportError {
    pub fn path(&self) -> &PathBuf {
        match self {
            ImportError::Io { path, .. } | ImportError::Parse { path, .. } => path,
        }
    }
}

/// A filter could not be built from a predicate name and its arguments.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("unknown predicate `{name}`, expected one of: {expected}")]
    UnknownPredicate { name: String, expected: String },
    #[error("{predicate} takes {expected} argument(s), got {got}")]
    Arity {
        predicate: &'static str,
        expected: usize,
        got: usize,
    },
}

/// Encoding to JSON failed. This is not expected for well-formed entries.
#[derive(Debug, Error)]
#[error("can't encode output as JSON: {0}")]
pub struct SerializeError(#[from] pub serde_json::Error);
