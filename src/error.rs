//! Error taxonomy for loading, editing, and saving INI documents.
//!
//! Every fallible operation on a [`Document`](crate::ini::Document) returns
//! an [`IniError`].  The set of variants is closed: callers that need to
//! branch on the condition alone can match on [`IniError::kind`], which
//! yields a `Copy` discriminant with a fixed description.
//!
//! ```text
//! IniError
//! ├── FileNotFound     — the file could not be opened or read
//! ├── InvalidSection   — `[]` header, or a section name containing brackets
//! ├── InvalidLine      — a line with no `=` separator
//! ├── EmptyKey         — a key that is empty after trimming
//! ├── DuplicateKey     — the same key twice in one section of a file
//! ├── FileWriteFailed  — the file could not be created or written
//! └── UnmatchedQuotes  — a quoted value without its closing quote
//! ```
use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by [`Document`](crate::ini::Document) operations.
///
/// Parse errors carry the 1-based line number and the offending text.
/// Validation errors raised by `set` have no line number.
#[derive(Error, Debug)]
pub enum IniError {
    /// The file could not be opened or read (including invalid UTF-8).
    #[error("File not found: {}", .path.display())]
    FileNotFound {
        /// Path that was being loaded.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// A section header is empty, or a section name contains `[` or `]`.
    #[error("Invalid section name '{name}'{}", at_line(.line))]
    InvalidSection {
        /// Line number in the source text, if raised while parsing.
        line: Option<usize>,
        /// The rejected section name (after trimming).
        name: String,
    },

    /// A non-blank, non-header line has no `=` separator.
    #[error("Invalid line (missing '=') at line {line}: {text}")]
    InvalidLine {
        /// Line number in the source text.
        line: usize,
        /// The offending line, comments stripped.
        text: String,
    },

    /// A key is empty after trimming.
    #[error("Empty key{}", at_line(.line))]
    EmptyKey {
        /// Line number in the source text, if raised while parsing.
        line: Option<usize>,
    },

    /// The same key appears twice in one section of a parsed file.
    #[error("Duplicate key '{key}' in section [{section}] at line {line}")]
    DuplicateKey {
        /// Line number of the second occurrence.
        line: usize,
        /// Section holding the key (empty for the global section).
        section: String,
        /// The repeated key.
        key: String,
    },

    /// The file could not be created, written, or flushed.
    #[error("Failed to write to file: {}", .path.display())]
    FileWriteFailed {
        /// Path that was being saved.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// A value opens a quote that is not closed by the same quote character.
    #[error("Unmatched quotes at line {line}: {value}")]
    UnmatchedQuotes {
        /// Line number in the source text.
        line: usize,
        /// The raw value as it appeared in the file.
        value: String,
    },
}

impl IniError {
    /// Return the discriminant of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::FileNotFound { .. } => ErrorKind::FileNotFound,
            Self::InvalidSection { .. } => ErrorKind::InvalidSection,
            Self::InvalidLine { .. } => ErrorKind::InvalidLine,
            Self::EmptyKey { .. } => ErrorKind::EmptyKey,
            Self::DuplicateKey { .. } => ErrorKind::DuplicateKey,
            Self::FileWriteFailed { .. } => ErrorKind::FileWriteFailed,
            Self::UnmatchedQuotes { .. } => ErrorKind::UnmatchedQuotes,
        }
    }

    /// Return the source line number, if the error came from parsing.
    #[must_use]
    pub const fn line(&self) -> Option<usize> {
        match self {
            Self::InvalidSection { line, .. } | Self::EmptyKey { line } => *line,
            Self::InvalidLine { line, .. }
            | Self::DuplicateKey { line, .. }
            | Self::UnmatchedQuotes { line, .. } => Some(*line),
            Self::FileNotFound { .. } | Self::FileWriteFailed { .. } => None,
        }
    }
}

/// Closed set of failure conditions, without any payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Could not open or read the file.
    FileNotFound,
    /// Found a section with an empty or invalid name.
    InvalidSection,
    /// A line was missing the `=` delimiter.
    InvalidLine,
    /// Found a key that is empty after trimming.
    EmptyKey,
    /// Encountered a duplicate key in the same section.
    DuplicateKey,
    /// Could not write to the file.
    FileWriteFailed,
    /// A quoted value was not closed by its opening quote character.
    UnmatchedQuotes,
}

impl ErrorKind {
    /// Fixed human-readable description of this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FileNotFound => "File not found",
            Self::InvalidSection => "Invalid section name",
            Self::InvalidLine => "Invalid line (missing '=')",
            Self::EmptyKey => "Empty key",
            Self::DuplicateKey => "Duplicate key in section",
            Self::FileWriteFailed => "Failed to write to file",
            Self::UnmatchedQuotes => "Unmatched quotes",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[allow(clippy::ref_option)]
fn at_line(line: &Option<usize>) -> String {
    line.map_or_else(String::new, |n| format!(" at line {n}"))
}
