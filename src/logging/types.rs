//! Per-file result types recorded by multi-file commands.

/// Result of processing one file, kept for the run summary.
#[derive(Debug, Clone)]
pub struct FileEntry {
    /// Path as given on the command line.
    pub path: String,
    /// Final status of the file.
    pub status: FileStatus,
    /// Optional detail message (e.g., the parse error).
    pub message: Option<String>,
}

/// Status of a processed file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    /// File loaded (and, where relevant, was already normalized).
    Ok,
    /// File was rewritten, or would be rewritten under `--check`.
    Changed,
    /// File could not be loaded or written.
    Failed,
}
