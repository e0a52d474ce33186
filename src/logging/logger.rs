//! Structured logger with per-file summary collection.
use std::sync::Mutex;

use super::subscriber::STAGE_TARGET;
use super::types::{FileEntry, FileStatus};

/// Console logger that also records one result per processed file.
///
/// Messages are forwarded to [`tracing`]; the global subscriber installed by
/// [`init_subscriber`](super::init_subscriber) decides what reaches the console.
#[derive(Debug, Default)]
pub struct Logger {
    files: Mutex<Vec<FileEntry>>,
}

impl Logger {
    /// Create a new logger with an empty summary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Log an error message.
    pub fn error(&self, msg: &str) {
        tracing::error!("{msg}");
    }

    /// Log a warning message.
    pub fn warn(&self, msg: &str) {
        tracing::warn!("{msg}");
    }

    /// Log a stage header.
    pub fn stage(&self, msg: &str) {
        tracing::info!(target: STAGE_TARGET, "{msg}");
    }

    /// Log an informational message.
    pub fn info(&self, msg: &str) {
        tracing::info!("{msg}");
    }

    /// Log a debug message (shown only with `--verbose`).
    pub fn debug(&self, msg: &str) {
        tracing::debug!("{msg}");
    }

    /// Record a file result for the summary.
    pub fn record_file(&self, path: &str, status: FileStatus, message: Option<&str>) {
        if let Ok(mut guard) = self.files.lock() {
            guard.push(FileEntry {
                path: path.to_string(),
                status,
                message: message.map(String::from),
            });
        }
    }

    /// Return a clone of all recorded file entries.
    #[must_use]
    pub fn file_entries(&self) -> Vec<FileEntry> {
        self.files.lock().map_or_else(|_| vec![], |g| g.clone())
    }

    /// Count the number of files with the given status.
    #[must_use]
    pub fn count(&self, status: FileStatus) -> usize {
        self.files
            .lock()
            .map_or(0, |guard| guard.iter().filter(|f| f.status == status).count())
    }

    /// Print the summary of all recorded files.
    pub fn print_summary(&self) {
        let files = self.file_entries();
        if files.is_empty() {
            return;
        }

        self.stage("Summary");
        for file in &files {
            let icon = match file.status {
                FileStatus::Ok => "✓",
                FileStatus::Changed => "~",
                FileStatus::Failed => "✗",
            };
            let suffix = file
                .message
                .as_ref()
                .map_or_else(String::new, |msg| format!(" ({msg})"));
            let line = format!("{icon} {}{suffix}", file.path);
            if file.status == FileStatus::Failed {
                self.error(&line);
            } else {
                self.info(&line);
            }
        }

        self.info(&format!(
            "{} files: {} ok, {} changed, {} failed",
            files.len(),
            self.count(FileStatus::Ok),
            self.count(FileStatus::Changed),
            self.count(FileStatus::Failed)
        ));
    }
}
