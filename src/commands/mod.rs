//! Top-level subcommand handlers.
//!
//! Each handler takes the parsed options, a [`Logger`](crate::logging::Logger)
//! for progress messages, and a writer for command output, so tests can run
//! them without touching the process's stdout.
pub mod check;
pub mod completions;
pub mod dump;
pub mod edit;
pub mod fmt;
pub mod get;
pub mod version;

use anyhow::{Context as _, Result};
use std::path::Path;

use crate::ini::{CommentPolicy, Document};
use crate::logging::{FileStatus, Logger};

/// Load `path` into a fresh document parsed with `policy`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or fails to parse.
pub fn load_document(path: &Path, policy: CommentPolicy) -> Result<Document> {
    let mut doc = Document::with_policy(policy);
    doc.load(path)
        .with_context(|| format!("loading {}", path.display()))?;
    Ok(doc)
}

/// Print the summary and bail if any recorded file failed.
///
/// # Errors
///
/// Returns an error if one or more files recorded a failure.
pub fn finish(log: &Logger) -> Result<()> {
    log.print_summary();
    let count = log.count(FileStatus::Failed);
    if count > 0 {
        anyhow::bail!("{count} file(s) failed");
    }
    Ok(())
}
