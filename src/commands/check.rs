//! Command: validate one or more files.
use anyhow::Result;

use crate::cli::{CheckOpts, GlobalOpts};
use crate::ini::Document;
use crate::logging::{FileStatus, Logger};

/// Load every file, record each result, and fail if any file is invalid.
///
/// # Errors
///
/// Returns an error if one or more files fail to load.
pub fn run(global: &GlobalOpts, opts: &CheckOpts, log: &Logger) -> Result<()> {
    log.stage("Checking files");
    for path in &opts.files {
        let display = path.display().to_string();
        let mut doc = Document::with_policy(global.policy());
        match doc.load(path) {
            Ok(()) => {
                let keys: usize = doc.data().values().map(|s| s.len()).sum();
                log.debug(&format!(
                    "{display}: {} sections, {keys} keys",
                    doc.data().len()
                ));
                log.record_file(&display, FileStatus::Ok, None);
            }
            Err(e) => {
                log.record_file(&display, FileStatus::Failed, Some(&e.to_string()));
            }
        }
    }
    super::finish(log)
}
