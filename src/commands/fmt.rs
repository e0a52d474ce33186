//! Command: rewrite files in normalized form.
use anyhow::{Context as _, Result, bail};
use std::path::Path;

use crate::cli::{FmtOpts, GlobalOpts};
use crate::ini::Document;
use crate::logging::{FileStatus, Logger};

/// Normalize every file in place, or only report differences with `--check`.
///
/// Normalized form is exactly what [`Document::save`] writes: comments
/// dropped, sections and keys sorted, values quoted only where needed.
///
/// # Errors
///
/// Returns an error if any file fails to load or save, or, with `--check`,
/// if any file is not already normalized.
pub fn run(global: &GlobalOpts, opts: &FmtOpts, log: &Logger) -> Result<()> {
    log.stage(if opts.check {
        "Checking formatting"
    } else {
        "Formatting files"
    });
    for path in &opts.files {
        let display = path.display().to_string();
        match format_file(path, global, opts.check) {
            Ok(false) => log.record_file(&display, FileStatus::Ok, None),
            Ok(true) if opts.check => {
                log.record_file(&display, FileStatus::Changed, Some("not normalized"));
            }
            Ok(true) => log.record_file(&display, FileStatus::Changed, Some("rewritten")),
            Err(e) => log.record_file(&display, FileStatus::Failed, Some(&format!("{e:#}"))),
        }
    }
    super::finish(log)?;
    let changed = log.count(FileStatus::Changed);
    if opts.check && changed > 0 {
        bail!("{changed} file(s) not normalized");
    }
    Ok(())
}

/// Return whether the file differs from its normalized form, rewriting it
/// unless `check_only`.
fn format_file(path: &Path, global: &GlobalOpts, check_only: bool) -> Result<bool> {
    let mut doc = Document::with_policy(global.policy());
    doc.load(path)?;
    let original =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let normalized = doc.to_string();
    if original == normalized {
        return Ok(false);
    }
    if !check_only {
        doc.save(path)?;
    }
    Ok(true)
}
