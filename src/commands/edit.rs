//! Commands: set and remove keys in place.
use anyhow::{Context as _, Result, bail};
use std::path::Path;

use crate::cli::{GlobalOpts, SetOpts, UnsetOpts};
use crate::error::ErrorKind;
use crate::ini::Document;
use crate::logging::Logger;

/// Set one key and save the file.  A missing file starts out empty.
///
/// # Errors
///
/// Returns an error if an existing file fails to load, the key or section
/// is rejected, or the file cannot be written.
pub fn run_set(global: &GlobalOpts, opts: &SetOpts, log: &Logger) -> Result<()> {
    let mut doc = open_or_empty(&opts.file, global, log)?;
    doc.set(&opts.section, &opts.key, opts.value.as_str())
        .with_context(|| format!("setting '{}'", opts.key))?;
    doc.save(&opts.file)?;
    log.info(&format!(
        "set {} in {}",
        qualified(&opts.section, &opts.key),
        opts.file.display()
    ));
    Ok(())
}

/// Remove one key and save the file.
///
/// # Errors
///
/// Returns an error if the file fails to load, the key is absent, or the
/// file cannot be written.
pub fn run_unset(global: &GlobalOpts, opts: &UnsetOpts, log: &Logger) -> Result<()> {
    let mut doc = super::load_document(&opts.file, global.policy())?;
    if doc.remove(&opts.section, &opts.key).is_none() {
        bail!(
            "{} not found in {}",
            qualified(&opts.section, &opts.key),
            opts.file.display()
        );
    }
    doc.save(&opts.file)?;
    log.info(&format!(
        "removed {} from {}",
        qualified(&opts.section, &opts.key),
        opts.file.display()
    ));
    Ok(())
}

fn open_or_empty(path: &Path, global: &GlobalOpts, log: &Logger) -> Result<Document> {
    let mut doc = Document::with_policy(global.policy());
    match doc.load(path) {
        Ok(()) => Ok(doc),
        Err(e) if e.kind() == ErrorKind::FileNotFound && !path.exists() => {
            log.debug(&format!("{} does not exist, starting empty", path.display()));
            Ok(doc)
        }
        Err(e) => Err(e).with_context(|| format!("loading {}", path.display())),
    }
}

/// `section.key`, or just `key` for the global section.
fn qualified(section: &str, key: &str) -> String {
    if section.is_empty() {
        key.to_string()
    } else {
        format!("{section}.{key}")
    }
}
