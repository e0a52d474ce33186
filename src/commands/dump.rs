//! Command: print a file in normalized form.
use anyhow::Result;
use std::io::Write;

use crate::cli::{DumpOpts, GlobalOpts};

/// Print the normalized INI text of a file, or its JSON form with `--json`.
///
/// # Errors
///
/// Returns an error if the file cannot be loaded or `out` cannot be written.
pub fn run(global: &GlobalOpts, opts: &DumpOpts, out: &mut impl Write) -> Result<()> {
    let doc = super::load_document(&opts.file, global.policy())?;
    if opts.json {
        serde_json::to_writer_pretty(&mut *out, &doc)?;
        writeln!(out)?;
    } else {
        doc.write_to(out)?;
    }
    Ok(())
}
