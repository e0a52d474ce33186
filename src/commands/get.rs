//! Command: print the value of one key.
use anyhow::Result;
use std::io::Write;

use crate::cli::{GetOpts, GlobalOpts};

/// Print the value of `opts.key`, or `opts.default` when it is absent.
///
/// # Errors
///
/// Returns an error if the file cannot be loaded or `out` cannot be written.
pub fn run(global: &GlobalOpts, opts: &GetOpts, out: &mut impl Write) -> Result<()> {
    let doc = super::load_document(&opts.file, global.policy())?;
    writeln!(out, "{}", doc.get(&opts.section, &opts.key, &opts.default))?;
    Ok(())
}
