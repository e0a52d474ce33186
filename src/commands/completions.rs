//! Command: generate shell completions.
use clap::CommandFactory as _;
use std::io::Write;

use crate::cli::{Cli, CompletionsOpts};

/// Write the completion script for the requested shell to `out`.
pub fn run(opts: &CompletionsOpts, out: &mut impl Write) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(opts.shell, &mut cmd, name, out);
}
