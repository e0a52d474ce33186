//! Command-line argument definitions for the `ini` binary.
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::ini::CommentPolicy;

/// Top-level CLI entry point for the INI configuration tool.
#[derive(Parser, Debug)]
#[command(
    name = "ini",
    about = "Read, edit, validate, and format INI configuration files",
    version
)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Options shared across all subcommands.
    #[command(flatten)]
    pub global: GlobalOpts,
}

/// Options shared across all subcommands.
#[derive(Args, Debug, Clone)]
pub struct GlobalOpts {
    /// Treat `;` and `#` as comments even when not preceded by whitespace
    #[arg(long, global = true)]
    pub relaxed_comments: bool,
}

impl GlobalOpts {
    /// Comment policy selected by the flags.
    #[must_use]
    pub const fn policy(&self) -> CommentPolicy {
        if self.relaxed_comments {
            CommentPolicy::Relaxed
        } else {
            CommentPolicy::Strict
        }
    }
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the value of a key
    Get(GetOpts),
    /// Set a key, creating the file if needed
    Set(SetOpts),
    /// Remove a key
    Unset(UnsetOpts),
    /// Validate one or more files
    Check(CheckOpts),
    /// Print a file in normalized form
    Dump(DumpOpts),
    /// Rewrite a file in normalized form
    Fmt(FmtOpts),
    /// Generate shell completions
    Completions(CompletionsOpts),
    /// Print version information
    Version,
}

/// Options for the `get` subcommand.
#[derive(Args, Debug, Clone)]
pub struct GetOpts {
    /// File to read
    pub file: PathBuf,
    /// Key to look up
    pub key: String,
    /// Section holding the key (global section when omitted)
    #[arg(short, long, default_value = "")]
    pub section: String,
    /// Value printed when the key is absent
    #[arg(long, default_value = "")]
    pub default: String,
}

/// Options for the `set` subcommand.
#[derive(Args, Debug, Clone)]
pub struct SetOpts {
    /// File to update
    pub file: PathBuf,
    /// Key to set
    pub key: String,
    /// New value
    pub value: String,
    /// Section holding the key (global section when omitted)
    #[arg(short, long, default_value = "")]
    pub section: String,
}

/// Options for the `unset` subcommand.
#[derive(Args, Debug, Clone)]
pub struct UnsetOpts {
    /// File to update
    pub file: PathBuf,
    /// Key to remove
    pub key: String,
    /// Section holding the key (global section when omitted)
    #[arg(short, long, default_value = "")]
    pub section: String,
}

/// Options for the `check` subcommand.
#[derive(Args, Debug, Clone)]
pub struct CheckOpts {
    /// Files to validate
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

/// Options for the `dump` subcommand.
#[derive(Args, Debug, Clone)]
pub struct DumpOpts {
    /// File to print
    pub file: PathBuf,
    /// Print as JSON instead of INI
    #[arg(long)]
    pub json: bool,
}

/// Options for the `fmt` subcommand.
#[derive(Args, Debug, Clone)]
pub struct FmtOpts {
    /// Files to format
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
    /// Report files that are not normalized instead of rewriting them
    #[arg(long)]
    pub check: bool,
}

/// Options for the `completions` subcommand.
#[derive(Args, Debug, Clone)]
pub struct CompletionsOpts {
    /// Target shell
    pub shell: Shell,
}
