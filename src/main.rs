//! `ini` command-line entry point.
use anyhow::Result;
use clap::Parser;

use ini_config::cli::{Cli, Command};
use ini_config::commands;
use ini_config::logging::{self, Logger};

fn main() -> Result<()> {
    let _ = enable_ansi_support::enable_ansi_support();
    let args = Cli::parse();
    logging::init_subscriber(args.verbose);
    let log = Logger::new();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match args.command {
        Command::Get(opts) => commands::get::run(&args.global, &opts, &mut out),
        Command::Set(opts) => commands::edit::run_set(&args.global, &opts, &log),
        Command::Unset(opts) => commands::edit::run_unset(&args.global, &opts, &log),
        Command::Check(opts) => commands::check::run(&args.global, &opts, &log),
        Command::Dump(opts) => commands::dump::run(&args.global, &opts, &mut out),
        Command::Fmt(opts) => commands::fmt::run(&args.global, &opts, &log),
        Command::Completions(opts) => {
            commands::completions::run(&opts, &mut out);
            Ok(())
        }
        Command::Version => Ok(commands::version::run(&mut out)?),
    }
}
