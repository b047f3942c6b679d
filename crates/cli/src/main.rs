// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! gt: run test suites and summarize their results across environments

mod color;
mod commands;
mod exit_error;
mod logging;
mod output;

use std::io::Write;
use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};

use crate::commands::{run::RunArgs, summarize::SummarizeArgs};
use crate::exit_error::ExitError;
use crate::logging::Logging;

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GT_BUILD_GIT_HASH"), ")");

#[derive(Parser)]
#[command(
    name = "gt",
    version = VERSION,
    about = "Run test suites and summarize results across environments",
    styles = color::styles()
)]
struct Cli {
    /// Append diagnostic logs to PATH instead of stderr
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the selected suites and report the outcome
    Run(RunArgs),
    /// Aggregate saved run reports into summary artifacts
    Summarize(SummarizeArgs),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let Some(command) = cli.command else {
        let styled = color::enabled(color::Stream::Stdout);
        let code = print_help(&mut std::io::stdout().lock(), styled);
        if code != 0 {
            std::process::exit(code);
        }
        return;
    };

    let logging = match Logging::start(cli.log_file.as_deref()) {
        Ok(logging) => logging,
        Err(e) => {
            eprintln!("error: {e:#}");
            std::process::exit(1);
        }
    };

    let result = match command {
        Commands::Run(args) => commands::run::handle(args).await,
        Commands::Summarize(args) => commands::summarize::handle(args),
    };
    logging.stop();

    if let Err(e) = result {
        std::process::exit(exit_code(&e));
    }
}

/// Write top-level help to `out`; a failed write is reported and exits 1.
fn print_help(out: &mut impl Write, styled: bool) -> i32 {
    let help = Cli::command().render_help();
    let text = if styled { help.ansi().to_string() } else { help.to_string() };
    match out.write_all(text.as_bytes()).and_then(|()| out.flush()) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("error: failed to print help: {e}");
            exit_error::EXIT_FAILURE
        }
    }
}

/// Print `err` and map it to a process exit code.
fn exit_code(err: &anyhow::Error) -> i32 {
    if let Some(exit) = err.downcast_ref::<ExitError>() {
        if !exit.message.is_empty() {
            eprintln!("{}", exit.message);
        }
        return exit.code;
    }
    eprintln!("error: {err:#}");
    exit_error::EXIT_FAILURE
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
