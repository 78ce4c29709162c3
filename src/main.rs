//! GoPlay: scaffold throwaway playground projects and clean them up later.
//!
//! This is the main entry point for the `goplay` CLI. It parses arguments,
//! installs diagnostic logging, dispatches to the appropriate command
//! handler, and maps errors to exit codes.

mod cli;
mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod ledger;
pub mod marker;
pub mod process;

#[cfg(test)]
mod test_support;

use cli::Cli;
use std::process::ExitCode;
use tracing::level_filters::LevelFilter;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_tracing(cli.verbose);

    match commands::dispatch(cli.action()) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);
            tracing::debug!(error = ?err, "command failed");

            ExitCode::from(err.exit_code() as u8)
        }
    }
}

/// Send diagnostics to stderr; `-v` flags raise the level from WARN.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
