//! Entry point for the `diffcue` CLI.
//!
//! Parses arguments, dispatches to the command handler, and maps errors to
//! exit codes.

use diffcue::cli::Cli;
use diffcue::{commands, exit_codes};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match commands::dispatch(cli.command) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
