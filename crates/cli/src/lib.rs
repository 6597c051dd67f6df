//! Backup trimming CLI
//!
//! Shared front end for `capture-one-trim` and `lr-trim`.

pub mod args;
pub mod report;
pub mod trim;
pub mod util;

use chrono::Local;
use retention::{LocalFs, Variant};
use std::io;
use std::process::ExitCode;

/// Entry point for both binaries
///
/// Usage errors, guard failures and empty layouts exit with 1. Everything
/// else, including failed removals, exits with 0.
pub fn main_for(variant: Variant) -> ExitCode {
    let args = match args::parse_from(variant, std::env::args_os()) {
        Ok(args) => args,
        Err(err) => {
            // --help and --version
            if !err.use_stderr() {
                err.exit();
            }
            let _ = err.print();
            return ExitCode::from(1);
        }
    };

    // Logs go to stderr; stdout carries the report
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match trim::run(
        variant,
        &args,
        &mut LocalFs,
        Local::now().naive_local(),
        &mut out,
    ) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}: {:#}", variant.tool_name(), err);
            ExitCode::from(1)
        }
    }
}
