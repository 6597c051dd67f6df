//! Trim Capture One catalog backup directories

use retention::Variant;
use std::process::ExitCode;

fn main() -> ExitCode {
    cli_lib::main_for(Variant::CatalogTree)
}
