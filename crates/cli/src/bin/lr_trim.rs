//! Trim Lightroom catalog backup archives

use retention::Variant;
use std::process::ExitCode;

fn main() -> ExitCode {
    cli_lib::main_for(Variant::ZipArchive)
}
