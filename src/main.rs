//! campus CLI entry point
//!
//! Parses arguments, dispatches to the CLI module and exits non-zero on
//! failure. Configuration, logging and the runtime are set up by the
//! command being run.

use campus::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
