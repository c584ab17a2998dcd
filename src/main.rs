//! Inventory CLI entry point
//!
//! Parses arguments, runs the chosen command, and exits non-zero with the
//! error on stderr if it fails. All logic lives in the `cli` module.

use inventory::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
