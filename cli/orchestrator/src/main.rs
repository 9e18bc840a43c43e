//! Quill command-line entry point.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

use clap::Parser;
use quill_cli::{error_chain, execute, Cli};

fn main() {
    let cli = Cli::parse();
    if let Err(e) = execute(cli) {
        eprintln!("{}", error_chain(&e));
        std::process::exit(1);
    }
}
