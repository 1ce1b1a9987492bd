//! client-registry entry point
//!
//! Parses the command line, runs the command, and exits non-zero on failure.
//! All logic lives in the library's `cli` module.

use client_registry::cli;
use client_registry::observability::Logger;

fn main() {
    if let Err(e) = cli::run() {
        let detail = e.to_string();
        Logger::fatal(e.code(), &[("detail", detail.as_str())]);
        std::process::exit(1);
    }
}
