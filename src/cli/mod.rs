//! CLI module
//!
//! - serve: run the HTTP service
//! - submit: one-shot post of a source patient to a running service

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{load_config, run, run_command, serve, submit_first_active};
pub use errors::{CliError, CliResult};
