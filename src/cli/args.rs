//! CLI argument definitions using clap
//!
//! Commands:
//! - client-registry serve [--config <path>] [--port <n>]
//! - client-registry submit --source <path> [--url <url>] [--token <secret>] [--config <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Client registry - upserts client identity records over HTTP
#[derive(Parser, Debug)]
#[command(name = "client-registry")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP service
    Serve {
        /// Path to a JSON configuration file; defaults apply when omitted
        #[arg(long)]
        config: Option<PathBuf>,

        /// Override the configured port
        #[arg(long)]
        port: Option<u16>,
    },

    /// Post the first active patient of a source list to a running service
    Submit {
        /// JSON array of source patients
        #[arg(long)]
        source: PathBuf,

        /// Endpoint to post to
        #[arg(long, default_value = "http://127.0.0.1:5000/client")]
        url: String,

        /// Override the configured shared secret
        #[arg(long)]
        token: Option<String>,

        /// Path to a JSON configuration file (auth header and secret)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
