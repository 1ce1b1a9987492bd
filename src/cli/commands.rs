//! CLI command implementations

use std::fs;
use std::path::Path;

use crate::http_server::{HttpServer, ServerConfig};
use crate::observability::{events, Logger};
use crate::submit::{self, ClientPayload, SubmitTarget};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Load configuration from file, or defaults when no path is given
pub fn load_config(path: Option<&Path>) -> CliResult<ServerConfig> {
    let config = match path {
        Some(path) => {
            let content = fs::read_to_string(path).map_err(|e| {
                CliError::config_error(format!("Failed to read {}: {}", path.display(), e))
            })?;
            serde_json::from_str(&content)
                .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?
        }
        None => ServerConfig::default(),
    };

    config.validate().map_err(CliError::config_error)?;
    Ok(config)
}

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, port } => serve(config.as_deref(), port),
        Command::Submit {
            source,
            url,
            token,
            config,
        } => submit_first_active(&source, url, token, config.as_deref()),
    }
}

/// Start the HTTP service and block until shutdown
pub fn serve(config_path: Option<&Path>, port: Option<u16>) -> CliResult<()> {
    let mut config = load_config(config_path)?;
    if let Some(port) = port {
        config.port = port;
        config.validate().map_err(CliError::config_error)?;
    }

    let server = HttpServer::with_config(config);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })
}

/// Post the first active patient from `source` to `url`
pub fn submit_first_active(
    source: &Path,
    url: String,
    token: Option<String>,
    config_path: Option<&Path>,
) -> CliResult<()> {
    let config = load_config(config_path)?;
    let target = SubmitTarget {
        url,
        auth_header: config.auth_header,
        auth_token: token.unwrap_or(config.auth_token),
    };

    let payload = submit::load_first_active(source)
        .and_then(|patient| ClientPayload::from_patient(&patient))
        .inspect_err(log_submit_failure)?;

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(submit::submit(&target, &payload))
        .inspect_err(log_submit_failure)?;

    Ok(())
}

fn log_submit_failure(e: &submit::SubmitError) {
    let detail = e.to_string();
    Logger::error(events::SUBMIT_FAILED, &[("detail", detail.as_str())]);
}
