//! HTTP Server Configuration
//!
//! Bind address, storage location, shared-secret auth and CORS settings.
//! Every field has a default, so an empty JSON object is a valid config.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to (default: "127.0.0.1")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 5000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// JSON file holding the client records (default: "api_clients.json")
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Header carrying the shared secret (default: "Authorization")
    #[serde(default = "default_auth_header")]
    pub auth_header: String,

    /// Shared secret the header must equal exactly (default: "Token")
    #[serde(default = "default_auth_token")]
    pub auth_token: String,

    /// CORS allowed origins; empty means any origin
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_data_file() -> PathBuf {
    PathBuf::from("api_clients.json")
}

fn default_auth_header() -> String {
    "Authorization".to_string()
}

fn default_auth_token() -> String {
    "Token".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            data_file: default_data_file(),
            auth_header: default_auth_header(),
            auth_token: default_auth_token(),
            cors_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Reject settings the server cannot run with
    pub fn validate(&self) -> Result<(), String> {
        if self.port == 0 {
            return Err("port must be > 0".to_string());
        }
        if self.auth_header.trim().is_empty() {
            return Err("auth_header must not be empty".to_string());
        }
        if axum::http::HeaderName::from_bytes(self.auth_header.as_bytes()).is_err() {
            return Err(format!("auth_header '{}' is not a valid header name", self.auth_header));
        }
        if self.auth_token.is_empty() {
            return Err("auth_token must not be empty".to_string());
        }
        if self.data_file.as_os_str().is_empty() {
            return Err("data_file must not be empty".to_string());
        }
        Ok(())
    }
}
