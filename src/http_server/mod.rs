//! # HTTP Server Module
//!
//! # Endpoints
//!
//! - `GET /health` - Liveness check
//! - `POST /client` - Create a client or update its status

pub mod client_routes;
pub mod config;
pub mod errors;
pub mod health_routes;
pub mod response;
pub mod server;

pub use client_routes::{client_routes, ClientState};
pub use config::ServerConfig;
pub use errors::{ApiError, ApiResult};
pub use response::{ErrorEnvelope, SuccessEnvelope, SUCCESS_MESSAGE};
pub use server::HttpServer;
