//! # HTTP Server
//!
//! Combines the client and health routers behind one CORS layer and runs
//! them on a Tokio listener.

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::client::{ClientService, Clock, SystemClock};
use crate::observability::{events, Logger};
use crate::store::{ClientStore, JsonFileStore};

use super::client_routes::{client_routes, ClientState};
use super::config::ServerConfig;
use super::health_routes::health_routes;

/// HTTP server for the client registry
pub struct HttpServer {
    config: ServerConfig,
    router: Router,
}

impl HttpServer {
    /// Server backed by the configured JSON file and the system clock
    pub fn with_config(config: ServerConfig) -> Self {
        let store = JsonFileStore::new(config.data_file.clone());
        Self::with_parts(config, store, SystemClock)
    }

    /// Server over an arbitrary store and clock
    pub fn with_parts<S, C>(config: ServerConfig, store: S, clock: C) -> Self
    where
        S: ClientStore + 'static,
        C: Clock + 'static,
    {
        let state = Arc::new(ClientState::new(
            ClientService::new(store, clock),
            config.auth_header.clone(),
            config.auth_token.clone(),
        ));
        let router = Self::build_router(&config, state);
        Self { config, router }
    }

    fn build_router<S, C>(config: &ServerConfig, state: Arc<ClientState<S, C>>) -> Router
    where
        S: ClientStore + 'static,
        C: Clock + 'static,
    {
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .merge(health_routes())
            .merge(client_routes(state))
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until Ctrl-C
    pub async fn start(self) -> Result<(), std::io::Error> {
        let listener = TcpListener::bind(self.config.socket_addr()).await?;
        let addr = listener.local_addr()?.to_string();
        let data_file = self.config.data_file.display().to_string();

        Logger::info(
            events::SERVER_STARTED,
            &[("addr", addr.as_str()), ("data_file", data_file.as_str())],
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async {
                let _ = tokio::signal::ctrl_c().await;
            })
            .await
    }
}
