//! # HTTP Server
//!
//! Builds the router from the route table and serves it.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::HeaderValue;
use axum::Router;
use serde_json::Value;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use super::config::HttpServerConfig;
use super::docs::openapi_document;
use super::routes::{build_router, route_table};
use crate::store::StudentStore;

/// State shared by every handler
pub struct AppState {
    pub store: Arc<dyn StudentStore>,
    pub api_doc: Arc<Value>,
}

pub type SharedState = Arc<AppState>;

/// HTTP server for the students API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server over `store` with custom configuration
    pub fn with_config(config: HttpServerConfig, store: Arc<dyn StudentStore>) -> Self {
        let router = Self::build_router(&config, store);
        Self { config, router }
    }

    fn build_router(config: &HttpServerConfig, store: Arc<dyn StudentStore>) -> Router {
        let table = route_table();
        let state = Arc::new(AppState {
            store,
            api_doc: Arc::new(openapi_document(&table)),
        });

        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(allowed_origins(&config.cors_origins)))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        build_router(table)
            .with_state(state)
            .layer(TraceLayer::new_for_http())
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

    /// Serve until Ctrl-C
    pub async fn start(self) -> io::Result<()> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|err| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid socket address {}: {err}", self.config.socket_addr()),
            )
        })?;

        let listener = TcpListener::bind(addr).await?;
        info!(%addr, "students API listening");
        info!("API docs at http://{}/api", addr);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("server stopped");
        Ok(())
    }
}

/// Parse configured CORS origins, skipping (and reporting) invalid ones
fn allowed_origins(origins: &[String]) -> Vec<HeaderValue> {
    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(origin = %origin, error = %err, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if parsed.is_empty() {
        warn!("no valid CORS origin configured, cross-origin requests will be refused");
    }
    parsed
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "cannot listen for Ctrl-C, running until killed");
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}
