//! # HTTP Server Module
//!
//! Axum server exposing the students API.
//!
//! # Endpoints
//!
//! - `/` - Greeting page
//! - `/api-json`, `/api` - OpenAPI document and its UI
//! - `/api/health-check/*` - Health probes
//! - `/api/students/*` - Student CRUD

mod common_routes;
pub mod config;
pub mod docs;
pub mod errors;
pub mod routes;
pub mod server;
pub mod student_routes;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult};
pub use server::{AppState, HttpServer, SharedState};
