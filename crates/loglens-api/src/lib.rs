//! # loglens-api
//!
//! Read-only HTTP API over log entries parsed from flat files, built on the
//! axum HTTP framework.
//!
//! The heavy lifting lives in `loglens-core`: this crate binds the store and
//! query engine to routes, translates core errors into status codes, and
//! owns server configuration and lifecycle.
//!
//! ## API Endpoints
//!
//! | Endpoint | Method | Description |
//! |----------|--------|-------------|
//! | `/health` | GET | Liveness check with uptime |
//! | `/logs` | GET | List logs with optional filters and pagination |
//! | `/logs/stats` | GET | Aggregate counts per level and component |
//! | `/logs/{id}` | GET | Fetch one record by content-addressed id |
//! | `/logs/cache/invalidate` | POST | Drop the cache; next read rescans |
//!
//! `GET /logs` accepts `level`, `component`, `start_time`, `end_time`
//! filters, and either `skip`/`limit` offset pagination (bare array
//! response) or `page`/`size` pagination (envelope response with totals).
//!
//! ## Example
//!
//! ```rust,no_run
//! use loglens_api::{ApiConfig, ApiServer};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ApiConfig::default().with_log_dir("/var/log/app");
//!     let server = ApiServer::new(config);
//!     // server.serve("0.0.0.0:8080".parse().unwrap()).await.unwrap();
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod state;

// Re-export main types
pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use server::ApiServer;
pub use state::ApiState;
