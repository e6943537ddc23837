//! Route configuration for the log API.

use std::sync::Arc;

use axum::routing::{Router, get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers::{get_log, get_stats, health_check, invalidate_cache, list_logs};
use crate::state::ApiState;

/// Create the log API router.
pub fn create_router(state: Arc<ApiState>) -> Router {
    let cors = build_cors_layer(state.config());

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Log listing with filters and pagination
        .route("/logs", get(list_logs))
        // Aggregate stats (static segment takes precedence over {id})
        .route("/logs/stats", get(get_stats))
        // Single record by content-addressed id
        .route("/logs/{id}", get(get_log))
        // Cache invalidation
        .route("/logs/cache/invalidate", post(invalidate_cache))
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Build the CORS layer based on configuration.
fn build_cors_layer(config: &crate::config::ApiConfig) -> CorsLayer {
    if config.cors_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
