//! Router configuration for the dashboard and HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing,
//! request timeout), and creates the axum router ready for serving.

use std::time::Duration;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;
use crate::config::DEFAULT_REQUEST_TIMEOUT_SECS;
use crate::routes::{path, shrub};

/// Create the main application router with the default request timeout.
pub fn create_router(state: AppState) -> Router {
    create_router_with_timeout(state, Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
}

/// Create the main application router with all routes and middleware.
#[allow(deprecated)]
pub fn create_router_with_timeout(state: AppState, request_timeout: Duration) -> Router {
    // CORS configuration - the dashboard is served from the same origin, API consumers may not be
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        .route(shrub::SHRUB, get(handlers::get_shrub).post(handlers::post_shrub))
        .route(path::GET_PATH, get(handlers::get_path))
        // Background renders
        .route("/jobs", post(handlers::create_job))
        .route("/jobs/{job_id}", get(handlers::get_job_status))
        .route("/jobs/{job_id}/logs", get(handlers::stream_job_logs));

    Router::new()
        .route("/", get(handlers::dashboard))
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ParamLimits;

    #[test]
    fn test_router_creation() {
        let state = AppState::new(ParamLimits::default());
        let _router = create_router(state);
    }
}
