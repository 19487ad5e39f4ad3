//! Salescope HTTP API Server
//!
//! Serves the paginated transaction list, the monthly statistics endpoints
//! and the one-shot seed loader for the salescope dashboard.

use axum::{Router, http::HeaderValue, routing::get};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;

pub use config::{ServerConfig, StoreBackend};
pub use error::{ApiError, Result};
pub use state::AppState;

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config.cors_origins);

    Router::new()
        // Health check
        .route("/health", get(routes::health::health_check))
        // API routes
        .merge(routes::seed::router())
        .merge(routes::transactions::router())
        .merge(routes::statistics::router())
        // Middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

/// Build the CORS layer from configured origins; `*` allows any origin
fn build_cors_layer(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|o| o == "*") {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}
