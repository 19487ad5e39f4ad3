//! Error handling for the API server

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use salescope::SalescopeError;
use salescope_store::StoreError;
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] SalescopeError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Failed to fetch seed data: {0}")]
    SeedFetch(String),

    #[error("Failed to insert seed data: {0}")]
    SeedInsert(StoreError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            ApiError::Domain(SalescopeError::InvalidMonth { hint, .. }) => {
                (StatusCode::BAD_REQUEST, hint.to_string())
            }
            ApiError::Store(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An error occurred while reading transactions".to_string(),
            ),
            ApiError::SeedFetch(_) | ApiError::SeedInsert(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error fetching or saving data".to_string(),
            ),
            ApiError::Config(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Configuration error".to_string(),
            ),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        if status.is_server_error() {
            error!("Request failed: {}", self);
        }

        let body = Json(json!({
            "error": error_message,
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}

// Convenience functions for common errors
impl ApiError {
    pub fn seed_fetch(err: impl std::fmt::Display) -> Self {
        Self::SeedFetch(err.to_string())
    }
}
