use axum::{extract::State, response::Json};
use serde_json::{Value, json};
use time::{OffsetDateTime, format_description::well_known::Rfc3339};
use tracing::warn;

use crate::{AppState, error::Result};

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Result<Json<Value>> {
    let store = match state.store.ping().await {
        Ok(()) => "connected",
        Err(e) => {
            warn!("Store ping failed: {}", e);
            "unreachable"
        }
    };

    Ok(Json(json!({
        "status": "healthy",
        "service": "salescope-server",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": OffsetDateTime::now_utc().format(&Rfc3339).ok(),
        "store": store
    })))
}
