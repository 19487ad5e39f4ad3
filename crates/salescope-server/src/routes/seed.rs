//! Seed loader route

use axum::{Json, Router, extract::State, routing::post};
use tracing::info;

use crate::{AppState, error::Result, models::SeedResponse};

pub fn router() -> Router<AppState> {
    Router::new().route("/enterData", post(enter_data))
}

/// Fetch the product feed and store it
async fn enter_data(State(state): State<AppState>) -> Result<Json<SeedResponse>> {
    info!("Seeding transactions from {}", state.config.seed_url);

    let result = state.seed.load().await?;

    Ok(Json(SeedResponse {
        message: "Data successfully saved to the database".to_string(),
        result,
    }))
}
