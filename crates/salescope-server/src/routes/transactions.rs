//! Transaction list route

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use salescope::{MonthFilter, TransactionQuery};
use tracing::warn;

use crate::{
    AppState,
    error::Result,
    models::{TransactionListQuery, TransactionPage},
};

pub fn router() -> Router<AppState> {
    Router::new().route("/transactions", get(list_transactions))
}

/// Search, month-filter and paginate transactions
async fn list_transactions(
    State(state): State<AppState>,
    Query(params): Query<TransactionListQuery>,
) -> Result<Json<TransactionPage>> {
    if let Err(e) = MonthFilter::parse(params.month.as_deref()) {
        warn!("Ignoring month filter: {}", e);
    }

    let query = TransactionQuery::from_params(
        params.search.as_deref(),
        params.month.as_deref(),
        params.page.as_deref(),
    );

    Ok(Json(state.transactions.list(&query).await?))
}
