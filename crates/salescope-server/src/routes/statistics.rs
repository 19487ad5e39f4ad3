//! Monthly statistics routes

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use salescope::{
    CategoryCount, CombinedStatistics, MonthlyTotals, PriceBucketCount, parse_month,
};
use time::Month;
use tracing::debug;

use crate::{
    AppState,
    error::Result,
    models::{ApiResponse, MonthQuery},
};

/// Create statistics routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/statistics", get(get_totals))
        .route("/statistics/bar-chart", get(get_bar_chart))
        .route("/statistics/bar-chart/categories", get(get_categories))
        .route("/statistics/combined", get(get_combined))
}

/// The month is mandatory here; anything unresolvable is a client error
fn required_month(query: &MonthQuery) -> Result<Month> {
    Ok(parse_month(query.month.as_deref().unwrap_or_default())?)
}

/// Revenue and sold/unsold listings for a month
async fn get_totals(
    State(state): State<AppState>,
    Query(query): Query<MonthQuery>,
) -> Result<Json<ApiResponse<MonthlyTotals>>> {
    let month = required_month(&query)?;
    debug!("Getting sale totals for {}", month);

    Ok(Json(ApiResponse::new(state.statistics.totals(month).await?)))
}

/// Price histogram for a month
async fn get_bar_chart(
    State(state): State<AppState>,
    Query(query): Query<MonthQuery>,
) -> Result<Json<ApiResponse<Vec<PriceBucketCount>>>> {
    let month = required_month(&query)?;
    debug!("Getting price histogram for {}", month);

    Ok(Json(ApiResponse::new(state.statistics.bar_chart(month).await?)))
}

/// Category breakdown for a month
async fn get_categories(
    State(state): State<AppState>,
    Query(query): Query<MonthQuery>,
) -> Result<Json<ApiResponse<Vec<CategoryCount>>>> {
    let month = required_month(&query)?;
    debug!("Getting category breakdown for {}", month);

    Ok(Json(ApiResponse::new(state.statistics.categories(month).await?)))
}

/// All three statistics in one payload
async fn get_combined(
    State(state): State<AppState>,
    Query(query): Query<MonthQuery>,
) -> Result<Json<ApiResponse<CombinedStatistics>>> {
    let month = required_month(&query)?;
    debug!("Getting combined statistics for {}", month);

    Ok(Json(ApiResponse::new(state.statistics.combined(month).await?)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_month() {
        let query = MonthQuery {
            month: Some("March".to_string()),
        };
        assert_eq!(required_month(&query).unwrap(), Month::March);

        assert!(required_month(&MonthQuery::default()).is_err());
        assert!(
            required_month(&MonthQuery {
                month: Some("All Months".to_string())
            })
            .is_err()
        );
    }
}
