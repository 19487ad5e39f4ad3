//! Monthly statistics over the transaction store

use salescope::{
    CategoryCount, CombinedStatistics, MonthlyTotals, PriceBucketCount, Transaction,
    TransactionFilter, category_breakdown, monthly_totals, price_histogram,
};
use salescope_store::TransactionStore;
use std::sync::Arc;
use time::Month;
use tracing::debug;

use crate::error::Result;

/// Computes the dashboard statistics for one calendar month (any year)
#[derive(Clone)]
pub struct StatisticsService {
    store: Arc<dyn TransactionStore>,
}

impl StatisticsService {
    pub fn new(store: Arc<dyn TransactionStore>) -> Self {
        Self { store }
    }

    /// Revenue of sold items plus the sold and unsold listings
    pub async fn totals(&self, month: Month) -> Result<MonthlyTotals> {
        debug!(%month, "Computing monthly totals");
        let sold = self
            .store
            .find(&TransactionFilter::for_month(month).sold(true), None)
            .await?;
        let unsold = self
            .store
            .find(&TransactionFilter::for_month(month).sold(false), None)
            .await?;
        Ok(monthly_totals(sold, unsold))
    }

    /// Counts per fixed price bucket
    pub async fn bar_chart(&self, month: Month) -> Result<Vec<PriceBucketCount>> {
        debug!(%month, "Computing price histogram");
        let items = self.month_items(month).await?;
        Ok(price_histogram(&items))
    }

    /// Counts per category
    pub async fn categories(&self, month: Month) -> Result<Vec<CategoryCount>> {
        debug!(%month, "Computing category breakdown");
        let items = self.month_items(month).await?;
        Ok(category_breakdown(&items))
    }

    /// All three statistics, computed concurrently. Any failure fails the
    /// whole result.
    pub async fn combined(&self, month: Month) -> Result<CombinedStatistics> {
        let (total_sales, bar_chart, pie_chart) = tokio::try_join!(
            self.totals(month),
            self.bar_chart(month),
            self.categories(month),
        )?;

        Ok(CombinedStatistics {
            total_sales,
            bar_chart,
            pie_chart,
        })
    }

    async fn month_items(&self, month: Month) -> Result<Vec<Transaction>> {
        Ok(self
            .store
            .find(&TransactionFilter::for_month(month), None)
            .await?)
    }
}
