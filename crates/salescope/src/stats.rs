//! Monthly statistics over already-fetched transactions
//!
//! These are plain functions so the individual statistics endpoints and the
//! combined view compute exactly the same thing.

use crate::transaction::Transaction;
use serde::{Deserialize, Serialize};

/// A fixed price range of the bar chart.
///
/// The lowest bucket includes its floor, every other bucket excludes it, and
/// the top bucket is unbounded, so the buckets partition `[0, inf)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceBucket {
    pub label: &'static str,
    pub floor: f64,
    pub ceiling: Option<f64>,
}

impl PriceBucket {
    const fn new(label: &'static str, floor: f64, ceiling: Option<f64>) -> Self {
        Self {
            label,
            floor,
            ceiling,
        }
    }

    pub fn contains(&self, price: f64) -> bool {
        let above_floor = if self.floor == 0.0 {
            price >= 0.0
        } else {
            price > self.floor
        };
        above_floor && self.ceiling.is_none_or(|ceiling| price <= ceiling)
    }
}

pub const PRICE_BUCKETS: [PriceBucket; 10] = [
    PriceBucket::new("0-100", 0.0, Some(100.0)),
    PriceBucket::new("101-200", 100.0, Some(200.0)),
    PriceBucket::new("201-300", 200.0, Some(300.0)),
    PriceBucket::new("301-400", 300.0, Some(400.0)),
    PriceBucket::new("401-500", 400.0, Some(500.0)),
    PriceBucket::new("501-600", 500.0, Some(600.0)),
    PriceBucket::new("601-700", 600.0, Some(700.0)),
    PriceBucket::new("701-800", 700.0, Some(800.0)),
    PriceBucket::new("801-900", 800.0, Some(900.0)),
    PriceBucket::new("901-above", 900.0, None),
];

/// Bucket a price falls into. Negative, NaN and absent prices have none.
pub fn bucket_for(price: Option<f64>) -> Option<&'static PriceBucket> {
    let price = price?;
    PRICE_BUCKETS.iter().find(|bucket| bucket.contains(price))
}

/// One bar of the price histogram
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBucketCount {
    pub price_range: String,
    pub count: u64,
}

/// One slice of the category breakdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: u64,
}

/// Revenue and sold/unsold listings for a month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyTotals {
    pub total_sale_of_the_month: f64,
    pub number_of_sold_items: u64,
    pub sold_items: Vec<Transaction>,
    pub number_of_unsold_items: u64,
    pub unsold_items: Vec<Transaction>,
}

/// The three monthly statistics merged into one payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinedStatistics {
    pub total_sales: MonthlyTotals,
    pub bar_chart: Vec<PriceBucketCount>,
    pub pie_chart: Vec<CategoryCount>,
}

/// Sum the revenue of `sold` and report both listings with their sizes
pub fn monthly_totals(sold: Vec<Transaction>, unsold: Vec<Transaction>) -> MonthlyTotals {
    MonthlyTotals {
        total_sale_of_the_month: sold.iter().map(Transaction::revenue).sum(),
        number_of_sold_items: sold.len() as u64,
        sold_items: sold,
        number_of_unsold_items: unsold.len() as u64,
        unsold_items: unsold,
    }
}

/// Count transactions per fixed price bucket; always yields all ten buckets
pub fn price_histogram(items: &[Transaction]) -> Vec<PriceBucketCount> {
    let mut counts = [0u64; PRICE_BUCKETS.len()];
    for tx in items {
        if let Some(index) = tx
            .price
            .and_then(|price| PRICE_BUCKETS.iter().position(|b| b.contains(price)))
        {
            counts[index] += 1;
        }
    }

    PRICE_BUCKETS
        .iter()
        .zip(counts)
        .map(|(bucket, count)| PriceBucketCount {
            price_range: bucket.label.to_string(),
            count,
        })
        .collect()
}

/// Count transactions per category, in the order categories are first seen
pub fn category_breakdown(items: &[Transaction]) -> Vec<CategoryCount> {
    let mut breakdown: Vec<CategoryCount> = Vec::new();
    for tx in items {
        match breakdown.iter_mut().find(|c| c.category == tx.category) {
            Some(entry) => entry.count += 1,
            None => breakdown.push(CategoryCount {
                category: tx.category.clone(),
                count: 1,
            }),
        }
    }
    breakdown
}
