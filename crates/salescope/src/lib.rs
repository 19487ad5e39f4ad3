//! Salescope is the domain core of a small sale-transaction dashboard:
//! the transaction record, month resolution, the list query builder and
//! the monthly statistics computed over already-fetched records.

pub mod error;
pub mod month;
pub mod query;
pub mod stats;
pub mod transaction;

// Re-export core types
pub use error::{Result, SalescopeError};
pub use month::{MonthFilter, parse_month};
pub use query::{PER_PAGE, PageWindow, Pagination, SearchTerm, TransactionFilter, TransactionQuery};
pub use stats::{
    CategoryCount, CombinedStatistics, MonthlyTotals, PRICE_BUCKETS, PriceBucket, PriceBucketCount,
    bucket_for, category_breakdown, monthly_totals, price_histogram,
};
pub use transaction::Transaction;

/// Get the library version
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
