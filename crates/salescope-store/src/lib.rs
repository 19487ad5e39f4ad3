//! # Salescope Store
//!
//! Record store adapters for sale transactions. The [`TransactionStore`]
//! trait is the only thing the server talks to; backends:
//!
//! - [`MemoryTransactionStore`] keeps records in process, for tests and
//!   local development
//! - `MongoTransactionStore` (feature `mongodb`, on by default) delegates
//!   filtering, paging and counting to a MongoDB collection
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use salescope::{Transaction, TransactionFilter};
//! use salescope_store::{MemoryTransactionStore, TransactionStore};
//! use time::macros::datetime;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = MemoryTransactionStore::new();
//! store
//!     .insert_many(vec![Transaction::new("Backpack", datetime!(2022-03-01 0:00 UTC))])
//!     .await?;
//!
//! let march = TransactionFilter::for_month(time::Month::March);
//! assert_eq!(store.count(&march).await?, 1);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod memory;

#[cfg(feature = "mongodb")]
pub mod mongo;

pub use error::{Result, StoreError};
pub use memory::MemoryTransactionStore;

#[cfg(feature = "mongodb")]
pub use mongo::MongoTransactionStore;

use async_trait::async_trait;
use salescope::{PageWindow, Transaction, TransactionFilter};
use serde::Serialize;

/// Outcome of an upsert keyed on the feed's `source_id`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertSummary {
    /// Store ids of records that did not exist before
    pub inserted_ids: Vec<String>,
    /// Number of records left untouched because their `source_id` was
    /// already stored
    pub skipped: u64,
}

/// Typed access to the transaction collection
#[async_trait]
pub trait TransactionStore: Send + Sync {
    /// Insert all records unconditionally, returning the assigned ids in
    /// input order
    async fn insert_many(&self, records: Vec<Transaction>) -> Result<Vec<String>>;

    /// Insert records whose `source_id` is not stored yet. Stored records are
    /// never modified; records without a `source_id` are always inserted.
    async fn upsert_many(&self, records: Vec<Transaction>) -> Result<UpsertSummary>;

    /// Records matching `filter` in store order, optionally windowed
    async fn find(
        &self,
        filter: &TransactionFilter,
        window: Option<PageWindow>,
    ) -> Result<Vec<Transaction>>;

    /// Number of records matching `filter`, ignoring any window
    async fn count(&self, filter: &TransactionFilter) -> Result<u64>;

    /// Check the backend is reachable
    async fn ping(&self) -> Result<()>;
}
