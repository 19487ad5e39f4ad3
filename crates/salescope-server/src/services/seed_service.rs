//! One-shot seeding of the store from the product transaction feed

use salescope::Transaction;
use salescope_store::TransactionStore;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, info};

use crate::{
    error::{ApiError, Result},
    models::SeedReport,
};

/// A record as the feed serves it: a transaction plus the feed's own `id`
#[derive(Debug, Deserialize)]
struct FeedRecord {
    #[serde(default)]
    id: Option<serde_json::Value>,
    #[serde(flatten)]
    transaction: Transaction,
}

impl From<FeedRecord> for Transaction {
    fn from(record: FeedRecord) -> Self {
        let mut tx = record.transaction;
        tx.id = None;
        tx.source_id = record.id.and_then(|id| id.as_i64()).or(tx.source_id);
        tx
    }
}

/// Fetches the feed and upserts it by feed id
#[derive(Clone)]
pub struct SeedService {
    store: Arc<dyn TransactionStore>,
    http: reqwest::Client,
    feed_url: String,
}

impl SeedService {
    pub fn new(store: Arc<dyn TransactionStore>, http: reqwest::Client, feed_url: String) -> Self {
        Self {
            store,
            http,
            feed_url,
        }
    }

    pub async fn load(&self) -> Result<SeedReport> {
        let records = self.fetch().await?;
        let received = records.len();
        debug!(received, "Fetched seed feed");

        let summary = self
            .store
            .upsert_many(records)
            .await
            .map_err(ApiError::SeedInsert)?;

        info!(
            received,
            inserted = summary.inserted_ids.len(),
            skipped = summary.skipped,
            "Seeded transactions"
        );

        Ok(SeedReport {
            received,
            inserted: summary.inserted_ids.len(),
            skipped: summary.skipped,
            inserted_ids: summary.inserted_ids,
        })
    }

    async fn fetch(&self) -> Result<Vec<Transaction>> {
        let records: Vec<FeedRecord> = self
            .http
            .get(&self.feed_url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(ApiError::seed_fetch)?
            .json()
            .await
            .map_err(ApiError::seed_fetch)?;

        Ok(records.into_iter().map(Transaction::from).collect())
    }
}
