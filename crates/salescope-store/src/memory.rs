//! In-memory transaction store for testing and development

use async_trait::async_trait;
use salescope::{PageWindow, Transaction, TransactionFilter};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{Result, TransactionStore, UpsertSummary};

/// Keeps records in insertion order behind an async lock
#[derive(Debug, Default, Clone)]
pub struct MemoryTransactionStore {
    records: Arc<RwLock<Vec<Transaction>>>,
}

impl MemoryTransactionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    /// Drop every record (useful for testing)
    pub async fn clear(&self) {
        self.records.write().await.clear();
    }

    fn assign_id(record: &mut Transaction) -> String {
        let id = Uuid::new_v4().simple().to_string();
        record.id = Some(id.clone());
        id
    }
}

#[async_trait]
impl TransactionStore for MemoryTransactionStore {
    async fn insert_many(&self, records: Vec<Transaction>) -> Result<Vec<String>> {
        let mut stored = self.records.write().await;
        let mut ids = Vec::with_capacity(records.len());
        for mut record in records {
            ids.push(Self::assign_id(&mut record));
            stored.push(record);
        }
        Ok(ids)
    }

    async fn upsert_many(&self, records: Vec<Transaction>) -> Result<UpsertSummary> {
        let mut stored = self.records.write().await;
        let mut summary = UpsertSummary::default();

        for mut record in records {
            let exists = record
                .source_id
                .is_some_and(|sid| stored.iter().any(|r| r.source_id == Some(sid)));

            if exists {
                summary.skipped += 1;
            } else {
                summary.inserted_ids.push(Self::assign_id(&mut record));
                stored.push(record);
            }
        }
        Ok(summary)
    }

    async fn find(
        &self,
        filter: &TransactionFilter,
        window: Option<PageWindow>,
    ) -> Result<Vec<Transaction>> {
        let stored = self.records.read().await;
        let matching = stored.iter().filter(|r| filter.matches(r)).cloned();
        Ok(match window {
            Some(w) => matching.skip(w.skip as usize).take(w.limit as usize).collect(),
            None => matching.collect(),
        })
    }

    async fn count(&self, filter: &TransactionFilter) -> Result<u64> {
        let stored = self.records.read().await;
        Ok(stored.iter().filter(|r| filter.matches(r)).count() as u64)
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}
