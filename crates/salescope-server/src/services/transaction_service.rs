//! Paginated transaction listing

use salescope::TransactionQuery;
use salescope_store::TransactionStore;
use std::sync::Arc;
use tracing::debug;

use crate::{error::Result, models::TransactionPage};

#[derive(Clone)]
pub struct TransactionService {
    store: Arc<dyn TransactionStore>,
}

impl TransactionService {
    pub fn new(store: Arc<dyn TransactionStore>) -> Self {
        Self { store }
    }

    /// Fetch one page of matching transactions and the total match count
    pub async fn list(&self, query: &TransactionQuery) -> Result<TransactionPage> {
        debug!("Listing transactions with query: {:?}", query);

        let filter = query.filter();
        let data = self.store.find(&filter, Some(query.window())).await?;
        let total_records = self.store.count(&filter).await?;

        Ok(TransactionPage {
            message: "Transactions fetched successfully".to_string(),
            data,
            pagination: query.pagination(total_records),
        })
    }
}
