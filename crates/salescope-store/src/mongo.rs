//! MongoDB implementation of TransactionStore

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    Client, Collection,
    bson::{self, Bson, DateTime, Document, doc, oid::ObjectId},
    options::ClientOptions,
};
use salescope::{PageWindow, Transaction, TransactionFilter};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use time::OffsetDateTime;
use tracing::{debug, info};

use crate::{Result, StoreError, TransactionStore, UpsertSummary};

/// MongoDB-backed transaction collection
#[derive(Clone)]
pub struct MongoTransactionStore {
    client: Client,
    database: String,
    collection: Collection<TransactionDocument>,
}

impl std::fmt::Debug for MongoTransactionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MongoTransactionStore")
            .field("database", &self.database)
            .field("collection", &self.collection.name())
            .finish()
    }
}

/// Document layout of a stored transaction
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TransactionDocument {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    source_id: Option<i64>,
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    price: Option<Bson>,
    #[serde(default)]
    category: String,
    #[serde(default)]
    sold: bool,
    date_of_sale: DateTime,
    #[serde(default)]
    image: String,
}

impl From<Transaction> for TransactionDocument {
    fn from(tx: Transaction) -> Self {
        Self {
            id: tx.id.as_deref().and_then(|id| ObjectId::parse_str(id).ok()),
            source_id: tx.source_id,
            title: tx.title,
            description: tx.description,
            price: tx.price.map(Bson::Double),
            category: tx.category,
            sold: tx.sold,
            date_of_sale: DateTime::from_millis(
                (tx.date_of_sale.unix_timestamp_nanos() / 1_000_000) as i64,
            ),
            image: tx.image,
        }
    }
}

impl TryFrom<TransactionDocument> for Transaction {
    type Error = StoreError;

    fn try_from(doc: TransactionDocument) -> std::result::Result<Self, Self::Error> {
        let date_of_sale = OffsetDateTime::from_unix_timestamp_nanos(
            doc.date_of_sale.timestamp_millis() as i128 * 1_000_000,
        )
        .map_err(|e| StoreError::InvalidRecord(format!("Invalid dateOfSale: {}", e)))?;

        // Numbers of any BSON width count as a price, anything else does not
        let price = match doc.price {
            Some(Bson::Double(p)) if p.is_finite() => Some(p),
            Some(Bson::Int32(p)) => Some(f64::from(p)),
            Some(Bson::Int64(p)) => Some(p as f64),
            _ => None,
        };

        Ok(Self {
            id: doc.id.map(|oid| oid.to_hex()),
            source_id: doc.source_id,
            title: doc.title,
            description: doc.description,
            price,
            category: doc.category,
            sold: doc.sold,
            date_of_sale,
            image: doc.image,
        })
    }
}

impl MongoTransactionStore {
    /// Wrap an already configured client
    pub fn new(client: Client, database: &str, collection: &str) -> Self {
        let collection = client.database(database).collection(collection);
        Self {
            client,
            database: database.to_string(),
            collection,
        }
    }

    /// Connect and verify the server answers within `connect_timeout`
    pub async fn connect(
        uri: &str,
        database: &str,
        collection: &str,
        connect_timeout: Duration,
    ) -> Result<Self> {
        let mut options = ClientOptions::parse(uri)
            .await
            .map_err(|e| StoreError::Connection(format!("Invalid connection string: {}", e)))?;
        options.server_selection_timeout = Some(connect_timeout);
        options.app_name = Some("salescope".to_string());

        let client = Client::with_options(options)
            .map_err(|e| StoreError::Connection(format!("Failed to create client: {}", e)))?;

        let store = Self::new(client, database, collection);
        store.ping().await?;
        info!(database, collection, "Connected to MongoDB");
        Ok(store)
    }
}

/// Escape regex metacharacters so a search term matches literally
fn escape_regex(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if "\\.+*?()|[]{}^$".contains(c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Translate a backend-neutral filter into a MongoDB query document
fn filter_document(filter: &TransactionFilter) -> Document {
    let mut query = Document::new();

    if let Some(sold) = filter.sold {
        query.insert("sold", sold);
    }

    if let Some(term) = &filter.search {
        let pattern = escape_regex(term.text());
        let mut arms = vec![
            doc! { "title": { "$regex": pattern.as_str(), "$options": "i" } },
            doc! { "description": { "$regex": pattern.as_str(), "$options": "i" } },
        ];
        if let Some(price) = term.price() {
            arms.push(doc! { "price": price });
        }
        query.insert("$or", arms);
    }

    if let Some(month) = filter.month.month() {
        let ordinal = i32::from(u8::from(month));
        query.insert("$expr", doc! { "$eq": [ { "$month": "$dateOfSale" }, ordinal ] });
    }

    query
}

fn bson_id(id: &Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        other => other.to_string(),
    }
}

#[async_trait]
impl TransactionStore for MongoTransactionStore {
    async fn insert_many(&self, records: Vec<Transaction>) -> Result<Vec<String>> {
        if records.is_empty() {
            return Ok(Vec::new());
        }

        let docs: Vec<TransactionDocument> = records
            .into_iter()
            .map(|mut tx| {
                tx.id = None;
                TransactionDocument::from(tx)
            })
            .collect();

        let result = self.collection.insert_many(docs).await?;
        let mut inserted: Vec<(usize, Bson)> = result.inserted_ids.into_iter().collect();
        inserted.sort_by_key(|(index, _)| *index);

        debug!(count = inserted.len(), "Inserted transactions");
        Ok(inserted.iter().map(|(_, id)| bson_id(id)).collect())
    }

    async fn upsert_many(&self, records: Vec<Transaction>) -> Result<UpsertSummary> {
        let (keyed, unkeyed): (Vec<_>, Vec<_>) =
            records.into_iter().partition(|tx| tx.source_id.is_some());

        let mut summary = UpsertSummary::default();

        for mut tx in keyed {
            let Some(source_id) = tx.source_id else {
                continue;
            };
            tx.id = None;
            let fields = bson::to_document(&TransactionDocument::from(tx))
                .map_err(|e| StoreError::Serialization(e.to_string()))?;

            let result = self
                .collection
                .update_one(
                    doc! { "sourceId": source_id },
                    doc! { "$setOnInsert": fields },
                )
                .upsert(true)
                .await?;

            match result.upserted_id {
                Some(id) => summary.inserted_ids.push(bson_id(&id)),
                None => summary.skipped += result.matched_count,
            }
        }

        summary.inserted_ids.extend(self.insert_many(unkeyed).await?);
        debug!(
            inserted = summary.inserted_ids.len(),
            skipped = summary.skipped,
            "Upserted transactions"
        );
        Ok(summary)
    }

    async fn find(
        &self,
        filter: &TransactionFilter,
        window: Option<PageWindow>,
    ) -> Result<Vec<Transaction>> {
        let mut action = self.collection.find(filter_document(filter));
        if let Some(window) = window {
            action = action.skip(window.skip).limit(window.limit as i64);
        }

        let docs: Vec<TransactionDocument> = action.await?.try_collect().await?;
        docs.into_iter().map(Transaction::try_from).collect()
    }

    async fn count(&self, filter: &TransactionFilter) -> Result<u64> {
        Ok(self
            .collection
            .count_documents(filter_document(filter))
            .await?)
    }

    async fn ping(&self) -> Result<()> {
        self.client
            .database(&self.database)
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;
        Ok(())
    }
}
