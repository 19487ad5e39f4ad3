//! Common test utilities for salescope-server integration tests.

#![allow(dead_code)] // Some utilities are used by different test files

use std::sync::Arc;

use axum_test::TestServer;
use async_trait::async_trait;
use salescope::{PageWindow, Transaction, TransactionFilter};
use salescope_server::{AppState, ServerConfig, create_router};
use salescope_store::{MemoryTransactionStore, StoreError, TransactionStore, UpsertSummary};
use time::macros::datetime;

/// Test harness wrapping a server over an in-memory store.
pub struct TestHarness {
    pub server: TestServer,
    pub store: MemoryTransactionStore,
}

impl TestHarness {
    /// Create a harness with an empty store.
    pub fn new() -> Self {
        Self::with_config(ServerConfig::default())
    }

    pub fn with_config(config: ServerConfig) -> Self {
        let store = MemoryTransactionStore::new();
        let state = AppState::new(Arc::new(store.clone()), config);
        let server = TestServer::new(create_router(state)).expect("Failed to create test server");
        Self { server, store }
    }

    /// Create a harness preloaded with [`sample_transactions`].
    pub async fn seeded() -> Self {
        let harness = Self::new();
        harness
            .store
            .insert_many(sample_transactions())
            .await
            .expect("Failed to seed store");
        harness
    }
}

/// Store whose every call fails as if the database were down.
pub struct UnreachableStore;

fn refused<T>() -> salescope_store::Result<T> {
    Err(StoreError::Connection("connection refused".to_string()))
}

#[async_trait]
impl TransactionStore for UnreachableStore {
    async fn insert_many(&self, _: Vec<Transaction>) -> salescope_store::Result<Vec<String>> {
        refused()
    }

    async fn upsert_many(&self, _: Vec<Transaction>) -> salescope_store::Result<UpsertSummary> {
        refused()
    }

    async fn find(
        &self,
        _: &TransactionFilter,
        _: Option<PageWindow>,
    ) -> salescope_store::Result<Vec<Transaction>> {
        refused()
    }

    async fn count(&self, _: &TransactionFilter) -> salescope_store::Result<u64> {
        refused()
    }

    async fn ping(&self) -> salescope_store::Result<()> {
        refused()
    }
}

/// Server over a store that is down.
pub fn unreachable_server() -> TestServer {
    let state = AppState::new(Arc::new(UnreachableStore), ServerConfig::default());
    TestServer::new(create_router(state)).expect("Failed to create test server")
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// Four March items priced {50, 150, 150, 999} across two years, plus a
/// couple of items in other months.
pub fn sample_transactions() -> Vec<Transaction> {
    vec![
        Transaction::new("Mens Casual Slim Fit Shirt", datetime!(2021-03-02 10:00 UTC))
            .with_description("The color could be slightly different")
            .with_price(50.0)
            .with_category("men's clothing")
            .with_sold(true)
            .with_source_id(1),
        Transaction::new("Gold Plated Ring", datetime!(2022-03-20 10:00 UTC))
            .with_description("Classic wedding ring")
            .with_price(150.0)
            .with_category("jewelery")
            .with_source_id(2),
        Transaction::new("Solid Silver Bracelet", datetime!(2021-03-21 10:00 UTC))
            .with_description("From the legends collection")
            .with_price(150.0)
            .with_category("jewelery")
            .with_sold(true)
            .with_source_id(3),
        Transaction::new("Ultra-wide Monitor", datetime!(2022-03-28 10:00 UTC))
            .with_description("49 inch QLED super ultrawide screen")
            .with_price(999.0)
            .with_category("electronics")
            .with_source_id(4),
        Transaction::new("Portable Hard Drive", datetime!(2021-04-01 10:00 UTC))
            .with_description("USB 3.0 compatible")
            .with_price(64.0)
            .with_category("electronics")
            .with_sold(true)
            .with_source_id(5),
        Transaction::new("Rain Jacket", datetime!(2022-07-15 10:00 UTC))
            .with_description("Lightweight, perfect for trips")
            .with_price(39.99)
            .with_category("women's clothing")
            .with_source_id(6),
    ]
}

/// `count` shirts sold in March, for pagination tests.
pub fn many_shirts(count: i64) -> Vec<Transaction> {
    (0..count)
        .map(|i| {
            Transaction::new(format!("Shirt #{i}"), datetime!(2022-03-05 10:00 UTC))
                .with_price(10.0)
                .with_category("men's clothing")
                .with_source_id(1000 + i)
        })
        .collect()
}
