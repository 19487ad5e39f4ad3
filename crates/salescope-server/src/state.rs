//! Application state

use salescope_store::TransactionStore;
use std::sync::Arc;

use crate::{
    config::ServerConfig,
    services::{SeedService, StatisticsService, TransactionService},
};

/// Application state shared across handlers. The store handle is owned here
/// and released when the last clone of the state is dropped.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn TransactionStore>,
    pub config: ServerConfig,
    pub statistics: StatisticsService,
    pub transactions: TransactionService,
    pub seed: SeedService,
}

impl AppState {
    pub fn new(store: Arc<dyn TransactionStore>, config: ServerConfig) -> Self {
        let seed = SeedService::new(
            store.clone(),
            reqwest::Client::new(),
            config.seed_url.clone(),
        );

        Self {
            statistics: StatisticsService::new(store.clone()),
            transactions: TransactionService::new(store.clone()),
            seed,
            store,
            config,
        }
    }
}
