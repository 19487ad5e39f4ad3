//! Seed loader API models

use serde::{Deserialize, Serialize};

/// What a seed run did to the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedReport {
    /// Records returned by the feed
    pub received: usize,
    pub inserted: usize,
    /// Records left as stored because their feed id was already present
    pub skipped: u64,
    pub inserted_ids: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SeedResponse {
    pub message: String,
    pub result: SeedReport,
}
