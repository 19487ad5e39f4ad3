//! Transaction list API models

use salescope::{Pagination, Transaction};
use serde::{Deserialize, Serialize};

/// Raw query parameters of `GET /transactions`.
///
/// Everything is taken as text so malformed values fall back to defaults
/// instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct TransactionListQuery {
    pub search: Option<String>,
    pub month: Option<String>,
    pub page: Option<String>,
}

/// One page of transactions plus pagination metadata
#[derive(Debug, Serialize, Deserialize)]
pub struct TransactionPage {
    pub message: String,
    pub data: Vec<Transaction>,
    pub pagination: Pagination,
}
