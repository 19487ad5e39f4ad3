//! Common API types
use serde::{Deserialize, Serialize};

/// `{ "data": ... }` envelope of the statistics endpoints
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// `?month=` parameter of the statistics endpoints
#[derive(Debug, Default, Deserialize)]
pub struct MonthQuery {
    pub month: Option<String>,
}
