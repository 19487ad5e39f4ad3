//! Server configuration management

use crate::error::{ApiError, Result};
use serde::{Deserialize, Serialize};

/// Default location of the product transaction feed
pub const DEFAULT_SEED_URL: &str = "https://s3.amazonaws.com/roxiler.com/product_transaction.json";

/// Which transaction store backs the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    MongoDb,
    Memory,
}

impl std::str::FromStr for StoreBackend {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "mongodb" | "mongo" => Ok(Self::MongoDb),
            "memory" => Ok(Self::Memory),
            other => Err(ApiError::Config(format!("Invalid STORE_BACKEND value: {}", other))),
        }
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,

    /// Port to bind to
    pub port: u16,

    pub store_backend: StoreBackend,

    /// MongoDB connection string; required for the MongoDB backend
    pub database_url: Option<String>,

    pub database_name: String,

    pub collection_name: String,

    /// Upper bound on finding a reachable server at startup
    pub connect_timeout_seconds: u64,

    /// Feed fetched by `POST /enterData`
    pub seed_url: String,

    /// CORS allowed origins
    pub cors_origins: Vec<String>,
}

impl ServerConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let store_backend: StoreBackend = std::env::var("STORE_BACKEND")
            .unwrap_or_else(|_| "mongodb".to_string())
            .parse()?;

        let database_url = std::env::var("DATABASE_URL").ok().filter(|s| !s.is_empty());
        if store_backend == StoreBackend::MongoDb && database_url.is_none() {
            return Err(ApiError::Config("DATABASE_URL is not defined".to_string()));
        }

        Ok(Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .map_err(|_| ApiError::Config("Invalid PORT value".to_string()))?,
            store_backend,
            database_url,
            database_name: std::env::var("DATABASE_NAME")
                .unwrap_or_else(|_| "salescope".to_string()),
            collection_name: std::env::var("DATABASE_COLLECTION")
                .unwrap_or_else(|_| "transactions".to_string()),
            connect_timeout_seconds: std::env::var("DATABASE_CONNECT_TIMEOUT_SECONDS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .map_err(|_| {
                    ApiError::Config("Invalid DATABASE_CONNECT_TIMEOUT_SECONDS value".to_string())
                })?,
            seed_url: std::env::var("SEED_URL").unwrap_or_else(|_| DEFAULT_SEED_URL.to_string()),
            cors_origins: std::env::var("CORS_ORIGINS")
                .unwrap_or_else(|_| "http://localhost:5173".to_string())
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            store_backend: StoreBackend::Memory,
            database_url: None,
            database_name: "salescope".to_string(),
            collection_name: "transactions".to_string(),
            connect_timeout_seconds: 30,
            seed_url: DEFAULT_SEED_URL.to_string(),
            cors_origins: vec!["http://localhost:5173".to_string()],
        }
    }
}
