use salescope_server::{
    AppState, ApiError, Result, ServerConfig, StoreBackend, create_router,
};
use salescope_store::{MemoryTransactionStore, MongoTransactionStore, TransactionStore};
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "salescope_server=debug,tower_http=debug".to_string()),
        )
        .init();

    // Load configuration
    let config = ServerConfig::from_env().inspect_err(|e| error!("{}", e))?;
    info!(
        "Starting Salescope Server on {}:{}",
        config.host, config.port
    );

    let store = open_store(&config).await?;
    let state = AppState::new(store, config.clone());
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .map_err(|_| ApiError::Config(format!("Invalid HOST value: {}", config.host)))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Open the configured store, failing fast when it is unreachable
async fn open_store(config: &ServerConfig) -> Result<Arc<dyn TransactionStore>> {
    match config.store_backend {
        StoreBackend::MongoDb => {
            let url = config
                .database_url
                .as_deref()
                .ok_or_else(|| ApiError::Config("DATABASE_URL is not defined".to_string()))?;

            let store = MongoTransactionStore::connect(
                url,
                &config.database_name,
                &config.collection_name,
                Duration::from_secs(config.connect_timeout_seconds),
            )
            .await
            .map_err(|e| {
                error!("Error connecting to the database: {}", e);
                ApiError::Config(format!("Database unreachable: {}", e))
            })?;

            Ok(Arc::new(store))
        }
        StoreBackend::Memory => {
            warn!("Using in-memory store; data is lost on shutdown");
            Ok(Arc::new(MemoryTransactionStore::new()))
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
