//! Business logic services

pub mod seed_service;
pub mod statistics_service;
pub mod transaction_service;

// Re-export services
pub use seed_service::SeedService;
pub use statistics_service::StatisticsService;
pub use transaction_service::TransactionService;
