//! API models for requests and responses

pub mod api;
pub mod seed;
pub mod transaction;

// Re-export commonly used types
pub use api::*;
pub use seed::*;
pub use transaction::*;
