//! Error types for the salescope domain

use thiserror::Error;

/// Corrective hint returned to clients that sent an unusable month token
pub const MONTH_HINT: &str = "Please provide a valid 'month' parameter (e.g., 'January' or '1').";

/// Domain errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SalescopeError {
    /// The month token is missing, out of range or not an English month name
    #[error("Invalid month '{token}': {hint}")]
    InvalidMonth { token: String, hint: &'static str },
}

impl SalescopeError {
    pub fn invalid_month<S: Into<String>>(token: S) -> Self {
        Self::InvalidMonth {
            token: token.into(),
            hint: MONTH_HINT,
        }
    }
}

/// Shorthand result type for salescope operations
pub type Result<T> = std::result::Result<T, SalescopeError>;
