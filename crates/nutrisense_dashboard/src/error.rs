//! Custom error types for the dashboard.

use thiserror::Error;

/// Dashboard errors.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("API error: {0}")]
    Api(#[from] nutrisense_client::NutrisenseError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<String> for DashboardError {
    fn from(err: String) -> Self {
        DashboardError::Config(err)
    }
}

/// Result type alias for dashboard operations.
pub type DashboardResult<T> = Result<T, DashboardError>;
