//! Error types for card_reconciler

use thiserror::Error;

/// Unified error type for reconciliation operations
#[derive(Debug, Error)]
pub enum ReconcileError {
    /// Reading the input or writing the report failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The input table could not be read
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    /// HTTP request failed (network error, timeout, etc.)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    /// Response body was not the JSON we expected
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// HTTP error status code without a Scryfall error payload
    #[error("HTTP error: {0}")]
    HttpStatus(reqwest::StatusCode),
    /// Print listing pages loop back or never end
    #[error("Pagination stopped at {0}")]
    Pagination(String),
}

/// Result alias for reconciliation operations
pub type Result<T> = std::result::Result<T, ReconcileError>;
