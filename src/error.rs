//! Utilkit Error Types
//!
//! The utility functions themselves never fail. These errors cover the
//! configuration file and the command-line coercions around them.

use thiserror::Error;

/// Central error type for Utilkit
#[derive(Error, Debug)]
pub enum UtilError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid query pair (expected KEY=VALUE): {0}")]
    InvalidQueryPair(String),

    #[error("No candidate matched: {0}")]
    NoMatch(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Utilkit operations
pub type UtilResult<T> = Result<T, UtilError>;
