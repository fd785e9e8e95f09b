//! Error types for deid-risk
//!
//! Provides unified error handling across the crate.
//!
//! Cancellation and threshold hits are not errors: they surface as
//! [`SearchStatus`](crate::features::msu_discovery::SearchStatus) values on a
//! successful outcome.

use crate::config::ConfigError;
use thiserror::Error;

/// Main error type for deid-risk operations
#[derive(Debug, Error)]
pub enum RiskError {
    /// Malformed input matrix or call arguments
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Internal invariant broken by the search (indicates a defect)
    #[error("Internal invariant violated: {0}")]
    InvariantViolation(String),

    /// Exhaustive baseline refused an input beyond its size bound
    #[error(
        "Exhaustive search refused: {rows} rows x {columns} columns exceeds limit of {max_rows} rows x {max_columns} columns"
    )]
    OracleLimit {
        rows: usize,
        columns: usize,
        max_rows: usize,
        max_columns: usize,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl RiskError {
    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        RiskError::InvalidInput(msg.into())
    }

    /// Create an invariant violation error
    pub fn invariant(msg: impl Into<String>) -> Self {
        RiskError::InvariantViolation(msg.into())
    }
}

/// Result type alias for deid-risk operations
pub type Result<T> = std::result::Result<T, RiskError>;
