//! Error types for the advisory engine

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AdvisorError>;

/// Errors produced by the advisory core
#[derive(Error, Debug, Clone)]
pub enum AdvisorError {
    #[error("insufficient history for {asset}: need at least {required} observations, got {actual}")]
    InsufficientHistory {
        asset: String,
        required: usize,
        actual: usize,
    },

    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("degenerate covariance - all asset series have zero variance")]
    DegenerateCovariance,

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid weight bounds: {0}")]
    InvalidBounds(String),

    #[error("unknown asset: {0}")]
    UnknownAsset(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("market data source error: {0}")]
    DataSource(String),
}
