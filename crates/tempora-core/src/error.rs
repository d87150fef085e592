//! Error types for Tempora Core

use crate::limits::ValidationError;
use thiserror::Error;

/// Result type alias using Tempora's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Tempora error types
///
/// Lookups never fail: an unknown node is "no path" or degree 0. Errors are
/// reserved for input that cannot be ordered or queries that are malformed.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid timestamp: {0} is not comparable")]
    InvalidTimestamp(f64),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
