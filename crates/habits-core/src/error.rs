//! Core error types for habits-core.
//!
//! Validation and not-found failures are surfaced to the caller and leave
//! the store untouched. Malformed persisted data is repaired with documented
//! defaults at load time rather than treated as fatal.

use thiserror::Error;

/// Core error type for habits-core.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Invalid input on habit creation
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Operation referenced an unknown habit id
    #[error("No habit with id '{0}'")]
    NotFound(String),

    /// Malformed date key at an input boundary
    #[error("Invalid date key '{key}': {source}")]
    InvalidDateKey {
        key: String,
        #[source]
        source: chrono::ParseError,
    },

    /// IO errors from the persistence layer
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Validation errors raised on habit creation.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// A required free-text field was empty
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// A field was present but out of range
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: &'static str, message: String },
}

/// Result type alias for StoreError
pub type Result<T, E = StoreError> = std::result::Result<T, E>;
