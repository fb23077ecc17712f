//! Domain-level error types.

use thiserror::Error;

/// Validation failures for submitted posts.
///
/// Messages match the API's client-facing wording.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing title")]
    MissingTitle,

    #[error("missing or invalid URL")]
    InvalidUrl,

    #[error("missing owner")]
    MissingOwner,
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),
}
