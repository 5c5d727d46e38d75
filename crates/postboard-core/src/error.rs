//! Domain-level error types.

use thiserror::Error;

/// Domain errors - business rule violations.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Repository-level errors.
///
/// Absence is never an error here: lookups return `Option` and deletes
/// return `bool`.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Stored document is malformed: {0}")]
    Mapping(String),
}
