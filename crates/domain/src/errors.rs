//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Session identifier is missing or malformed
    #[error("Invalid session id: {0}")]
    InvalidSessionId(String),

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}
