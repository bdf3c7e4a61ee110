//! Application-level errors
//!
//! A turn never fails on provider errors; these errors cover wiring,
//! configuration and a cycle task that died.

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error, such as a panicked cycle task
    #[error("Internal error: {0}")]
    Internal(String),
}
