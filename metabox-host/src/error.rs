//! Error types for host collaborators.

use thiserror::Error;

/// Result type for host operations.
pub type HostResult<T> = Result<T, HostError>;

/// Failures reported by a host service.
#[derive(Debug, Error)]
pub enum HostError {
    /// Attribute store read or write failed.
    #[error("attribute store error: {0}")]
    Storage(String),

    /// Transient store operation failed.
    #[error("transient store error: {0}")]
    Transient(String),

    /// Item status update failed.
    #[error("item update error: {0}")]
    Update(String),
}
