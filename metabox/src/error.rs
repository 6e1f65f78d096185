//! Error types for metabox construction and registration.
//!
//! The save path never returns these: its failures are reported through
//! [`crate::PersistOutcome`] and the transient error message.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetaBoxError {
    /// Schema or definition file problem.
    #[error(transparent)]
    Model(#[from] metabox_model::ModelError),

    /// A metabox with this id is already registered.
    #[error("metabox already registered: {0}")]
    DuplicateMetaBox(String),
}

/// Result type for metabox operations.
pub type MetaBoxResult<T> = Result<T, MetaBoxError>;
