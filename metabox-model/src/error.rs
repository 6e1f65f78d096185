//! Error types for schema construction and definition loading.

use thiserror::Error;

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors that can occur while building a schema or loading a definition.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Two fields share the same key.
    #[error("duplicate field key: {0}")]
    DuplicateFieldKey(String),

    /// A choice field lists the same option key twice.
    #[error("duplicate option key '{option}' on field '{field}'")]
    DuplicateOptionKey { field: String, option: String },

    /// A field was declared without a key.
    #[error("field at position {0} has an empty key")]
    EmptyFieldKey(usize),

    /// A definition names a transform the registry does not know.
    #[error("unknown transform '{transform}' on field '{field}'")]
    UnknownTransform { field: String, transform: String },

    /// Definition file is not valid TOML or does not match the layout.
    #[error("definition parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// IO error reading a definition file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
