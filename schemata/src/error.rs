//! Error types for loading and building schemas.
//!
//! Validation failures are not errors in this crate; they are returned as
//! [`ValidationResult`](crate::ValidationResult) data. [`SchemaError`] covers
//! everything around validation: decoding definitions, reading registry
//! files and turning definitions into live schema trees.

use std::path::PathBuf;

use thiserror::Error;

use crate::result::ValidationError;
use crate::types::SchemaKind;

/// Result type alias for schema operations.
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Main error type for schema operations.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// JSON decoding failed.
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML decoding failed.
    #[error("Invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    /// Reading a definition file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A definition named a kind that does not exist.
    #[error("Unknown schema kind '{0}'")]
    UnknownKind(String),

    /// An array definition without an element definition.
    #[error("Array schema definition is missing `items`")]
    MissingItems,

    /// An object definition without a property table.
    #[error("Object schema definition is missing `properties`")]
    MissingProperties,

    /// A definition carries a child table its kind has no use for,
    /// such as `items` on a string.
    #[error("Schema definition of kind '{kind}' does not accept `{field}`")]
    UnexpectedField {
        kind: SchemaKind,
        field: &'static str,
    },

    /// A registry lookup missed.
    #[error("Schema '{0}' not found in registry")]
    NotFound(String),

    /// A registry file with an extension other than `.toml` or `.json`.
    #[error("Unsupported schema file format: {}", path.display())]
    UnsupportedFormat { path: PathBuf },

    /// A validated value was rejected.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),
}
