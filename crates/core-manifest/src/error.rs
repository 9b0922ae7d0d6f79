//! Error types for manifest operations

use std::io;
use thiserror::Error;

/// Result type for manifest operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while assembling, validating or writing a manifest
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error occurred
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Manifest failed schema validation
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// Embedded schema document could not be parsed or compiled
    #[error("Schema {schema} is unusable: {message}")]
    SchemaCompile { schema: String, message: String },

    /// Unknown collection label
    #[error("Invalid collection: {0}")]
    InvalidCollection(String),
}

impl Error {
    /// Create a validation error with a message
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Error::Validation {
            message: message.into(),
        }
    }

    /// Create a schema compilation error
    pub fn schema_compile<S: Into<String>, M: Into<String>>(schema: S, message: M) -> Self {
        Error::SchemaCompile {
            schema: schema.into(),
            message: message.into(),
        }
    }

    /// Whether this error came from schema validation
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation { .. })
    }
}
