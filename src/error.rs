//! Error types for inventory rendering.
//!
//! Every failure is terminal: the renderer aborts before the output file is
//! replaced, so a previous inventory is never left half written.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias used across the crate.
pub type Result<T> = std::result::Result<T, InventoryError>;

#[derive(Error, Debug)]
pub enum InventoryError {
    /// The expected key path is absent, or yields no host address.
    #[error("Missing field '{field}' in {path}")]
    MissingField { field: String, path: PathBuf },

    /// The input is not valid structured data, or a value has the wrong shape.
    #[error("Malformed input {path}: {message}")]
    MalformedInput { path: PathBuf, message: String },

    /// Reading the input or writing the output failed.
    #[error("I/O failure on {path}: {source}")]
    IoFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration {name}: {message}")]
    InvalidConfig { name: String, message: String },

    /// The provisioning tool's output command failed.
    #[error("Provisioner command failed '{command}': {message}")]
    ProvisionerFailure { command: String, message: String },
}

impl InventoryError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        InventoryError::IoFailure {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn malformed(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        InventoryError::MalformedInput {
            path: path.into(),
            message: message.into(),
        }
    }

    pub(crate) fn missing(path: impl Into<PathBuf>, field: impl Into<String>) -> Self {
        InventoryError::MissingField {
            field: field.into(),
            path: path.into(),
        }
    }
}
