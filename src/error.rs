//! Error types for the configuration store.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by configuration store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),

    #[error("Config file already exists: {0}")]
    AlreadyExists(PathBuf),

    #[error("Config I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode config at {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode config: {0}")]
    Encode(#[source] serde_json::Error),
}
