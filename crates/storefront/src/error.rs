//! Unified error handling.
//!
//! Provides a unified `AppError` type for the outer surfaces (configuration,
//! storage backends and input files). The resolvers and
//! [`TokenService::read`](crate::services::auth::TokenService::read) never
//! fail and do not use it.

use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;
use crate::storage::StorageError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration is invalid.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Storage backend operation failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// An input file could not be read.
    #[error("Cannot read {}: {source}", path.display())]
    Input {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// An input document is not valid JSON of the expected shape.
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Bad request from the caller.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Read and parse a JSON input file.
///
/// # Errors
///
/// Returns `AppError::Input` if the file cannot be read and `AppError::Json`
/// if it does not parse as `T`.
pub fn read_json_file<T: serde::de::DeserializeOwned>(path: impl Into<PathBuf>) -> Result<T> {
    let path = path.into();
    let contents = std::fs::read_to_string(&path).map_err(|source| AppError::Input {
        path: path.clone(),
        source,
    })?;
    Ok(serde_json::from_str(&contents)?)
}
