//! Error types for sancert
//!
//! Library errors use `thiserror`; the binary wraps them with `anyhow`
//! context at the shell.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::services::combiner::SelectionError;

/// Result type alias for sancert operations
pub type CertResult<T> = Result<T, CertError>;

/// Main error type for sancert operations
#[derive(Error, Debug)]
pub enum CertError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Inventory file does not exist
    #[error("inventory file not found: {path}")]
    InventoryNotFound { path: PathBuf },

    /// Inventory file exists but cannot be parsed
    #[error("invalid inventory file {path}: {message}")]
    InventoryParse { path: PathBuf, message: String },

    /// Persisted target file cannot be parsed
    #[error("invalid target file {path}: {message}")]
    TargetParse { path: PathBuf, message: String },

    /// Selection produced no usable result
    #[error(transparent)]
    Selection(#[from] SelectionError),

    /// Unknown target plugin name
    #[error("no target plugin named '{name}'")]
    PluginNotFound { name: String },

    /// Required option was not supplied on a non-interactive run
    #[error("missing required option '--{option}'")]
    MissingOption { option: &'static str },
}
