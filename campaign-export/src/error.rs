//! Error types for loading export inputs from disk.
//!
//! The redaction engine itself never fails; these errors only surface at the
//! I/O boundary (configuration files and campaign snapshots).

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    /// The file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    /// The file extension is neither `.json` nor `.toml`.
    #[error("unsupported configuration format: {0}")]
    UnsupportedFormat(String),
}

/// Result type for export I/O operations.
pub type ExportResult<T> = Result<T, ExportError>;
