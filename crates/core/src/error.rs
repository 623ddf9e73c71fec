//! Error types for loading documents and writing generated code.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for generation operations.
pub type GenerateResult<T> = Result<T, GenerateError>;

/// Errors raised at the I/O boundary.
///
/// Resolution itself never fails; see `Diagnostics` for tolerated defects.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Reading or writing a file failed.
    #[error("{}: {source}", path.display())]
    Io {
        /// File that could not be accessed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid YAML for an OpenAPI document.
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The document is not valid JSON for an OpenAPI document.
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The input file extension is neither YAML nor JSON.
    #[error("unsupported file format: {0} (expected .yaml, .yml or .json)")]
    UnsupportedFormat(String),
}

impl GenerateError {
    /// Create an I/O error for `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
