//! Error types for the tcomap I/O boundary.
//!
//! The engine itself is total over numeric input and has no error paths;
//! everything that can fail lives at the loader and command seams. Commands
//! bubble these through `anyhow::Result`.

use std::path::PathBuf;

/// Errors raised while loading or validating input.
#[derive(Debug, thiserror::Error)]
pub enum TcomapError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid snapshot YAML: {source}")]
    Parse {
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid input: {field} is negative ({value})")]
    Validation { field: String, value: f64 },

    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias
pub type TcomapResult<T> = Result<T, TcomapError>;
