use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building the search index
#[derive(Debug, Error)]
pub enum IndexError {
    /// Rejected configuration value.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Reading a page or writing the index failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl IndexError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, IndexError>;
