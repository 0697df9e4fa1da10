//! Error types and error handling for context42.
//!
//! The chunking and search core never fails on well-typed input;
//! these errors come from the glue around it (directory loading,
//! configuration, orchestrator-side validation).

use std::time::Duration;
use thiserror::Error;

/// Result type alias for context42 operations
pub type Result<T> = std::result::Result<T, Context42Error>;

/// Main error type for context42
#[derive(Error, Debug)]
pub enum Context42Error {
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Loading failed: {0}")]
    LoadFailed(String),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("No directory loaded, use /load <path>")]
    NotLoaded,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Operation timed out after {0:?}")]
    Timeout(Duration),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl Context42Error {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this is a "not found" type error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Context42Error::InvalidPath(_))
    }

    /// Check if this is a bad request error (invalid input)
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            Context42Error::InvalidQuery(_)
                | Context42Error::ConfigError(_)
                | Context42Error::NotLoaded
        )
    }
}
