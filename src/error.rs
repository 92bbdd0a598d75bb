use std::path::PathBuf;

use thiserror::Error;

/// Custom error types for guardsearch
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuardSearchError {
    #[error("Invalid config file {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    #[error("Invalid API URL '{0}': expected an http:// or https:// URL")]
    InvalidApiUrl(String),

    #[error("IO error: {0}")]
    Io(String),
}

impl From<std::io::Error> for GuardSearchError {
    fn from(err: std::io::Error) -> Self {
        GuardSearchError::Io(err.to_string())
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
