//! Error types.

use thiserror::Error;

/// Errors that can occur while loading documents or configuration.
///
/// The traversal engine itself never fails.
#[derive(Debug, Error)]
pub enum WalkError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Document parse error.
    #[error("Parse error: {0}")]
    Parse(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl WalkError {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }
}
