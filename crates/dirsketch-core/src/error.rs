//! Error types for parsing operations.

use thiserror::Error;

/// Errors that can occur while parsing a tree diagram.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Input was empty or whitespace-only.
    #[error("Input cannot be empty")]
    EmptyInput,

    /// Invalid configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl ParseError {
    /// Create an invalid configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}
