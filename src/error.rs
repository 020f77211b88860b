//! Error types for autocomplete and engine operations.

use thiserror::Error;

/// Errors that can occur while talking to the search engine.
///
/// A response that decodes but lacks the expected aggregation is not an
/// error; see [`crate::results`].
#[derive(Error, Debug)]
pub enum SearchError {
    /// The user input was rejected before any query was built.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The query body could not be encoded.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Network or connection failure.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The engine answered with a non-2xx status.
    #[error("Engine returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body was not valid JSON.
    #[error("Decode error: {0}")]
    Decode(String),

    /// Required configuration is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl SearchError {
    /// Create an invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a serialization error.
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }

    /// Create a transport error.
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Create a decode error.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Whether the error was caused by the caller rather than the engine.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}

impl From<reqwest::Error> for SearchError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for SearchError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
