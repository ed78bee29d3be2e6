//! Error types for client operations.
//!
//! This module defines [`StockError`] which covers every failure a client
//! call or a strict label lookup can report. Payload builders and the
//! fallback label functions never fail.

use thiserror::Error;

/// Boxed error produced by a transport implementation.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur while talking to the stock backend.
#[derive(Error, Debug)]
pub enum StockError {
    /// The transport failed to deliver the request or read the response.
    ///
    /// The transport's own error is kept untouched as the source.
    #[error("Transport error: {0}")]
    Transport(#[source] BoxError),

    /// The backend answered with a non-success HTTP status.
    #[error("HTTP {status}: {message}")]
    Status {
        /// HTTP status code returned by the backend.
        status: u16,
        /// The backend's `message` field, or the raw body if absent.
        message: String,
    },

    /// The response body could not be decoded into the expected shape.
    #[error("Parse error: {0}")]
    Parse(String),

    /// A period code outside 1..=4 was given to a strict lookup.
    #[error("Unknown period code: {0}")]
    UnknownPeriod(i64),

    /// An invalid parameter was provided.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// The client configuration is unusable.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl StockError {
    /// Wraps a transport error without altering it.
    pub fn transport<E>(err: E) -> Self
    where
        E: Into<BoxError>,
    {
        Self::Transport(err.into())
    }
}

impl From<serde_json::Error> for StockError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

/// Result type alias using [`StockError`].
pub type Result<T> = std::result::Result<T, StockError>;
