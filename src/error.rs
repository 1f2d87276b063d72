//! Error types shared across the client.

use thiserror::Error;

use crate::config::loader::ConfigError;
use crate::session::SessionError;

/// Errors that can occur while talking to the banking backend.
#[derive(Debug, Error)]
pub enum BankingError {
    /// Connection, timeout or body read failure raised by the HTTP transport.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status.
    #[error("Backend returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body did not match the expected shape.
    #[error("Failed to decode {endpoint} response: {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A caller supplied value was rejected before any request was sent.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Base URL or a derived request URL could not be parsed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Configuration could not be loaded or failed validation.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Session lookup or creation failed.
    #[error(transparent)]
    Session(#[from] SessionError),
}

/// Result type for banking operations.
pub type BankingResult<T> = Result<T, BankingError>;
