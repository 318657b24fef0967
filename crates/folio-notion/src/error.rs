//! Error types for folio-notion

use thiserror::Error;

/// Result type alias for folio-notion operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while talking to the Notion API
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from folio-core
    #[error("Core error: {0}")]
    Core(#[from] folio_core::Error),

    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("Notion API error {status} ({code}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Notion error code, e.g. `object_not_found`
        code: String,
        /// Human-readable message from the API
        message: String,
    },

    /// A response body could not be decoded
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl Error {
    /// Returns whether retrying the same request may succeed.
    ///
    /// Rate limiting, server-side failures, timeouts, and connection
    /// failures are transient; everything else is permanent.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Api { status, .. } => *status == 429 || *status >= 500,
            Error::Http(e) => e.is_timeout() || e.is_connect(),
            Error::Core(_) => false,
            Error::Decode(_) => false,
        }
    }

    /// Creates a configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Core(folio_core::Error::config(message))
    }
}
