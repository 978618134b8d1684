//! Error types for the slidefill library.

use std::io;
use thiserror::Error;

/// Result type alias for slidefill operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading or writing a presentation.
#[derive(Error, Debug)]
pub enum Error {
    /// The presentation does not exist.
    #[error("Document not found: {0}")]
    NotFound(String),

    /// The service identity cannot access the presentation.
    #[error("Access denied to document: {0}")]
    PermissionDenied(String),

    /// Any other failure reported by the Slides API.
    #[error("Slides API error ({status}): {message}")]
    RemoteService {
        /// Upstream HTTP status code
        status: u16,
        /// Upstream error message
        message: String,
    },

    /// The request payload cannot be processed.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Missing or invalid credentials or settings.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The remote call did not finish within the configured timeout.
    #[error("Request timed out: {0}")]
    TimedOut(String),

    /// Transport failure talking to a remote endpoint.
    #[error("HTTP transport error: {0}")]
    Http(String),

    /// JSON encoding or decoding failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Build an error from an upstream HTTP status, mapping the statuses
    /// with a dedicated meaning.
    pub fn from_status(status: u16, document_id: &str, message: impl Into<String>) -> Self {
        match status {
            404 => Error::NotFound(document_id.to_string()),
            403 => Error::PermissionDenied(document_id.to_string()),
            _ => Error::RemoteService {
                status,
                message: message.into(),
            },
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Error::TimedOut(err.to_string())
        } else {
            Error::Http(err.to_string())
        }
    }
}

impl From<jsonwebtoken::errors::Error> for Error {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        Error::Configuration(format!("cannot sign service account assertion: {}", err))
    }
}
