//! Error types for posting webhook messages.

use std::io;

use thiserror::Error;

/// Error type for HTTP transport operations.
///
/// Describes what went wrong on the wire without dictating recovery.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, connection refused,
    /// TLS handshake errors, and other network-level errors.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request timed out.
    #[error("Request timed out")]
    Timeout,

    /// The transport rejected the URL or request.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Error returned when a message could not be posted.
///
/// None of these are retried; retrying is up to the caller.
#[derive(Debug, Error)]
pub enum WriteError {
    /// The request could not be built from the sender's configuration.
    #[error("Failed to create request: {0}")]
    RequestConstruction(String),

    /// The request never got a response.
    #[error("Failed to post request: {0}")]
    Transport(#[source] HttpError),

    /// The service answered with something other than `204 No Content`.
    #[error("Unexpected status {status}{}", body_suffix(.body))]
    UnexpectedStatus {
        /// HTTP status code returned by the service
        status: http::StatusCode,
        /// Response body, if it was valid UTF-8 and non-empty
        body: Option<String>,
    },
}

fn body_suffix(body: &Option<String>) -> String {
    body.as_deref()
        .filter(|b| !b.is_empty())
        .map(|b| format!(": {b}"))
        .unwrap_or_default()
}

impl From<HttpError> for WriteError {
    fn from(error: HttpError) -> Self {
        match error {
            HttpError::InvalidUrl(reason) => Self::RequestConstruction(reason),
            other => Self::Transport(other),
        }
    }
}

impl WriteError {
    /// Returns the HTTP status when the service rejected the message.
    #[must_use]
    pub const fn status(&self) -> Option<http::StatusCode> {
        match self {
            Self::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Maps this error onto the closest [`io::ErrorKind`].
    #[must_use]
    pub const fn io_kind(&self) -> io::ErrorKind {
        match self {
            Self::RequestConstruction(_) => io::ErrorKind::InvalidInput,
            Self::Transport(HttpError::Timeout) => io::ErrorKind::TimedOut,
            Self::Transport(_) | Self::UnexpectedStatus { .. } => io::ErrorKind::Other,
        }
    }
}

impl From<WriteError> for io::Error {
    fn from(error: WriteError) -> Self {
        Self::new(error.io_kind(), error)
    }
}
