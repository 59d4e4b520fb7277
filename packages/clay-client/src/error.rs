//! Typed errors for the Clay client.

use thiserror::Error;

/// Errors returned by Clay API operations.
#[derive(Debug, Error)]
pub enum ClayError {
    /// Transport-level failure (connect, timeout, TLS).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Clay returned a non-success status.
    #[error("Clay API error ({status}): {message}")]
    Api { status: u16, message: String },
}

/// Result type alias for Clay operations.
pub type Result<T> = std::result::Result<T, ClayError>;
