//! Typed errors for the Instantly client.

use thiserror::Error;

/// Errors returned by Instantly API operations.
#[derive(Debug, Error)]
pub enum InstantlyError {
    /// Transport-level failure (connect, timeout, TLS).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Instantly returned a non-success status.
    #[error("Instantly API error ({status}): {message}")]
    Api { status: u16, message: String },
}

/// Result type alias for Instantly operations.
pub type Result<T> = std::result::Result<T, InstantlyError>;
