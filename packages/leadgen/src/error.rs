//! Typed errors for the leadgen library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling.

use thiserror::Error;

/// Errors that can occur during pipeline operations.
#[derive(Debug, Error)]
pub enum LeadgenError {
    /// A discovery source failed wholesale (its per-item failures are
    /// logged and skipped inside the source instead).
    #[error("source failed: {0}")]
    Source(#[from] SourceError),

    /// An output sink failed.
    #[error("sink failed: {0}")]
    Sink(#[from] SinkError),

    /// People-search or enrichment capability failed.
    #[error("enrichment service error: {0}")]
    Enrichment(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Campaign push capability failed.
    #[error("campaign service error: {0}")]
    Campaign(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Errors that can occur while reading a discovery source.
#[derive(Debug, Error)]
pub enum SourceError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Invalid URL format.
    #[error("invalid URL: {url}")]
    InvalidUrl { url: String },

    /// Input file could not be read or parsed.
    #[error("input file error: {0}")]
    Input(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Errors that can occur while writing an output sink.
#[derive(Debug, Error)]
pub enum SinkError {
    /// File I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Database operation failed.
    #[error("storage error: {0}")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, LeadgenError>;

/// Result type alias for source operations.
pub type SourceResult<T> = std::result::Result<T, SourceError>;

/// Result type alias for sink operations.
pub type SinkResult<T> = std::result::Result<T, SinkError>;
