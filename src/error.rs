//! Common error types for cinemap

use thiserror::Error;

/// Common result type for cinemap operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by dataset loading and startup
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV open/parse error (wraps csv::Error)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Dataset download error (wraps reqwest::Error)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}
