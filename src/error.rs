//! Error types for farmgate
//!
//! Library errors use `thiserror`; the binary wraps them in `anyhow`.
//! Persistence *reads* are deliberately not represented here: loading
//! state is total and falls back to defaults instead of failing.

use thiserror::Error;

/// Result type alias for farmgate operations
pub type FarmgateResult<T> = Result<T, FarmgateError>;

/// Main error type for farmgate operations
#[derive(Error, Debug)]
pub enum FarmgateError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV writing error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// No home directory to derive the default state path from
    #[error("could not determine a home directory for the state file")]
    NoHomeDirectory,
}
