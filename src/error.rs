//! Error types for calendar loading and document output.

use thiserror::Error;

/// Errors surfaced at the edges of the pipeline.
///
/// Simulation and encoding never fail; only reading a calendar, parsing
/// user-supplied colours, and writing documents do.
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid palette: {0}")]
    InvalidPalette(String),

    #[error("invalid calendar: {0}")]
    InvalidCalendar(String),
}

/// Alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
