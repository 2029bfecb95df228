//! # Error Hierarchy
//!
//! Structured error types for the CSRD Stack core, built with `thiserror`.
//! No `Box<dyn Error>`, no `.unwrap()` outside tests.
//!
//! A determination run itself is infallible by design: bad company inputs are
//! sanitized to a zero-value profile rather than rejected, so the engine always
//! produces a complete result. The errors here cover the boundaries around a
//! run: decoding caller-supplied input documents and writing outputs.

use thiserror::Error;

/// Top-level error type for the CSRD Stack core.
#[derive(Error, Debug)]
pub enum CsrdError {
    /// A caller-supplied input document failed structural validation.
    #[error("invalid determination input: {0}")]
    InvalidInput(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for core operations.
pub type CsrdResult<T> = Result<T, CsrdError>;
