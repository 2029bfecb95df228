//! Enrichment error types.
//!
//! The four call-time variants make the engine's fallback decision a
//! pattern match instead of a catch-all: every way an enrichment attempt
//! can fail maps to exactly one variant, and every variant triggers the
//! same deterministic fallback.

/// Errors from an enrichment attempt.
#[derive(Debug, thiserror::Error)]
pub enum EnrichmentError {
    /// The service was unreachable, timed out, or returned a non-2xx status.
    #[error("enrichment transport error: {reason}")]
    Transport {
        /// Human-readable description of the failure.
        reason: String,
    },

    /// The response body was not valid structured data.
    #[error("enrichment response did not parse: {reason}")]
    Parse {
        /// Description of the parse failure.
        reason: String,
    },

    /// The response parsed but did not match the ledger shape.
    #[error("enrichment response shape mismatch: {reason}")]
    SchemaMismatch {
        /// Description of the shape violation.
        reason: String,
    },

    /// The response carried the wrong number of topic entries.
    #[error("enrichment returned {actual} entries, expected {expected}")]
    CountMismatch {
        /// Number of entries the run expected.
        expected: usize,
        /// Number of entries the response carried.
        actual: usize,
    },

    /// The enricher could not be constructed from its configuration.
    #[error("enricher not configured: {reason}")]
    NotConfigured {
        /// Why configuration is missing or invalid.
        reason: String,
    },
}

/// Convenience alias for enrichment operations.
pub type EnrichmentResult<T> = Result<T, EnrichmentError>;
