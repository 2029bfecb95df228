//! Knowledge store error types.

/// Errors from loading or validating a knowledge snapshot.
///
/// Every variant is fatal to the caller: a determination engine must not
/// serve requests against a snapshot that failed to load or validate.
#[derive(Debug, thiserror::Error)]
pub enum KnowledgeError {
    /// The document set violated a load-time invariant.
    #[error("snapshot validation failed: {details}")]
    Validation {
        /// Joined validation errors, one clause per failed check.
        details: String,
    },

    /// A snapshot file could not be read.
    #[error("failed to read snapshot file {path}: {source}")]
    Io {
        /// Path of the file that could not be read.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A snapshot file did not parse as YAML.
    #[error("failed to parse snapshot: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// Snapshot content could not be serialized for digest computation.
    #[error("failed to canonicalize snapshot content: {0}")]
    Canonical(#[from] serde_json::Error),
}

/// Convenience alias for knowledge store operations.
pub type KnowledgeResult<T> = Result<T, KnowledgeError>;
