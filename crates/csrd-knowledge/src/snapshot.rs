//! # Knowledge Snapshot
//!
//! The immutable, versioned document collection every determination run
//! reads. A snapshot is constructed exactly once — from the builtin set or
//! from an operator-supplied YAML file — validated fail-fast, and then
//! shared read-only (typically behind an `Arc`) for the process lifetime.
//!
//! ## Content Digest
//!
//! Each snapshot carries a SHA-256 digest over a domain-separated canonical
//! encoding:
//!
//! ```text
//! SHA256( b"csrd-snapshot-v1\0" + version + b"\0"
//!         + (id + b"\0" + canonical_json(document) + b"\0")... )
//! ```
//!
//! Documents are folded in id order, so the digest is independent of input
//! ordering and stable across runs. The digest is surfaced in every
//! determination report for audit traceability.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::path::Path;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use csrd_core::TopicId;

use crate::builtin;
use crate::document::RegulatoryDocument;
use crate::error::{KnowledgeError, KnowledgeResult};
use crate::validation;

/// Snapshot format version for the builtin document set.
pub const SNAPSHOT_SPEC_VERSION: &str = "2024.1";

// ---------------------------------------------------------------------------
// Snapshot file form
// ---------------------------------------------------------------------------

/// On-disk YAML form of a snapshot.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub(crate) struct SnapshotFile {
    pub(crate) version: String,
    pub(crate) documents: Vec<RegulatoryDocument>,
}

// ---------------------------------------------------------------------------
// KnowledgeSnapshot
// ---------------------------------------------------------------------------

/// A validated, versioned, immutable regulatory document collection.
#[derive(Debug, Clone)]
pub struct KnowledgeSnapshot {
    version: String,
    documents: BTreeMap<TopicId, RegulatoryDocument>,
    digest: String,
}

impl KnowledgeSnapshot {
    /// Build a snapshot from a document set, validating fail-fast.
    ///
    /// Validation errors are joined into a single [`KnowledgeError::Validation`];
    /// warnings are logged and do not block construction.
    pub fn from_documents(
        version: impl Into<String>,
        documents: Vec<RegulatoryDocument>,
    ) -> KnowledgeResult<Self> {
        let version = version.into();
        let report = validation::validate_documents(&documents);
        for warning in &report.warnings {
            tracing::warn!(warning = %warning, "snapshot validation warning");
        }
        if !report.is_valid {
            return Err(KnowledgeError::Validation {
                details: report.errors.join("; "),
            });
        }

        let documents: BTreeMap<TopicId, RegulatoryDocument> = documents
            .into_iter()
            .map(|doc| (doc.id.clone(), doc))
            .collect();
        let digest = compute_snapshot_digest(&version, &documents)?;
        tracing::debug!(
            version = %version,
            digest = %digest,
            documents = documents.len(),
            "knowledge snapshot constructed"
        );
        Ok(Self {
            version,
            documents,
            digest,
        })
    }

    /// Build the builtin ESRS reference snapshot.
    pub fn builtin() -> KnowledgeResult<Self> {
        Self::from_documents(SNAPSHOT_SPEC_VERSION, builtin::esrs_documents())
    }

    /// Parse and validate a snapshot from YAML text.
    pub fn from_yaml_str(raw: &str) -> KnowledgeResult<Self> {
        let file: SnapshotFile = serde_yaml::from_str(raw)?;
        Self::from_documents(file.version, file.documents)
    }

    /// Load and validate a snapshot from a YAML file.
    pub fn from_yaml_file(path: &Path) -> KnowledgeResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| KnowledgeError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml_str(&raw)
    }

    /// Snapshot version string.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Content digest (64 lowercase hex characters).
    pub fn digest(&self) -> &str {
        &self.digest
    }

    /// Look up a document by topic id.
    pub fn document(&self, id: &TopicId) -> Option<&RegulatoryDocument> {
        self.documents.get(id)
    }

    /// All documents, in id order.
    pub fn documents(&self) -> impl Iterator<Item = &RegulatoryDocument> {
        self.documents.values()
    }

    /// The reference document carrying the canonical phase thresholds.
    ///
    /// Validation guarantees exactly one exists, so `None` never occurs on a
    /// constructed snapshot; callers still match rather than unwrap.
    pub fn reference_document(&self) -> Option<&RegulatoryDocument> {
        self.documents.values().find(|doc| doc.reference)
    }

    /// Number of documents in the snapshot.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether the snapshot holds no documents.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Digest computation
// ---------------------------------------------------------------------------

/// Compute the domain-separated snapshot digest.
///
/// Folds the version and each (id, canonical document JSON) pair into one
/// SHA-256 under the `csrd-snapshot-v1` prefix. NUL separators prevent
/// adjacent components from aliasing.
fn compute_snapshot_digest(
    version: &str,
    documents: &BTreeMap<TopicId, RegulatoryDocument>,
) -> KnowledgeResult<String> {
    let mut hasher = Sha256::new();
    hasher.update(b"csrd-snapshot-v1\0");
    hasher.update(version.as_bytes());
    hasher.update(b"\0");
    for (id, doc) in documents {
        hasher.update(id.as_str().as_bytes());
        hasher.update(b"\0");
        let canonical = serde_json::to_vec(doc)?;
        hasher.update(&canonical);
        hasher.update(b"\0");
    }
    Ok(to_hex(&hasher.finalize()))
}

fn to_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        // Infallible for String targets.
        let _ = write!(out, "{byte:02x}");
    }
    out
}
