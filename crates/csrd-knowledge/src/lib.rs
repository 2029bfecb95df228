//! # csrd-knowledge — Regulatory Knowledge Store
//!
//! The immutable, versioned document collection the determination engine
//! reads: regulatory documents with per-phase applicability thresholds,
//! load-time validation, a content digest for audit traceability, and the
//! builtin ESRS reference set.
//!
//! ## Lifecycle
//!
//! A [`KnowledgeSnapshot`] is constructed exactly once — from
//! [`builtin::esrs_documents`] or an operator-supplied YAML file — and then
//! shared read-only for the process lifetime. Construction validates the
//! document set fail-fast: a process must never serve determination requests
//! against an unvalidated store. Scoring never re-validates; invariant
//! violations (a missing phase entry, a duplicate id, no reference document)
//! are load-time errors.
//!
//! ## Injection
//!
//! There is no module-level singleton. Callers construct the snapshot and
//! inject it (typically behind an `Arc`) into every component that reads it,
//! which keeps per-test fixtures trivial.

pub mod builtin;
pub mod document;
pub mod error;
pub mod snapshot;
pub mod validation;

// Re-export primary types.
pub use document::{
    MandateBasis, PhaseApplicability, PhaseDirective, RegulatoryDocument, SimplifiedKpi,
};
pub use error::{KnowledgeError, KnowledgeResult};
pub use snapshot::{KnowledgeSnapshot, SNAPSHOT_SPEC_VERSION};
pub use validation::{validate_document, validate_documents, SnapshotValidationResult};
