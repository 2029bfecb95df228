#![deny(missing_docs)]

//! # csrd-core — Foundational Types for the CSRD Stack
//!
//! This crate defines the foundational types that every other crate in the
//! workspace depends on. It has no internal crate dependencies — only `serde`,
//! `serde_json`, `thiserror`, and `uuid` from the external ecosystem.
//!
//! ## Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** Every identifier is a distinct
//!    type. You cannot pass a [`LedgerEntryId`] where a [`RemediationId`] is
//!    expected.
//!
//! 2. **Single enum per classification scale.** [`ReportingPhase`],
//!    [`ComplianceStatus`], [`MaterialityLevel`], [`AlignmentStatus`], and
//!    [`Priority`] each have one definition used by every crate. Exhaustive
//!    `match` everywhere — no independent status lists that can diverge.
//!
//! 3. **Reproducible output identifiers.** Ledger and remediation ids are
//!    UUIDv5 values derived from the topic id under fixed namespaces, so two
//!    runs over identical inputs produce byte-identical reports.
//!
//! 4. **[`CsrdError`] hierarchy.** Structured errors with `thiserror` — no
//!    `Box<dyn Error>`, no `.unwrap()` outside tests.

pub mod domain;
pub mod error;
pub mod identity;
pub mod inputs;
pub mod report;

// Re-export primary types at crate root for ergonomic imports.
pub use domain::{AlignmentStatus, ComplianceStatus, MaterialityLevel, Priority, ReportingPhase};
pub use error::{CsrdError, CsrdResult};
pub use identity::{LedgerEntryId, RemediationId, TopicId};
pub use inputs::{CompanyProfile, DeterminationInput, DisclosureClaim, FinancialContext};
pub use report::{
    ComplianceScoreSummary, CostEstimate, DeterminationReport, GapRecord, ObligationLedgerEntry,
    RemediationItem, TaxonomyAssessment,
};
