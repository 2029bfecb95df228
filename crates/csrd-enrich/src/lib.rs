//! # csrd-enrich — Narrative Enrichment Adapters
//!
//! Optional refinement layer for determination ledgers. The engine always
//! produces a complete deterministic ledger first; an [`Enricher`] may then
//! rewrite entry wording (labels, evidence, provenance) with richer
//! narrative, typically from a language-model service.
//!
//! - **[`Enricher`]** is the seam: any adapter returning one
//!   [`EnrichedLedgerEntry`] per submitted claim can plug in.
//! - **[`HttpEnricher`]** POSTs the JSON contract to a remote service and
//!   parses a bare-array response.
//! - **[`OfflineEnricher`]** and **[`StaticEnricher`]** cover tests and
//!   air-gapped deployments.
//!
//! ## Acceptance Discipline
//!
//! Enrichment is all-or-nothing. A response is only usable when it parses,
//! matches the entry contract, and covers exactly the submitted claims; any
//! failure surfaces as an [`EnrichmentError`] and the caller keeps its
//! deterministic ledger untouched. This crate performs the transport and
//! shape checks; count and topic coverage are verified by the engine, which
//! knows what it submitted.

pub mod config;
pub mod contract;
pub mod enricher;
pub mod error;
pub mod http;

// Re-export primary types.
pub use config::EnrichmentConfig;
pub use contract::{EnrichedLedgerEntry, EnrichmentRequest};
pub use enricher::{Enricher, OfflineEnricher, StaticEnricher};
pub use error::{EnrichmentError, EnrichmentResult};
pub use http::HttpEnricher;
