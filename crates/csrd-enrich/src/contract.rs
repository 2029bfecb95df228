//! # Enrichment Wire Contract
//!
//! Request and response shapes for the optional text-completion service.
//!
//! The request carries the run's claims and financial context. The response
//! must deserialize as a JSON array of [`EnrichedLedgerEntry`] — the same
//! shape as the deterministic ledger minus the entry id, which the engine
//! always re-derives locally. Anything else is rejected wholesale and the
//! run falls back to the deterministic path.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use csrd_core::{
    ComplianceStatus, DisclosureClaim, FinancialContext, MaterialityLevel, TopicId,
};

/// The payload sent to the enrichment service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct EnrichmentRequest {
    /// Extracted claims keyed by obligation machine id.
    pub claims: BTreeMap<TopicId, DisclosureClaim>,
    /// Financial figures, when the intake supplied them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub financial_context: Option<FinancialContext>,
}

/// One ledger entry as returned by the enrichment service.
///
/// Mirrors the deterministic ledger entry without the id field: entry ids
/// are derived locally from the topic id and never taken from the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct EnrichedLedgerEntry {
    /// The scored topic.
    pub topic_id: TopicId,
    /// Human-readable topic label.
    pub label: String,
    /// Impact-materiality level assigned by the service.
    pub impact_materiality: MaterialityLevel,
    /// Financial-materiality level assigned by the service.
    pub financial_materiality: MaterialityLevel,
    /// Compliance status assigned by the service.
    pub status: ComplianceStatus,
    /// Provenance tag of the evidence, if the service carried one through.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provenance: Option<String>,
    /// Evidence text backing the status, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence: Option<String>,
}
