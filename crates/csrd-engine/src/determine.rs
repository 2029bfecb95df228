//! # Determination Entry Point
//!
//! [`DeterminationEngine`] wires the pipeline together: phase
//! classification, obligation resolution, claim assessment, the
//! double-materiality ledger, monetary exposure, and remediation
//! prioritization, assembled into one [`DeterminationReport`].
//!
//! ## Enrichment Discipline
//!
//! The deterministic ledger is always built first. When an enricher is
//! attached, its response replaces the ledger only if it parses, covers
//! exactly the scored topic set, and matches the expected entry count; any
//! failure is logged as a warning and the deterministic ledger stands
//! untouched. Enrichment is attempted once per run, never retried, never
//! partially applied.
//!
//! ## Sharing
//!
//! The engine holds the knowledge snapshot behind `Arc` and never mutates
//! it, so one engine (or many, sharing the snapshot) can serve concurrent
//! runs; each run allocates its own ledger, summary, and recommendations.

use std::collections::BTreeSet;
use std::sync::Arc;

use csrd_core::identity::LedgerEntryId;
use csrd_core::inputs::DeterminationInput;
use csrd_core::report::{DeterminationReport, ObligationLedgerEntry};
use csrd_enrich::{
    EnrichedLedgerEntry, Enricher, EnrichmentError, EnrichmentRequest, EnrichmentResult,
};
use csrd_knowledge::snapshot::KnowledgeSnapshot;
use tracing::{debug, warn};

use crate::claims::assess_claims;
use crate::materiality::{
    build_ledger, estimate_cost, financial_materiality_score, taxonomy_alignment,
};
use crate::phase::classify_phase;
use crate::recommend::prioritize;
use crate::resolver::ObligationResolver;

/// The full determination pipeline over one shared knowledge snapshot.
#[derive(Debug)]
pub struct DeterminationEngine {
    snapshot: Arc<KnowledgeSnapshot>,
    resolver: ObligationResolver,
    enricher: Option<Box<dyn Enricher>>,
}

impl DeterminationEngine {
    /// Create an engine over a validated snapshot, without enrichment.
    pub fn new(snapshot: Arc<KnowledgeSnapshot>) -> Self {
        Self {
            snapshot,
            resolver: ObligationResolver::new(),
            enricher: None,
        }
    }

    /// Attach an enricher for ledger refinement.
    pub fn with_enricher(mut self, enricher: Box<dyn Enricher>) -> Self {
        self.enricher = Some(enricher);
        self
    }

    /// The snapshot this engine runs against.
    pub fn snapshot(&self) -> &KnowledgeSnapshot {
        &self.snapshot
    }

    /// Run one determination. Always completes with a full report; degraded
    /// inputs degrade the result, never the run.
    pub fn determine(&self, input: &DeterminationInput) -> DeterminationReport {
        let profile = input.company.sanitized();
        let phase = classify_phase(&self.snapshot, &profile);
        let obligations = self
            .resolver
            .resolve(&self.snapshot, phase, profile.reporting_year);
        let assessment = assess_claims(&obligations, &input.claims, phase.size_category());

        let financial_score = financial_materiality_score(input.financial_context.as_ref());
        let deterministic = build_ledger(&input.claims, financial_score);
        let ledger = match &self.enricher {
            Some(enricher) => self.enriched_or_fallback(enricher.as_ref(), input, deterministic),
            None => deterministic,
        };

        let taxonomy = taxonomy_alignment(input.financial_context.as_ref());
        let cost_estimate = estimate_cost(&ledger, input.financial_context.as_ref(), &profile);

        // Effective statuses: the claim classifier's verdicts, overridden by
        // the materiality ledger where a topic was rubric-scored.
        let mut statuses = assessment.statuses;
        for entry in &ledger {
            statuses.insert(entry.topic_id.clone(), entry.status);
        }
        let recommendations = prioritize(&self.snapshot, &obligations, &statuses);

        debug!(
            phase = %phase,
            overall = assessment.summary.overall,
            ledger_entries = ledger.len(),
            recommendations = recommendations.len(),
            "determination complete"
        );

        DeterminationReport {
            phase,
            summary: assessment.summary,
            ledger,
            gaps: assessment.gaps,
            taxonomy,
            cost_estimate,
            recommendations,
            snapshot_version: self.snapshot.version().to_string(),
            snapshot_digest: self.snapshot.digest().to_string(),
        }
    }

    /// The single try-else of the enrichment contract: the service's ledger
    /// on success, the deterministic one on any failure.
    fn enriched_or_fallback(
        &self,
        enricher: &dyn Enricher,
        input: &DeterminationInput,
        deterministic: Vec<ObligationLedgerEntry>,
    ) -> Vec<ObligationLedgerEntry> {
        let request = EnrichmentRequest {
            claims: input.claims.clone(),
            financial_context: input.financial_context.clone(),
        };
        match accept_enrichment(enricher, &request, &deterministic) {
            Ok(ledger) => {
                debug!(enricher = enricher.name(), "enriched ledger accepted");
                ledger
            }
            Err(error) => {
                warn!(
                    enricher = enricher.name(),
                    error = %error,
                    "enrichment failed, falling back to deterministic ledger"
                );
                deterministic
            }
        }
    }
}

/// Submit one enrichment request and validate the response against the
/// deterministic ledger: same entry count, same topic set. Entry ids are
/// re-derived locally and never taken from the service.
fn accept_enrichment(
    enricher: &dyn Enricher,
    request: &EnrichmentRequest,
    deterministic: &[ObligationLedgerEntry],
) -> EnrichmentResult<Vec<ObligationLedgerEntry>> {
    let entries = enricher.enrich(request)?;

    if entries.len() != deterministic.len() {
        return Err(EnrichmentError::CountMismatch {
            expected: deterministic.len(),
            actual: entries.len(),
        });
    }

    let expected: BTreeSet<&str> = deterministic.iter().map(|e| e.topic_id.as_str()).collect();
    let actual: BTreeSet<&str> = entries.iter().map(|e| e.topic_id.as_str()).collect();
    if expected != actual {
        return Err(EnrichmentError::SchemaMismatch {
            reason: format!(
                "response topics [{}] do not cover the scored set [{}]",
                itemize(&actual),
                itemize(&expected)
            ),
        });
    }

    Ok(entries.into_iter().map(into_ledger_entry).collect())
}

fn into_ledger_entry(entry: EnrichedLedgerEntry) -> ObligationLedgerEntry {
    ObligationLedgerEntry {
        id: LedgerEntryId::from_topic(&entry.topic_id),
        topic_id: entry.topic_id,
        label: entry.label,
        impact_materiality: entry.impact_materiality,
        financial_materiality: entry.financial_materiality,
        status: entry.status,
        provenance: entry.provenance,
        evidence: entry.evidence,
    }
}

fn itemize(topics: &BTreeSet<&str>) -> String {
    topics.iter().copied().collect::<Vec<_>>().join(", ")
}
