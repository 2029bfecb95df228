//! # Obligation Resolution
//!
//! Turns the knowledge snapshot into the concrete disclosure obligations one
//! company owes for one reporting year. Resolution is phase-scoped: a
//! wave-three company sees the simplified KPI substitution lists where the
//! documents carry them, while wave-one and wave-two companies see the full
//! itemized disclosures.
//!
//! ## Machine Ids
//!
//! Claims address obligations by short machine id (`E1-6`, `S1-14`). Full
//! disclosure items embed the id in their label text; the resolver splits it
//! out with a compiled token pattern. Items without a recognizable token are
//! keyed `<document id>-<1-based ordinal>` so a claim can still reach them.
//! Simplified KPI entries carry explicit ids, so both paths produce
//! identically addressable obligations.

use csrd_core::domain::ReportingPhase;
use csrd_core::identity::TopicId;
use csrd_knowledge::document::{MandateBasis, PhaseDirective};
use csrd_knowledge::snapshot::KnowledgeSnapshot;
use regex::Regex;
use serde::Serialize;
use tracing::debug;

// ---------------------------------------------------------------------------
// Obligation
// ---------------------------------------------------------------------------

/// One concrete disclosure requirement owed by a company.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Obligation {
    /// Machine id claims are keyed by (for example `E1-6`).
    pub topic_id: TopicId,
    /// Id of the document this obligation came from (for example `E1`).
    pub document_id: TopicId,
    /// Human-readable requirement label, machine-id token removed.
    pub label: String,
    /// Mandate basis copied from the parent document.
    pub mandate: MandateBasis,
    /// True when this obligation came from a simplified KPI list.
    pub simplified: bool,
}

impl Obligation {
    /// Whether the obligation is unconditionally mandatory.
    pub fn is_mandatory(&self) -> bool {
        self.mandate.is_mandatory()
    }
}

// ---------------------------------------------------------------------------
// ObligationResolver
// ---------------------------------------------------------------------------

/// Resolves phase-scoped obligations from a knowledge snapshot.
///
/// Holds the compiled machine-id pattern; construct once and reuse.
#[derive(Debug)]
pub struct ObligationResolver {
    machine_id: Regex,
}

impl ObligationResolver {
    /// Create a resolver with the standard machine-id token pattern.
    pub fn new() -> Self {
        // First `<letters><digits>-<digits>` token in a label, e.g. "E1-6"
        // in "E1-6 Gross Scopes 1, 2, 3 and Total GHG emissions".
        let machine_id =
            Regex::new(r"\b([A-Za-z]+[0-9]+-[0-9]+)\b").expect("Invalid machine id regex");
        Self { machine_id }
    }

    /// Resolve every obligation `phase` owes for `reporting_year`.
    ///
    /// Ordered steps:
    ///
    /// 1. If the reference document's entry for the phase declares a first
    ///    data collection year later than `reporting_year`, the phase has
    ///    not taken effect — return an empty list.
    /// 2. Skip purely procedural documents (no itemized disclosures).
    /// 3. Where the phase entry substitutes simplified KPIs, emit one
    ///    obligation per KPI with the `simplified` flag set.
    /// 4. Otherwise emit one obligation per full disclosure item, splitting
    ///    the machine id out of the label.
    ///
    /// Output order follows document id order, then item order within each
    /// document, so repeated runs produce identical lists.
    pub fn resolve(
        &self,
        snapshot: &KnowledgeSnapshot,
        phase: ReportingPhase,
        reporting_year: i32,
    ) -> Vec<Obligation> {
        if let Some(reference) = snapshot.reference_document() {
            if let Some(entry) = reference.applicability_for(phase) {
                if let Some(year) = entry.directive.first_collection_year() {
                    if year > reporting_year {
                        debug!(
                            phase = %phase,
                            reporting_year,
                            first_collection_year = year,
                            "phase not yet in effect, no obligations"
                        );
                        return Vec::new();
                    }
                }
            }
        }

        let mut obligations = Vec::new();
        for document in snapshot.documents() {
            if document.is_procedural() {
                continue;
            }
            let Some(entry) = document.applicability_for(phase) else {
                continue;
            };

            match &entry.directive {
                PhaseDirective::Simplified { kpis } => {
                    for kpi in kpis {
                        obligations.push(Obligation {
                            topic_id: TopicId::new(kpi.id.clone()),
                            document_id: document.id.clone(),
                            label: kpi.label.clone(),
                            mandate: document.mandate,
                            simplified: true,
                        });
                    }
                }
                PhaseDirective::FullDisclosure { .. } => {
                    for (index, item) in document.disclosures.iter().enumerate() {
                        let (topic_id, label) = self.split_item(&document.id, index + 1, item);
                        obligations.push(Obligation {
                            topic_id,
                            document_id: document.id.clone(),
                            label,
                            mandate: document.mandate,
                            simplified: false,
                        });
                    }
                }
            }
        }

        debug!(
            phase = %phase,
            reporting_year,
            count = obligations.len(),
            "obligations resolved"
        );
        obligations
    }

    /// Split a disclosure item into its machine id and human label.
    ///
    /// Falls back to `<document id>-<ordinal>` when the label carries no
    /// recognizable token, keeping the full text as the label.
    fn split_item(&self, document_id: &TopicId, ordinal: usize, item: &str) -> (TopicId, String) {
        match self.machine_id.find(item) {
            Some(token) => {
                let id = TopicId::new(token.as_str());
                let prefix = item[..token.start()].trim();
                let suffix = item[token.end()..]
                    .trim()
                    .trim_start_matches([':', '-', '–'])
                    .trim_start();
                // A removed mid-label token takes its surrounding
                // whitespace with it.
                let label = match (prefix.is_empty(), suffix.is_empty()) {
                    (true, _) => suffix.to_string(),
                    (_, true) => prefix.to_string(),
                    (false, false) => format!("{prefix} {suffix}"),
                };
                (id, label)
            }
            None => (
                TopicId::new(format!("{document_id}-{ordinal}")),
                item.trim().to_string(),
            ),
        }
    }
}

impl Default for ObligationResolver {
    fn default() -> Self {
        Self::new()
    }
}
