//! # Determination Report
//!
//! Output value objects for one determination run: the obligation ledger,
//! the score summary, gap records, the taxonomy assessment, the monetary
//! exposure estimate, and the remediation list, wrapped in a single
//! [`DeterminationReport`] envelope together with the knowledge snapshot
//! version and digest for audit traceability.
//!
//! Every type here is created fresh per run and never mutated afterward.
//! Serialization is stable: identical inputs produce byte-identical JSON.

use serde::{Deserialize, Serialize};

use crate::domain::{AlignmentStatus, ComplianceStatus, MaterialityLevel, Priority, ReportingPhase};
use crate::error::CsrdResult;
use crate::identity::{LedgerEntryId, RemediationId, TopicId};

// ---------------------------------------------------------------------------
// Obligation ledger
// ---------------------------------------------------------------------------

/// The engine's primary output unit: one scored regulatory topic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ObligationLedgerEntry {
    /// Stable entry id, derived from the topic id.
    pub id: LedgerEntryId,
    /// The scored topic.
    pub topic_id: TopicId,
    /// Human-readable topic label.
    pub label: String,
    /// Impact-materiality level of the topic's disclosure.
    pub impact_materiality: MaterialityLevel,
    /// Entity-wide financial-materiality level.
    pub financial_materiality: MaterialityLevel,
    /// Compliance status after precedence rules.
    pub status: ComplianceStatus,
    /// Provenance tag of the evidence claim, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provenance: Option<String>,
    /// Evidence text backing the status, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence: Option<String>,
}

impl ObligationLedgerEntry {
    /// Build an entry with its id derived from the topic id.
    pub fn new(
        topic_id: TopicId,
        label: impl Into<String>,
        impact_materiality: MaterialityLevel,
        financial_materiality: MaterialityLevel,
        status: ComplianceStatus,
    ) -> Self {
        Self {
            id: LedgerEntryId::from_topic(&topic_id),
            topic_id,
            label: label.into(),
            impact_materiality,
            financial_materiality,
            status,
            provenance: None,
            evidence: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Score summary
// ---------------------------------------------------------------------------

/// Aggregate compliance score over all applicable obligations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ComplianceScoreSummary {
    /// Overall score in `[0, 100]`.
    pub overall: u8,
    /// Human-readable size category of the company.
    pub size_category: String,
    /// Number of applicable obligations.
    pub applicable_count: u32,
    /// Obligations classified `disclosed`.
    pub disclosed_count: u32,
    /// Obligations classified `partial`.
    pub partial_count: u32,
    /// Obligations classified `missing`.
    pub missing_count: u32,
}

impl ComplianceScoreSummary {
    /// Build a summary from per-status counts, computing the overall score.
    ///
    /// `overall = round((disclosed + 0.5 * partial) / total * 100)`, zero
    /// when there are no applicable obligations.
    pub fn from_counts(
        size_category: impl Into<String>,
        disclosed_count: u32,
        partial_count: u32,
        missing_count: u32,
    ) -> Self {
        let applicable_count = disclosed_count + partial_count + missing_count;
        let overall = if applicable_count == 0 {
            0
        } else {
            let weighted = f64::from(disclosed_count) + 0.5 * f64::from(partial_count);
            (weighted / f64::from(applicable_count) * 100.0).round() as u8
        };
        Self {
            overall,
            size_category: size_category.into(),
            applicable_count,
            disclosed_count,
            partial_count,
            missing_count,
        }
    }

    /// Whether the per-status counts sum to the applicable total.
    pub fn counts_consistent(&self) -> bool {
        self.disclosed_count + self.partial_count + self.missing_count == self.applicable_count
    }
}

// ---------------------------------------------------------------------------
// Gap records
// ---------------------------------------------------------------------------

/// One per-obligation finding from the claim classifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct GapRecord {
    /// The obligation's machine id.
    pub topic_id: TopicId,
    /// Status assigned by the claim classifier.
    pub status: ComplianceStatus,
    /// Human-readable, status-specific wording.
    pub detail: String,
}

// ---------------------------------------------------------------------------
// Taxonomy assessment
// ---------------------------------------------------------------------------

/// Taxonomy alignment percentage and its status classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct TaxonomyAssessment {
    /// Alignment percentage in `[0, 100]`.
    pub alignment_pct: f64,
    /// Status derived from the percentage.
    pub status: AlignmentStatus,
}

impl TaxonomyAssessment {
    /// Build an assessment from a raw percentage, clamping to `[0, 100]`.
    pub fn from_pct(pct: f64) -> Self {
        let alignment_pct = if pct.is_finite() {
            pct.clamp(0.0, 100.0)
        } else {
            0.0
        };
        Self {
            alignment_pct,
            status: AlignmentStatus::from_pct(alignment_pct),
        }
    }
}

// ---------------------------------------------------------------------------
// Cost estimate
// ---------------------------------------------------------------------------

/// Monetary exposure estimate.
///
/// The point form is produced when the financial context supplies a revenue
/// figure; the lighter intake mode falls back to a band over the profile
/// revenue with an explicit caveat. The two forms have disjoint required
/// fields, so the untagged representation is unambiguous on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CostEstimate {
    /// A single projected fine.
    Point {
        /// Projected fine in EUR.
        projected_fine: f64,
        /// How the figure was derived.
        basis: String,
    },
    /// A fine band for low-confidence intake.
    Range {
        /// Lower bound in EUR.
        range_low: f64,
        /// Upper bound in EUR.
        range_high: f64,
        /// How the band was derived.
        basis: String,
        /// Why only a band could be produced.
        caveat: String,
    },
}

impl CostEstimate {
    /// A point estimate.
    pub fn point(projected_fine: f64, basis: impl Into<String>) -> Self {
        Self::Point {
            projected_fine,
            basis: basis.into(),
        }
    }

    /// A band estimate with its caveat.
    pub fn range(
        range_low: f64,
        range_high: f64,
        basis: impl Into<String>,
        caveat: impl Into<String>,
    ) -> Self {
        Self::Range {
            range_low,
            range_high,
            basis: basis.into(),
            caveat: caveat.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Remediation items
// ---------------------------------------------------------------------------

/// One prioritized, human-actionable remediation step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RemediationItem {
    /// Stable item id, derived from the topic id.
    pub id: RemediationId,
    /// Priority, always derived deterministically.
    pub priority: Priority,
    /// The obligation's machine id.
    pub topic_id: TopicId,
    /// Short action title.
    pub title: String,
    /// What to do and why it matters.
    pub description: String,
    /// Regulatory citation backing the recommendation.
    pub citation: String,
}

impl RemediationItem {
    /// Build an item with its id derived from the topic id.
    pub fn new(
        priority: Priority,
        topic_id: TopicId,
        title: impl Into<String>,
        description: impl Into<String>,
        citation: impl Into<String>,
    ) -> Self {
        Self {
            id: RemediationId::from_topic(&topic_id),
            priority,
            topic_id,
            title: title.into(),
            description: description.into(),
            citation: citation.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Report envelope
// ---------------------------------------------------------------------------

/// The complete output of one determination run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DeterminationReport {
    /// Classified reporting phase.
    pub phase: ReportingPhase,
    /// Aggregate score over the resolved obligations.
    pub summary: ComplianceScoreSummary,
    /// One scored ledger entry per materiality topic.
    pub ledger: Vec<ObligationLedgerEntry>,
    /// One gap record per resolved obligation.
    pub gaps: Vec<GapRecord>,
    /// Taxonomy alignment assessment.
    pub taxonomy: TaxonomyAssessment,
    /// Monetary exposure estimate.
    pub cost_estimate: CostEstimate,
    /// Remediation items sorted by ascending priority rank.
    pub recommendations: Vec<RemediationItem>,
    /// Version of the knowledge snapshot the run used.
    pub snapshot_version: String,
    /// Content digest of the knowledge snapshot the run used.
    pub snapshot_digest: String,
}

impl DeterminationReport {
    /// Serialize the report as pretty-printed JSON.
    ///
    /// Field order is fixed by the struct definitions and all maps in the
    /// pipeline are ordered, so identical runs produce identical bytes.
    pub fn to_json(&self) -> CsrdResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Score summary ────────────────────────────────────────────────

    #[test]
    fn from_counts_weights_partial_at_half() {
        let summary = ComplianceScoreSummary::from_counts("Large Undertaking", 2, 1, 1);
        assert_eq!(summary.applicable_count, 4);
        // (2 + 0.5) / 4 * 100 = 62.5, rounds to 63.
        assert_eq!(summary.overall, 63);
        assert!(summary.counts_consistent());
    }

    #[test]
    fn from_counts_zero_total_scores_zero() {
        let summary = ComplianceScoreSummary::from_counts("Listed SME", 0, 0, 0);
        assert_eq!(summary.overall, 0);
        assert_eq!(summary.applicable_count, 0);
        assert!(summary.counts_consistent());
    }

    #[test]
    fn from_counts_all_disclosed_scores_hundred() {
        let summary = ComplianceScoreSummary::from_counts("Large Public Interest Entity", 7, 0, 0);
        assert_eq!(summary.overall, 100);
    }

    #[test]
    fn counts_consistent_detects_drift() {
        let mut summary = ComplianceScoreSummary::from_counts("Listed SME", 3, 2, 1);
        summary.applicable_count = 9;
        assert!(!summary.counts_consistent());
    }

    // ── Taxonomy assessment ──────────────────────────────────────────

    #[test]
    fn taxonomy_assessment_clamps_pct() {
        assert_eq!(TaxonomyAssessment::from_pct(140.0).alignment_pct, 100.0);
        assert_eq!(TaxonomyAssessment::from_pct(-5.0).alignment_pct, 0.0);
        assert_eq!(TaxonomyAssessment::from_pct(f64::NAN).alignment_pct, 0.0);
    }

    #[test]
    fn taxonomy_assessment_classifies_pct() {
        let assessment = TaxonomyAssessment::from_pct(35.0);
        assert_eq!(assessment.status, AlignmentStatus::PartiallyAligned);
        assert_eq!(
            TaxonomyAssessment::from_pct(60.0).status,
            AlignmentStatus::Aligned
        );
        assert_eq!(
            TaxonomyAssessment::from_pct(19.9).status,
            AlignmentStatus::NonCompliant
        );
    }

    // ── Cost estimate ────────────────────────────────────────────────

    #[test]
    fn point_estimate_serializes_projected_fine() {
        let estimate = CostEstimate::point(4_166_666.67, "5% of revenue, weighted by gap ratio");
        let json = serde_json::to_string(&estimate).unwrap();
        assert!(json.contains("\"projected_fine\""));
        assert!(!json.contains("\"range_low\""));
        let back: CostEstimate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, estimate);
    }

    #[test]
    fn range_estimate_round_trips_through_untagged_form() {
        let estimate = CostEstimate::range(
            1_000_000.0,
            5_000_000.0,
            "1%-5% of profile revenue",
            "no financial context supplied",
        );
        let json = serde_json::to_string(&estimate).unwrap();
        let back: CostEstimate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, estimate);
        assert!(matches!(back, CostEstimate::Range { .. }));
    }

    // ── Ledger and report envelope ───────────────────────────────────

    #[test]
    fn ledger_entry_id_tracks_topic() {
        let entry = ObligationLedgerEntry::new(
            TopicId::from("E1"),
            "Climate Change",
            MaterialityLevel::High,
            MaterialityLevel::Medium,
            ComplianceStatus::Disclosed,
        );
        assert_eq!(entry.id, LedgerEntryId::from_topic(&TopicId::from("E1")));
        assert!(entry.provenance.is_none());
    }

    #[test]
    fn report_round_trips_through_json() {
        let report = DeterminationReport {
            phase: ReportingPhase::LargeUndertaking,
            summary: ComplianceScoreSummary::from_counts("Large Undertaking", 1, 1, 1),
            ledger: vec![ObligationLedgerEntry::new(
                TopicId::from("E1"),
                "Climate Change",
                MaterialityLevel::Medium,
                MaterialityLevel::Low,
                ComplianceStatus::Partial,
            )],
            gaps: vec![GapRecord {
                topic_id: TopicId::from("E1-1"),
                status: ComplianceStatus::Missing,
                detail: "No disclosure located for Transition plan for climate change mitigation"
                    .to_string(),
            }],
            taxonomy: TaxonomyAssessment::from_pct(35.0),
            cost_estimate: CostEstimate::point(4_166_666.67, "5% of revenue, weighted by gap ratio"),
            recommendations: vec![RemediationItem::new(
                Priority::Critical,
                TopicId::from("E1-1"),
                "Publish a climate transition plan",
                "Disclose the transition plan required under the climate standard.",
                "ESRS E1",
            )],
            snapshot_version: "2024.1".to_string(),
            snapshot_digest: "a".repeat(64),
        };
        let json = report.to_json().unwrap();
        let back: DeterminationReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }

    #[test]
    fn identical_reports_serialize_identically() {
        let build = || DeterminationReport {
            phase: ReportingPhase::ListedSme,
            summary: ComplianceScoreSummary::from_counts("Listed SME", 0, 0, 2),
            ledger: Vec::new(),
            gaps: Vec::new(),
            taxonomy: TaxonomyAssessment::from_pct(0.0),
            cost_estimate: CostEstimate::range(
                100_000.0,
                500_000.0,
                "1%-5% of profile revenue",
                "no financial context supplied",
            ),
            recommendations: Vec::new(),
            snapshot_version: "2024.1".to_string(),
            snapshot_digest: "b".repeat(64),
        };
        assert_eq!(build().to_json().unwrap(), build().to_json().unwrap());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// The overall score stays in [0, 100] and the counts stay consistent
        /// for any realistic count mix.
        #[test]
        fn summary_score_is_always_bounded(
            disclosed in 0u32..=10_000,
            partial in 0u32..=10_000,
            missing in 0u32..=10_000,
        ) {
            let summary =
                ComplianceScoreSummary::from_counts("Large Undertaking", disclosed, partial, missing);
            prop_assert!(summary.overall <= 100);
            prop_assert!(summary.counts_consistent());
        }

        /// The alignment percentage is clamped to [0, 100] for any raw float.
        #[test]
        fn taxonomy_pct_is_always_clamped(pct in any::<f64>()) {
            let assessment = TaxonomyAssessment::from_pct(pct);
            prop_assert!((0.0..=100.0).contains(&assessment.alignment_pct));
        }
    }
}
