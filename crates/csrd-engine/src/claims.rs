//! # Claim Classification
//!
//! Grades the evidence behind each resolved obligation. Every obligation
//! gets exactly one status:
//!
//! | Status | Condition |
//! |---|---|
//! | `disclosed` | confidence ≥ 0.7 **and** a non-null disclosed value |
//! | `partial` | 0.3 ≤ confidence < 0.7 (value may be null) |
//! | `missing` | everything else, including a high-confidence null value |
//!
//! Confidence alone never substantiates a disclosure: a claim at 0.95
//! without a value is still `missing`. An obligation without any claim at
//! all is likewise `missing`.

use std::collections::BTreeMap;

use csrd_core::domain::ComplianceStatus;
use csrd_core::identity::TopicId;
use csrd_core::inputs::DisclosureClaim;
use csrd_core::report::{ComplianceScoreSummary, GapRecord};

use crate::resolver::Obligation;

/// Confidence at or above which a claim with a value counts as disclosed.
pub const DISCLOSED_CONFIDENCE: f64 = 0.7;
/// Confidence at or above which a claim counts as at least partial.
pub const PARTIAL_CONFIDENCE: f64 = 0.3;

/// Classify a single claim.
pub fn classify_claim(claim: &DisclosureClaim) -> ComplianceStatus {
    let confidence = claim.effective_confidence();
    if confidence >= DISCLOSED_CONFIDENCE && claim.has_value() {
        ComplianceStatus::Disclosed
    } else if (PARTIAL_CONFIDENCE..DISCLOSED_CONFIDENCE).contains(&confidence) {
        ComplianceStatus::Partial
    } else {
        ComplianceStatus::Missing
    }
}

/// Everything the claim classifier produces for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct ClaimAssessment {
    /// Aggregate score and per-status counts.
    pub summary: ComplianceScoreSummary,
    /// One finding per obligation, in obligation order.
    pub gaps: Vec<GapRecord>,
    /// Status per obligation machine id, for downstream stages.
    pub statuses: BTreeMap<TopicId, ComplianceStatus>,
}

/// Classify every obligation against the supplied claims.
///
/// `size_category` labels the summary; it comes from the classified phase.
pub fn assess_claims(
    obligations: &[Obligation],
    claims: &BTreeMap<TopicId, DisclosureClaim>,
    size_category: &str,
) -> ClaimAssessment {
    let mut statuses = BTreeMap::new();
    let mut gaps = Vec::with_capacity(obligations.len());
    let mut disclosed = 0u32;
    let mut partial = 0u32;
    let mut missing = 0u32;

    for obligation in obligations {
        let claim = claims.get(&obligation.topic_id);
        let status = match claim {
            Some(claim) => classify_claim(claim),
            None => ComplianceStatus::Missing,
        };
        match status {
            ComplianceStatus::Disclosed => disclosed += 1,
            ComplianceStatus::Partial => partial += 1,
            ComplianceStatus::Missing | ComplianceStatus::NonCompliant => missing += 1,
        }
        gaps.push(GapRecord {
            topic_id: obligation.topic_id.clone(),
            status,
            detail: gap_detail(obligation, claim, status),
        });
        statuses.insert(obligation.topic_id.clone(), status);
    }

    ClaimAssessment {
        summary: ComplianceScoreSummary::from_counts(size_category, disclosed, partial, missing),
        gaps,
        statuses,
    }
}

/// Status-specific wording for one finding.
fn gap_detail(
    obligation: &Obligation,
    claim: Option<&DisclosureClaim>,
    status: ComplianceStatus,
) -> String {
    match (status, claim) {
        (ComplianceStatus::Disclosed, _) => {
            format!("{}: requirement substantiated", obligation.label)
        }
        (ComplianceStatus::Partial, Some(claim)) => format!(
            "{}: partially substantiated at confidence {:.2}",
            obligation.label,
            claim.effective_confidence()
        ),
        // A partial status always has a claim behind it; cover the arm anyway.
        (ComplianceStatus::Partial, None) => {
            format!("{}: partially substantiated", obligation.label)
        }
        (_, None) => format!("{}: no claim extracted", obligation.label),
        (_, Some(claim)) if !claim.has_value() => format!(
            "{}: claim carries no disclosed value (confidence {:.2})",
            obligation.label,
            claim.effective_confidence()
        ),
        (_, Some(claim)) => format!(
            "{}: confidence {:.2} below the reporting threshold",
            obligation.label,
            claim.effective_confidence()
        ),
    }
}
