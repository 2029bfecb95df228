//! # Double-Materiality Assessment
//!
//! Scores each rubric-covered topic on two independent axes and folds the
//! pair into a per-topic compliance status:
//!
//! - **Impact materiality** grades the disclosed text against the topic's
//!   keyword rubric (see [`crate::rubric`]); each topic scores on its own.
//! - **Financial materiality** is computed once per run from the capital
//!   expenditure figures and shared by every topic — the entity either has
//!   credible transition finance or it does not.
//!
//! The module also derives the run's EU-taxonomy alignment and the monetary
//! exposure estimate, both from the same financial context.

use std::collections::BTreeMap;

use csrd_core::domain::{ComplianceStatus, MaterialityLevel};
use csrd_core::identity::TopicId;
use csrd_core::inputs::{CompanyProfile, DisclosureClaim, FinancialContext};
use csrd_core::report::{CostEstimate, ObligationLedgerEntry, TaxonomyAssessment};

use crate::rubric::{RubricOutcome, IMPACT_RUBRICS};

/// Financial score below which every topic is vetoed to `non_compliant`.
pub const FINANCIAL_VETO_THRESHOLD: f64 = 20.0;

/// Statutory penalty rate applied to the revenue share in breach.
pub const PENALTY_RATE: f64 = 0.05;
/// Lower penalty rate bounding the range estimate in lighter intake mode.
pub const PENALTY_RATE_LOW: f64 = 0.01;

// ---------------------------------------------------------------------------
// Financial materiality
// ---------------------------------------------------------------------------

/// The entity-wide financial materiality score.
///
/// Additive terms over the capital expenditure figures:
///
/// | Term | Points |
/// |---|---|
/// | total CapEx present and positive | +20 |
/// | green/total ratio > 0.30 | +40 |
/// | green/total ratio > 0.15 (exclusive with the tier above) | +30 |
/// | green/total ratio < 0.10 | −30 |
/// | green figure missing | −20 |
///
/// A missing or non-positive total clamps the score to 0 outright, as does
/// an absent context: without credible expenditure figures the entity has no
/// demonstrated transition finance.
pub fn financial_materiality_score(context: Option<&FinancialContext>) -> f64 {
    let Some(context) = context else {
        return 0.0;
    };
    let has_total = context
        .capex_total
        .is_some_and(|total| total.is_finite() && total > 0.0);
    if !has_total {
        return 0.0;
    }

    let mut score = 20.0;
    match context.green_capex_ratio() {
        Some(ratio) if ratio > 0.30 => score += 40.0,
        Some(ratio) if ratio > 0.15 => score += 30.0,
        Some(ratio) if ratio < 0.10 => score -= 30.0,
        Some(_) => {}
        // Total is present, so a missing ratio means the green figure is.
        None => score -= 20.0,
    }
    score
}

// ---------------------------------------------------------------------------
// Per-topic status
// ---------------------------------------------------------------------------

/// Fold the two materiality axes into a compliance status.
///
/// Evaluated strictly in this order:
///
/// 1. financial score below the veto threshold → `non_compliant`;
/// 2. null disclosed value → `missing`;
/// 3. impact score ≥ 70 → `disclosed` (value presence established above);
/// 4. impact score ≥ 40 → `partial`;
/// 5. otherwise → `missing`.
fn status_for(
    financial_score: f64,
    claim: Option<&DisclosureClaim>,
    impact_score: u8,
) -> ComplianceStatus {
    if financial_score < FINANCIAL_VETO_THRESHOLD {
        return ComplianceStatus::NonCompliant;
    }
    if !claim.is_some_and(DisclosureClaim::has_value) {
        return ComplianceStatus::Missing;
    }
    if impact_score >= 70 {
        ComplianceStatus::Disclosed
    } else if impact_score >= 40 {
        ComplianceStatus::Partial
    } else {
        ComplianceStatus::Missing
    }
}

// ---------------------------------------------------------------------------
// Ledger construction
// ---------------------------------------------------------------------------

/// Build the deterministic materiality ledger: one entry per impact rubric,
/// in rubric order, regardless of which claims were supplied.
pub fn build_ledger(
    claims: &BTreeMap<TopicId, DisclosureClaim>,
    financial_score: f64,
) -> Vec<ObligationLedgerEntry> {
    let financial_level = MaterialityLevel::from_score(financial_score);

    IMPACT_RUBRICS
        .iter()
        .map(|rubric| {
            let topic = TopicId::new(rubric.topic);
            let claim = claims.get(&topic);
            let outcome = claim.map(|c| rubric.score(c)).unwrap_or_default();
            let status = status_for(financial_score, claim, outcome.score);

            let mut entry = ObligationLedgerEntry::new(
                topic,
                rubric.label,
                MaterialityLevel::from_score(f64::from(outcome.score)),
                financial_level,
                status,
            );
            entry.provenance = claim.and_then(|c| c.provenance.clone());
            entry.evidence = evidence_text(&outcome, claim);
            entry
        })
        .collect()
}

/// Evidence wording: the raw impact score plus the rubric terms that fired.
fn evidence_text(outcome: &RubricOutcome, claim: Option<&DisclosureClaim>) -> Option<String> {
    let claim = claim?;
    if !claim.has_value() {
        return None;
    }
    if outcome.fired.is_empty() {
        Some(format!("impact score {}", outcome.score))
    } else {
        Some(format!(
            "impact score {}: {}",
            outcome.score,
            outcome.fired.join(", ")
        ))
    }
}

// ---------------------------------------------------------------------------
// Taxonomy alignment
// ---------------------------------------------------------------------------

/// EU-taxonomy alignment over the CapEx pair.
///
/// `pct = green / total * 100`, clamped to `[0, 100]`; 0 whenever either
/// figure is unusable.
pub fn taxonomy_alignment(context: Option<&FinancialContext>) -> TaxonomyAssessment {
    let pct = context
        .and_then(FinancialContext::green_capex_ratio)
        .map_or(0.0, |ratio| ratio * 100.0);
    TaxonomyAssessment::from_pct(pct)
}

// ---------------------------------------------------------------------------
// Monetary exposure
// ---------------------------------------------------------------------------

/// Estimate the fine exposure implied by the ledger.
///
/// `fine = revenue × (breach_count / total_topics) × rate`, with
/// `total_topics` floored at 1 and a breach being `missing` or
/// `non_compliant`. With reported revenue in the financial context the
/// estimate is a point figure at the statutory 5% rate; otherwise it falls
/// back to the company profile's revenue and widens to the 1%–5% band, with
/// a caveat naming the weaker source.
pub fn estimate_cost(
    ledger: &[ObligationLedgerEntry],
    context: Option<&FinancialContext>,
    profile: &CompanyProfile,
) -> CostEstimate {
    let total = ledger.len().max(1);
    let breaches = ledger.iter().filter(|e| e.status.is_breach()).count();
    let share = breaches as f64 / total as f64;

    let reported_revenue = context
        .and_then(|ctx| ctx.revenue)
        .filter(|revenue| revenue.is_finite() && *revenue > 0.0);

    match reported_revenue {
        Some(revenue) => CostEstimate::point(
            revenue * share * PENALTY_RATE,
            format!("{breaches} of {total} scored topics in breach at a 5% penalty rate"),
        ),
        None => {
            let revenue = profile.sanitized().revenue;
            CostEstimate::range(
                revenue * share * PENALTY_RATE_LOW,
                revenue * share * PENALTY_RATE,
                format!("{breaches} of {total} scored topics in breach across the 1%-5% penalty band"),
                "revenue taken from the company profile; no audited figure was supplied",
            )
        }
    }
}
