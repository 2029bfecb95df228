//! # Reporting Phase Classification
//!
//! Places a company into the CSRD phase-in wave its size warrants. Phases
//! are evaluated strictly most-restrictive-first because a large company
//! numerically satisfies every smaller wave's thresholds too; only the first
//! match counts. A company matching no wave falls back to the least
//! restrictive phase so classification is total.

use csrd_core::domain::ReportingPhase;
use csrd_core::inputs::CompanyProfile;
use csrd_knowledge::document::PhaseApplicability;
use csrd_knowledge::snapshot::KnowledgeSnapshot;
use tracing::debug;

/// Classify a company into its reporting phase.
///
/// Thresholds come from the snapshot's reference document, so an
/// operator-supplied document set can move the waves without touching code.
/// The profile is sanitized first: negative or non-finite figures count as
/// zero, which lands undersized input in the small-entity fallback rather
/// than failing the run.
///
/// Each phase qualifies on an *N-of-3* test over the employee, revenue, and
/// asset minimums (`criteria_required` per phase entry). A maximum-employee
/// bound, when present, is a hard gate: exceeding it disqualifies the phase
/// outright, regardless of how many minimums are met.
pub fn classify_phase(snapshot: &KnowledgeSnapshot, profile: &CompanyProfile) -> ReportingPhase {
    let profile = profile.sanitized();

    let Some(reference) = snapshot.reference_document() else {
        // Validation rejects snapshots without a reference document, so this
        // only triggers on an unvalidated hand-built snapshot.
        debug!("no reference document in snapshot, defaulting to least restrictive phase");
        return ReportingPhase::least_restrictive();
    };

    for &phase in ReportingPhase::all() {
        let Some(entry) = reference.applicability_for(phase) else {
            continue;
        };
        if qualifies(entry, &profile) {
            debug!(
                phase = %phase,
                employees = profile.employees,
                revenue = profile.revenue,
                total_assets = profile.total_assets,
                "phase classified"
            );
            return phase;
        }
    }

    debug!(
        employees = profile.employees,
        revenue = profile.revenue,
        total_assets = profile.total_assets,
        "no phase thresholds met, using small-entity fallback"
    );
    ReportingPhase::least_restrictive()
}

/// N-of-3 test for one phase entry, with the maximum-employee hard gate.
fn qualifies(entry: &PhaseApplicability, profile: &CompanyProfile) -> bool {
    if let Some(max) = entry.max_employees {
        if profile.employees > max {
            return false;
        }
    }

    let mut met: u8 = 0;
    if profile.employees >= entry.min_employees {
        met += 1;
    }
    if profile.revenue >= entry.min_revenue {
        met += 1;
    }
    if profile.total_assets >= entry.min_assets {
        met += 1;
    }
    met >= entry.criteria_required
}
