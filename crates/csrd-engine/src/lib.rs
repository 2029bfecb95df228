//! # csrd-engine — Compliance Determination Pipeline
//!
//! The decision core of the CSRD Stack. One determination run takes a
//! company profile, its extracted disclosure claims, and an optional
//! financial context, and produces a complete report against the regulatory
//! knowledge snapshot:
//!
//! - **[`phase`]** places the company in its reporting wave
//!   (most-restrictive-first, N-of-3 size criteria).
//! - **[`resolver`]** turns the snapshot into the phase's concrete
//!   obligations, simplified-KPI substitution included.
//! - **[`claims`]** grades the evidence behind every obligation and
//!   aggregates the compliance score.
//! - **[`rubric`]** and **[`materiality`]** score the double-materiality
//!   ledger: keyword rubrics per topic, one financial score per run, EU
//!   taxonomy alignment, and the monetary exposure estimate.
//! - **[`recommend`]** ranks remediation work with a deterministic
//!   first-match priority table.
//! - **[`determine`]** wires the stages together and owns the
//!   enrichment-or-fallback discipline.
//!
//! Runs are pure: the snapshot is shared read-only behind `Arc`, no run
//! mutates shared state, and identical inputs produce byte-identical
//! reports.

pub mod claims;
pub mod determine;
pub mod materiality;
pub mod phase;
pub mod recommend;
pub mod resolver;
pub mod rubric;

// Re-export primary types.
pub use claims::{assess_claims, classify_claim, ClaimAssessment};
pub use determine::DeterminationEngine;
pub use materiality::{build_ledger, estimate_cost, financial_materiality_score, taxonomy_alignment};
pub use phase::classify_phase;
pub use recommend::{prioritize, CORE_FAMILIES};
pub use resolver::{Obligation, ObligationResolver};
pub use rubric::{rubric_for, Rubric, RubricOutcome, IMPACT_RUBRICS};
