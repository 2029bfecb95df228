//! # Regulatory Document Model
//!
//! Defines the document types that make up a knowledge snapshot:
//!
//! - [`RegulatoryDocument`]: one disclosure topic with its governing
//!   standards, mandate basis, itemized disclosures, and per-phase
//!   applicability.
//! - [`PhaseApplicability`]: the size thresholds and directive for one
//!   (document, phase) pair.
//! - [`PhaseDirective`]: the either/or of a first-collection-year gate and a
//!   simplified-KPI substitution list, modelled as a two-variant enum rather
//!   than two nullable fields.
//! - [`MandateBasis`]: unconditionally mandatory vs. mandatory-if-material,
//!   modelled as an enum so the exactly-one invariant holds by construction.
//!
//! Documents are immutable once loaded: the snapshot validates the set at
//! construction time and hands out shared references for the process
//! lifetime.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use csrd_core::{ReportingPhase, TopicId};

// ---------------------------------------------------------------------------
// MandateBasis
// ---------------------------------------------------------------------------

/// Basis on which a document's disclosures are required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MandateBasis {
    /// Required for every company in scope, regardless of materiality.
    Mandatory,
    /// Required only where the company's materiality assessment flags the
    /// topic as material.
    MandatoryIfMaterial,
}

impl MandateBasis {
    /// Whether the basis is unconditional.
    pub fn is_mandatory(&self) -> bool {
        matches!(self, Self::Mandatory)
    }
}

// ---------------------------------------------------------------------------
// Simplified KPIs
// ---------------------------------------------------------------------------

/// One KPI on a phase's simplified-disclosure substitution list.
///
/// Carries an explicit machine id so claim lookup works identically on the
/// simplified and full-disclosure paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SimplifiedKpi {
    /// Machine id the KPI is claimed under (for example `E1-6`).
    pub id: String,
    /// Human-readable KPI label.
    pub label: String,
}

impl SimplifiedKpi {
    /// Build a KPI entry.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// PhaseDirective
// ---------------------------------------------------------------------------

/// What a phase entry demands from companies in that phase.
///
/// A full-disclosure entry carries the year from which data collection is
/// required; a simplified entry substitutes a fixed KPI list for the
/// document's itemized disclosures. Exactly one applies per (document,
/// phase) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PhaseDirective {
    /// The full itemized disclosure list applies.
    FullDisclosure {
        /// First financial year for which data must be collected.
        first_collection_year: i32,
    },
    /// A simplified KPI list substitutes for the itemized disclosures.
    Simplified {
        /// The substitution list, in disclosure order.
        kpis: Vec<SimplifiedKpi>,
    },
}

impl PhaseDirective {
    /// The first-collection-year gate, when this is a full-disclosure entry.
    pub fn first_collection_year(&self) -> Option<i32> {
        match self {
            Self::FullDisclosure {
                first_collection_year,
            } => Some(*first_collection_year),
            Self::Simplified { .. } => None,
        }
    }

    /// Whether this entry substitutes simplified KPIs.
    pub fn is_simplified(&self) -> bool {
        matches!(self, Self::Simplified { .. })
    }
}

// ---------------------------------------------------------------------------
// PhaseApplicability
// ---------------------------------------------------------------------------

/// Size thresholds and directive for one (document, phase) pair.
///
/// A company qualifies for the phase when it meets at least
/// `criteria_required` of the three minimum thresholds. The maximum employee
/// bound, when present, is a hard gate: exceeding it disqualifies the phase
/// regardless of the count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PhaseApplicability {
    /// Minimum average employee count.
    pub min_employees: u32,
    /// Minimum net turnover in EUR.
    pub min_revenue: f64,
    /// Minimum balance-sheet total in EUR.
    pub min_assets: f64,
    /// Hard upper employee bound, when the phase targets smaller companies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_employees: Option<u32>,
    /// How many of the three minimum criteria must be met.
    #[serde(default = "default_criteria_required")]
    pub criteria_required: u8,
    /// What this phase demands from qualifying companies.
    pub directive: PhaseDirective,
}

fn default_criteria_required() -> u8 {
    2
}

// ---------------------------------------------------------------------------
// RegulatoryDocument
// ---------------------------------------------------------------------------

/// One disclosure topic in the regulatory document set.
///
/// A document with an empty disclosure list is purely procedural: it is
/// excluded from obligation resolution entirely. The single document with
/// `reference` set carries the canonical phase thresholds the classifier
/// reads and the first-collection-year gates the resolver checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RegulatoryDocument {
    /// Unique topic id, also the machine-id family prefix (for example `E1`).
    pub id: TopicId,
    /// Human-readable topic title (for example "Climate Change").
    pub title: String,
    /// Governing standard name(s), cited in remediation items.
    pub standards: Vec<String>,
    /// Whether the disclosures are unconditionally mandatory.
    pub mandate: MandateBasis,
    /// Ordered disclosure items, each a label carrying its machine-id token.
    #[serde(default)]
    pub disclosures: Vec<String>,
    /// Exactly one applicability entry per regulatory phase.
    pub applicability: BTreeMap<ReportingPhase, PhaseApplicability>,
    /// Marks the reference document carrying the canonical phase thresholds.
    #[serde(default)]
    pub reference: bool,
}

impl RegulatoryDocument {
    /// The applicability entry for a phase, if the document carries one.
    ///
    /// Validation guarantees every phase is represented, so a `None` here
    /// only occurs on an unvalidated document.
    pub fn applicability_for(&self, phase: ReportingPhase) -> Option<&PhaseApplicability> {
        self.applicability.get(&phase)
    }

    /// Whether the document has no itemized disclosures at all.
    pub fn is_procedural(&self) -> bool {
        self.disclosures.is_empty()
    }

    /// Citation string joining the governing standards.
    pub fn citation(&self) -> String {
        self.standards.join(", ")
    }
}
