//! # Classification Scales — Single Source of Truth
//!
//! Defines the enums shared by every crate in the workspace: the regulatory
//! roll-out phase, the per-obligation compliance status, the double-materiality
//! level scale, the taxonomy alignment status, and the remediation priority.
//! One definition each, exhaustive `match` everywhere — no independent status
//! lists that can diverge between the resolver, the scoring engine, and the
//! recommendation output.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Reporting phase
// ---------------------------------------------------------------------------

/// A regulatory roll-out wave gating which companies must report and from
/// which year.
///
/// Variant order is significant: [`ReportingPhase::all`] yields phases from
/// most restrictive to least restrictive, which is the order the classifier
/// evaluates them in. A company can numerically satisfy several phases'
/// thresholds at once; only the first (strictest) match applies. The derived
/// `Ord` follows the same order, so phase-keyed `BTreeMap`s iterate most
/// restrictive first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ReportingPhase {
    /// Wave 1: large public-interest entities (earliest reporters).
    LargePie,
    /// Wave 2: other large undertakings.
    LargeUndertaking,
    /// Wave 3: listed small and medium-sized enterprises.
    ListedSme,
}

impl ReportingPhase {
    /// All phases, most restrictive first.
    pub fn all() -> &'static [ReportingPhase] {
        &[Self::LargePie, Self::LargeUndertaking, Self::ListedSme]
    }

    /// The total number of reporting phases.
    pub const COUNT: usize = 3;

    /// The fallback phase for companies that meet no phase's size test.
    pub fn least_restrictive() -> Self {
        Self::ListedSme
    }

    /// Canonical snake_case form, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LargePie => "large_pie",
            Self::LargeUndertaking => "large_undertaking",
            Self::ListedSme => "listed_sme",
        }
    }

    /// Human-readable size category label for score summaries.
    pub fn size_category(&self) -> &'static str {
        match self {
            Self::LargePie => "Large Public Interest Entity",
            Self::LargeUndertaking => "Large Undertaking",
            Self::ListedSme => "Listed SME",
        }
    }
}

impl std::fmt::Display for ReportingPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ReportingPhase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "large_pie" => Ok(Self::LargePie),
            "large_undertaking" => Ok(Self::LargeUndertaking),
            "listed_sme" => Ok(Self::ListedSme),
            other => Err(format!(
                "unknown reporting phase {other:?} (expected large_pie, large_undertaking, or listed_sme)"
            )),
        }
    }
}

// ---------------------------------------------------------------------------
// Compliance status
// ---------------------------------------------------------------------------

/// Disclosure status of one obligation or scored topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceStatus {
    /// The disclosure is present with sufficient confidence.
    Disclosed,
    /// The disclosure is present but incomplete or weakly evidenced.
    Partial,
    /// No usable disclosure was located.
    Missing,
    /// The topic fails the entity-wide financial materiality screen.
    NonCompliant,
}

impl ComplianceStatus {
    /// All statuses.
    pub fn all() -> &'static [ComplianceStatus] {
        &[
            Self::Disclosed,
            Self::Partial,
            Self::Missing,
            Self::NonCompliant,
        ]
    }

    /// Canonical snake_case form, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Disclosed => "disclosed",
            Self::Partial => "partial",
            Self::Missing => "missing",
            Self::NonCompliant => "non_compliant",
        }
    }

    /// Whether this status counts against the company in exposure math.
    pub fn is_breach(&self) -> bool {
        matches!(self, Self::Missing | Self::NonCompliant)
    }
}

impl std::fmt::Display for ComplianceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Materiality level
// ---------------------------------------------------------------------------

/// Materiality level on the shared 0-100 scale used by both the impact and
/// the financial dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialityLevel {
    /// Score >= 70.
    High,
    /// Score >= 40.
    Medium,
    /// Score >= 20.
    Low,
    /// Score below 20.
    NotMaterial,
}

impl MaterialityLevel {
    /// Map a 0-100 materiality score onto the level scale.
    pub fn from_score(score: f64) -> Self {
        if score >= 70.0 {
            Self::High
        } else if score >= 40.0 {
            Self::Medium
        } else if score >= 20.0 {
            Self::Low
        } else {
            Self::NotMaterial
        }
    }

    /// Canonical snake_case form, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
            Self::NotMaterial => "not_material",
        }
    }
}

impl std::fmt::Display for MaterialityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Taxonomy alignment status
// ---------------------------------------------------------------------------

/// Classification of the taxonomy alignment percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlignmentStatus {
    /// Alignment percentage >= 60.
    Aligned,
    /// Alignment percentage >= 20.
    PartiallyAligned,
    /// Alignment percentage below 20.
    NonCompliant,
}

impl AlignmentStatus {
    /// Map an alignment percentage onto the status scale.
    pub fn from_pct(pct: f64) -> Self {
        if pct >= 60.0 {
            Self::Aligned
        } else if pct >= 20.0 {
            Self::PartiallyAligned
        } else {
            Self::NonCompliant
        }
    }

    /// Canonical snake_case form, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Aligned => "aligned",
            Self::PartiallyAligned => "partially_aligned",
            Self::NonCompliant => "non_compliant",
        }
    }
}

impl std::fmt::Display for AlignmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Remediation priority
// ---------------------------------------------------------------------------

/// Priority of one remediation item.
///
/// Always derived deterministically from the obligation's status, mandate,
/// and topic family. A priority supplied by an enrichment service is parsed
/// and then discarded; it never reaches a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Mandatory disclosures and missing core-family topics.
    Critical,
    /// Remaining missing topics and weak core-family disclosures.
    High,
    /// Incomplete disclosures on conditionally mandatory topics.
    Moderate,
    /// Reserved for advisory findings.
    Low,
}

impl Priority {
    /// Ascending sort rank: critical < high < moderate < low.
    pub fn rank(&self) -> u8 {
        match self {
            Self::Critical => 0,
            Self::High => 1,
            Self::Moderate => 2,
            Self::Low => 3,
        }
    }

    /// All priorities in ascending rank order.
    pub fn all() -> &'static [Priority] {
        &[Self::Critical, Self::High, Self::Moderate, Self::Low]
    }

    /// Canonical snake_case form, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Moderate => "moderate",
            Self::Low => "low",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
