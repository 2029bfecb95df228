//! # Determination Inputs
//!
//! Caller-supplied value objects for one determination run: the company's
//! size figures, the extracted disclosure claims, and the optional financial
//! context. All of these arrive from upstream collaborators (intake API,
//! document extraction) and are read-only to the engine.
//!
//! ## Lenient intake
//!
//! Missing or invalid company inputs never abort a run. Every numeric field
//! defaults to zero when absent, and [`CompanyProfile::sanitized`] scrubs
//! negative and non-finite values to zero so the classifier downgrades the
//! company to the least restrictive phase instead of raising. A determination
//! run always completes with a fully populated, if low-confidence, result.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{CsrdError, CsrdResult};
use crate::identity::TopicId;

// ---------------------------------------------------------------------------
// Company profile
// ---------------------------------------------------------------------------

/// Size figures for the reporting company, immutable per request.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CompanyProfile {
    /// Average number of employees during the financial year.
    #[serde(default)]
    pub employees: u32,
    /// Net turnover in EUR.
    #[serde(default)]
    pub revenue: f64,
    /// Balance-sheet total in EUR.
    #[serde(default)]
    pub total_assets: f64,
    /// The financial year the report covers.
    #[serde(default)]
    pub reporting_year: i32,
}

impl CompanyProfile {
    /// Build a profile from raw size figures.
    pub fn new(employees: u32, revenue: f64, total_assets: f64, reporting_year: i32) -> Self {
        Self {
            employees,
            revenue,
            total_assets,
            reporting_year,
        }
    }

    /// A copy with negative and non-finite numerics scrubbed to zero.
    ///
    /// The phase classifier and exposure math only ever see sanitized
    /// profiles, so a hostile or corrupted intake payload degrades to the
    /// zero-value profile rather than propagating NaN through the scores.
    pub fn sanitized(&self) -> Self {
        fn scrub(value: f64) -> f64 {
            if value.is_finite() && value > 0.0 {
                value
            } else {
                0.0
            }
        }
        Self {
            employees: self.employees,
            revenue: scrub(self.revenue),
            total_assets: scrub(self.total_assets),
            reporting_year: self.reporting_year.max(0),
        }
    }
}

// ---------------------------------------------------------------------------
// Disclosure claim
// ---------------------------------------------------------------------------

/// One extracted assertion about a disclosure topic.
///
/// Produced by the upstream extraction collaborator and keyed by the
/// obligation's machine id (for example `E1-6`). The engine never mutates a
/// claim; it only reads the value, unit, and confidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DisclosureClaim {
    /// Free-text disclosed value, if the extractor located one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disclosed_value: Option<String>,
    /// Unit accompanying the value, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Extraction confidence in `[0, 1]`.
    #[serde(default)]
    pub confidence: f64,
    /// Provenance tag naming the source location of the claim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provenance: Option<String>,
}

impl DisclosureClaim {
    /// Build a claim with a disclosed value.
    pub fn new(disclosed_value: impl Into<String>, confidence: f64) -> Self {
        Self {
            disclosed_value: Some(disclosed_value.into()),
            unit: None,
            confidence,
            provenance: None,
        }
    }

    /// Build a claim with no disclosed value (extraction found nothing).
    pub fn absent(confidence: f64) -> Self {
        Self {
            disclosed_value: None,
            unit: None,
            confidence,
            provenance: None,
        }
    }

    /// Confidence with NaN treated as zero and the range clamped to `[0, 1]`.
    pub fn effective_confidence(&self) -> f64 {
        if self.confidence.is_nan() {
            0.0
        } else {
            self.confidence.clamp(0.0, 1.0)
        }
    }

    /// Whether the extractor located a usable value.
    pub fn has_value(&self) -> bool {
        self.disclosed_value
            .as_deref()
            .map(|v| !v.trim().is_empty())
            .unwrap_or(false)
    }
}

// ---------------------------------------------------------------------------
// Financial context
// ---------------------------------------------------------------------------

/// Optional CapEx/OpEx/revenue figures used by the double-materiality
/// engine. Absent entirely in free-text intake.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct FinancialContext {
    /// Total capital expenditure in EUR.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capex_total: Option<f64>,
    /// Taxonomy-eligible ("green") capital expenditure in EUR.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capex_green: Option<f64>,
    /// Total operating expenditure in EUR.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opex_total: Option<f64>,
    /// Taxonomy-eligible ("green") operating expenditure in EUR.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opex_green: Option<f64>,
    /// Revenue figure from the financial statements, in EUR.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revenue: Option<f64>,
    /// Confidence in the extracted figures, in `[0, 1]`.
    #[serde(default)]
    pub confidence: f64,
}

impl FinancialContext {
    /// Green-to-total CapEx ratio, when both figures are usable.
    ///
    /// Returns `None` unless the total is present, finite, and positive and
    /// the green figure is present and finite.
    pub fn green_capex_ratio(&self) -> Option<f64> {
        let total = self.capex_total.filter(|t| t.is_finite() && *t > 0.0)?;
        let green = self.capex_green.filter(|g| g.is_finite())?;
        Some(green / total)
    }
}

// ---------------------------------------------------------------------------
// Determination input envelope
// ---------------------------------------------------------------------------

/// The full input bundle for one determination run.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DeterminationInput {
    /// The reporting company's size figures.
    #[serde(default)]
    pub company: CompanyProfile,
    /// Extracted claims keyed by obligation machine id.
    #[serde(default)]
    pub claims: BTreeMap<TopicId, DisclosureClaim>,
    /// Financial figures, when the intake mode supplies them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub financial_context: Option<FinancialContext>,
}

impl DeterminationInput {
    /// Parse a determination input from its JSON intake form.
    ///
    /// Unknown fields are ignored and missing fields take their zero-value
    /// defaults; only structurally invalid JSON is rejected.
    pub fn from_json_str(raw: &str) -> CsrdResult<Self> {
        let value: serde_json::Value = serde_json::from_str(raw)?;
        if !value.is_object() {
            return Err(CsrdError::InvalidInput(
                "determination input must be a JSON object".to_string(),
            ));
        }
        Ok(serde_json::from_value(value)?)
    }
}
