//! # Snapshot Validation Rules
//!
//! Validates regulatory document sets before a snapshot is constructed.
//!
//! ## Validation Layers
//!
//! 1. **Structural validation**: ids, titles, and standards present.
//! 2. **Phase coverage**: exactly one applicability entry per phase.
//! 3. **Threshold sanity**: finite, non-negative thresholds; criteria count
//!    within 1..=3; max employee bound not below the minimum.
//! 4. **Set-level integrity**: non-empty set, unique ids, exactly one
//!    reference document.
//!
//! All of these run at load time. A determination run never re-validates:
//! invariant violations are snapshot-construction failures, not scoring
//! failures.

use csrd_core::ReportingPhase;

use crate::document::{PhaseDirective, RegulatoryDocument};

// ---------------------------------------------------------------------------
// Validation Results
// ---------------------------------------------------------------------------

/// Result of validating a document or document set.
#[derive(Debug)]
pub struct SnapshotValidationResult {
    /// Whether the validated input is structurally valid.
    pub is_valid: bool,
    /// Validation errors, if any.
    pub errors: Vec<String>,
    /// Validation warnings (non-fatal).
    pub warnings: Vec<String>,
}

impl SnapshotValidationResult {
    /// Create a successful validation result.
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Create a failed validation result with the given errors.
    pub fn fail(errors: Vec<String>) -> Self {
        Self {
            is_valid: false,
            errors,
            warnings: Vec::new(),
        }
    }

    /// Add an error. Marks result as invalid.
    pub fn add_error(&mut self, error: String) {
        self.is_valid = false;
        self.errors.push(error);
    }

    /// Add a warning (does not affect validity).
    pub fn add_warning(&mut self, warning: String) {
        self.warnings.push(warning);
    }

    /// Merge another result into this one.
    pub fn merge(&mut self, other: SnapshotValidationResult) {
        if !other.is_valid {
            self.is_valid = false;
        }
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }
}

// ---------------------------------------------------------------------------
// Document Validation
// ---------------------------------------------------------------------------

/// Validate a single regulatory document.
pub fn validate_document(doc: &RegulatoryDocument) -> SnapshotValidationResult {
    let mut result = SnapshotValidationResult::ok();
    let doc_id = doc.id.as_str();

    // 1. Identity fields
    if doc_id.is_empty() {
        result.add_error("document has empty id".to_string());
    }
    if doc.title.is_empty() {
        result.add_error(format!("document {doc_id} has empty title"));
    }
    if doc.standards.is_empty() || doc.standards.iter().any(|s| s.is_empty()) {
        result.add_error(format!("document {doc_id} has no governing standard"));
    }

    // 2. Phase coverage — every phase must be represented exactly once.
    //    (The map is keyed by the phase enum, so duplicates cannot occur;
    //    only absence needs checking.)
    for phase in ReportingPhase::all() {
        if doc.applicability_for(*phase).is_none() {
            result.add_error(format!("document {doc_id} missing phase entry: {phase}"));
        }
    }

    // 3. Per-entry threshold sanity
    for (phase, entry) in &doc.applicability {
        if !entry.min_revenue.is_finite() || entry.min_revenue < 0.0 {
            result.add_error(format!(
                "document {doc_id} phase {phase}: min_revenue must be finite and non-negative"
            ));
        }
        if !entry.min_assets.is_finite() || entry.min_assets < 0.0 {
            result.add_error(format!(
                "document {doc_id} phase {phase}: min_assets must be finite and non-negative"
            ));
        }
        if entry.criteria_required == 0 || entry.criteria_required > 3 {
            result.add_error(format!(
                "document {doc_id} phase {phase}: criteria_required {} outside 1..=3",
                entry.criteria_required
            ));
        }
        if let Some(max) = entry.max_employees {
            if max < entry.min_employees {
                result.add_error(format!(
                    "document {doc_id} phase {phase}: max_employees {max} below min_employees {}",
                    entry.min_employees
                ));
            }
        }
        match &entry.directive {
            PhaseDirective::FullDisclosure {
                first_collection_year,
            } => {
                if !(1900..=2100).contains(first_collection_year) {
                    result.add_warning(format!(
                        "document {doc_id} phase {phase}: implausible first collection year {first_collection_year}"
                    ));
                }
            }
            PhaseDirective::Simplified { kpis } => {
                if kpis.is_empty() {
                    result.add_warning(format!(
                        "document {doc_id} phase {phase}: simplified entry lists no KPIs"
                    ));
                }
                for kpi in kpis {
                    if kpi.id.is_empty() || kpi.label.is_empty() {
                        result.add_error(format!(
                            "document {doc_id} phase {phase}: simplified KPI with empty id or label"
                        ));
                    }
                }
            }
        }
    }

    // 4. Procedural documents never produce obligations
    if doc.is_procedural() && !doc.reference {
        result.add_warning(format!(
            "document {doc_id} has no itemized disclosures and will be excluded from resolution"
        ));
    }

    result
}

/// Validate a complete document set.
///
/// Runs [`validate_document`] on every member and adds set-level checks:
/// the set must be non-empty, ids must be unique, and exactly one document
/// must be marked as the reference.
pub fn validate_documents(documents: &[RegulatoryDocument]) -> SnapshotValidationResult {
    let mut result = SnapshotValidationResult::ok();

    if documents.is_empty() {
        result.add_error("document set is empty".to_string());
        return result;
    }

    let mut seen = std::collections::BTreeSet::new();
    for doc in documents {
        if !seen.insert(doc.id.clone()) {
            result.add_error(format!("duplicate document id: {}", doc.id));
        }
        result.merge(validate_document(doc));
    }

    let reference_count = documents.iter().filter(|d| d.reference).count();
    if reference_count != 1 {
        result.add_error(format!(
            "document set must have exactly one reference document, found {reference_count}"
        ));
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin;
    use crate::document::SimplifiedKpi;

    fn valid_doc() -> RegulatoryDocument {
        builtin::climate_change()
    }

    // ── Accumulator behavior ─────────────────────────────────────────

    #[test]
    fn merge_propagates_invalidity() {
        let mut base = SnapshotValidationResult::ok();
        base.add_warning("informational".to_string());
        let failed = SnapshotValidationResult::fail(vec!["broken".to_string()]);
        base.merge(failed);
        assert!(!base.is_valid);
        assert_eq!(base.errors, vec!["broken".to_string()]);
        assert_eq!(base.warnings, vec!["informational".to_string()]);
    }

    // ── Document validation ──────────────────────────────────────────

    #[test]
    fn builtin_document_passes_validation() {
        let result = validate_document(&valid_doc());
        assert!(result.is_valid, "errors: {:?}", result.errors);
    }

    #[test]
    fn missing_phase_entry_is_an_error() {
        let mut doc = valid_doc();
        doc.applicability.remove(&ReportingPhase::ListedSme);
        let result = validate_document(&doc);
        assert!(!result.is_valid);
        assert!(result
            .errors
            .iter()
            .any(|e| e.contains("missing phase entry: listed_sme")));
    }

    #[test]
    fn criteria_required_zero_is_an_error() {
        let mut doc = valid_doc();
        if let Some(entry) = doc.applicability.get_mut(&ReportingPhase::LargePie) {
            entry.criteria_required = 0;
        }
        assert!(!validate_document(&doc).is_valid);
    }

    #[test]
    fn negative_revenue_threshold_is_an_error() {
        let mut doc = valid_doc();
        if let Some(entry) = doc.applicability.get_mut(&ReportingPhase::LargePie) {
            entry.min_revenue = -1.0;
        }
        assert!(!validate_document(&doc).is_valid);
    }

    #[test]
    fn max_below_min_employees_is_an_error() {
        let mut doc = valid_doc();
        if let Some(entry) = doc.applicability.get_mut(&ReportingPhase::ListedSme) {
            entry.max_employees = Some(5);
        }
        assert!(!validate_document(&doc).is_valid);
    }

    #[test]
    fn empty_kpi_id_is_an_error() {
        let mut doc = valid_doc();
        if let Some(entry) = doc.applicability.get_mut(&ReportingPhase::ListedSme) {
            entry.directive = PhaseDirective::Simplified {
                kpis: vec![SimplifiedKpi::new("", "Total energy consumption")],
            };
        }
        assert!(!validate_document(&doc).is_valid);
    }

    #[test]
    fn procedural_topical_document_warns() {
        let mut doc = valid_doc();
        doc.disclosures.clear();
        let result = validate_document(&doc);
        assert!(result.is_valid);
        assert!(!result.warnings.is_empty());
    }

    // ── Set validation ───────────────────────────────────────────────

    #[test]
    fn builtin_set_passes_validation() {
        let result = validate_documents(&builtin::esrs_documents());
        assert!(result.is_valid, "errors: {:?}", result.errors);
    }

    #[test]
    fn empty_set_is_an_error() {
        let result = validate_documents(&[]);
        assert!(!result.is_valid);
    }

    #[test]
    fn duplicate_ids_are_an_error() {
        let docs = vec![valid_doc(), valid_doc()];
        let result = validate_documents(&docs);
        assert!(result
            .errors
            .iter()
            .any(|e| e.contains("duplicate document id")));
    }

    #[test]
    fn missing_reference_document_is_an_error() {
        let mut docs = builtin::esrs_documents();
        for doc in &mut docs {
            doc.reference = false;
        }
        let result = validate_documents(&docs);
        assert!(result
            .errors
            .iter()
            .any(|e| e.contains("exactly one reference document")));
    }

    #[test]
    fn two_reference_documents_are_an_error() {
        let mut docs = builtin::esrs_documents();
        for doc in &mut docs {
            doc.reference = true;
        }
        assert!(!validate_documents(&docs).is_valid);
    }
}
