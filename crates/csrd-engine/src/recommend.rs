//! # Remediation Prioritization
//!
//! Emits one remediation item per obligation that is not fully disclosed,
//! ranked by a deterministic first-match table. Priority is never taken
//! from outside: enrichment may polish ledger wording upstream, but rank
//! comes from this table alone.
//!
//! | Rule (first match wins) | Priority |
//! |---|---|
//! | unconditionally mandatory | critical |
//! | missing on a core family | critical |
//! | missing elsewhere | high |
//! | partial on a core family | high |
//! | otherwise (partial, conditional, non-core) | moderate |
//!
//! `non_compliant` ranks like `missing`. The output is sorted ascending by
//! priority rank with a stable sort, so equal-priority items keep their
//! obligation order.

use std::collections::BTreeMap;

use csrd_core::domain::{ComplianceStatus, Priority};
use csrd_core::identity::TopicId;
use csrd_core::report::RemediationItem;
use csrd_knowledge::snapshot::KnowledgeSnapshot;

use crate::resolver::Obligation;

/// Topic families whose gaps are treated as critical even when the parent
/// document is only conditionally mandatory.
pub const CORE_FAMILIES: &[&str] = &["E1", "S1", "G1"];

/// Build the prioritized remediation list.
///
/// `statuses` carries the effective per-topic status: the claim
/// classifier's result, overridden by the materiality ledger where a topic
/// was rubric-scored. Obligations without a status entry count as missing.
pub fn prioritize(
    snapshot: &KnowledgeSnapshot,
    obligations: &[Obligation],
    statuses: &BTreeMap<TopicId, ComplianceStatus>,
) -> Vec<RemediationItem> {
    let mut items = Vec::new();

    for obligation in obligations {
        let status = statuses
            .get(&obligation.topic_id)
            .copied()
            .unwrap_or(ComplianceStatus::Missing);
        if status == ComplianceStatus::Disclosed {
            continue;
        }

        let missing_like = status.is_breach();
        let core = CORE_FAMILIES.contains(&obligation.topic_id.family());
        let priority = priority_for(obligation.is_mandatory(), core, missing_like);

        let citation = snapshot
            .document(&obligation.document_id)
            .map(|doc| doc.citation())
            .unwrap_or_else(|| obligation.document_id.to_string());

        items.push(RemediationItem::new(
            priority,
            obligation.topic_id.clone(),
            title_for(obligation, missing_like),
            description_for(obligation, status),
            citation,
        ));
    }

    // Stable: equal priorities keep obligation order.
    items.sort_by_key(|item| item.priority.rank());
    items
}

/// The first-match priority table.
fn priority_for(mandatory: bool, core: bool, missing_like: bool) -> Priority {
    if mandatory {
        Priority::Critical
    } else if missing_like && core {
        Priority::Critical
    } else if missing_like {
        Priority::High
    } else if core {
        Priority::High
    } else {
        Priority::Moderate
    }
}

fn title_for(obligation: &Obligation, missing_like: bool) -> String {
    if missing_like {
        format!("Disclose {}", obligation.label)
    } else {
        format!("Strengthen {}", obligation.label)
    }
}

fn description_for(obligation: &Obligation, status: ComplianceStatus) -> String {
    match status {
        ComplianceStatus::NonCompliant => format!(
            "The double-materiality assessment vetoed {}; restore credible transition \
             finance before re-disclosing.",
            obligation.topic_id
        ),
        ComplianceStatus::Partial => format!(
            "Evidence only partially substantiates {}; complete the datapoint or raise \
             the extraction confidence.",
            obligation.topic_id
        ),
        _ => format!(
            "No usable claim covers {}; compile the datapoint and its methodology for \
             the next reporting cycle.",
            obligation.topic_id
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use csrd_knowledge::document::MandateBasis;
    use csrd_knowledge::snapshot::KnowledgeSnapshot;

    fn snapshot() -> KnowledgeSnapshot {
        KnowledgeSnapshot::builtin().unwrap()
    }

    fn obligation(topic: &str, document: &str, mandate: MandateBasis) -> Obligation {
        Obligation {
            topic_id: TopicId::new(topic),
            document_id: TopicId::new(document),
            label: format!("Requirement {topic}"),
            mandate,
            simplified: false,
        }
    }

    fn statuses(pairs: &[(&str, ComplianceStatus)]) -> BTreeMap<TopicId, ComplianceStatus> {
        pairs
            .iter()
            .map(|(topic, status)| (TopicId::new(*topic), *status))
            .collect()
    }

    // ── Priority table ─────────────────────────────────────────────────

    #[test]
    fn mandatory_is_always_critical() {
        assert_eq!(priority_for(true, false, true), Priority::Critical);
        assert_eq!(priority_for(true, false, false), Priority::Critical);
        assert_eq!(priority_for(true, true, false), Priority::Critical);
    }

    #[test]
    fn missing_core_family_is_critical_without_mandate() {
        assert_eq!(priority_for(false, true, true), Priority::Critical);
    }

    #[test]
    fn missing_off_core_is_high() {
        assert_eq!(priority_for(false, false, true), Priority::High);
    }

    #[test]
    fn partial_core_is_high_partial_elsewhere_moderate() {
        assert_eq!(priority_for(false, true, false), Priority::High);
        assert_eq!(priority_for(false, false, false), Priority::Moderate);
    }

    // ── List assembly ──────────────────────────────────────────────────

    #[test]
    fn disclosed_obligations_are_never_emitted() {
        let obligations = vec![
            obligation("E1-5", "E1", MandateBasis::Mandatory),
            obligation("E1-6", "E1", MandateBasis::Mandatory),
        ];
        let statuses = statuses(&[
            ("E1-5", ComplianceStatus::Disclosed),
            ("E1-6", ComplianceStatus::Disclosed),
        ]);
        assert!(prioritize(&snapshot(), &obligations, &statuses).is_empty());
    }

    #[test]
    fn output_is_non_decreasing_in_rank() {
        let obligations = vec![
            obligation("E2-4", "E2", MandateBasis::MandatoryIfMaterial),
            obligation("E1-6", "E1", MandateBasis::Mandatory),
            obligation("S2-1", "S2", MandateBasis::MandatoryIfMaterial),
            obligation("G1-3", "G1", MandateBasis::MandatoryIfMaterial),
        ];
        let statuses = statuses(&[
            ("E2-4", ComplianceStatus::Partial),
            ("E1-6", ComplianceStatus::Missing),
            ("S2-1", ComplianceStatus::Missing),
            ("G1-3", ComplianceStatus::Partial),
        ]);

        let items = prioritize(&snapshot(), &obligations, &statuses);
        assert_eq!(items.len(), 4);
        let ranks: Vec<u8> = items.iter().map(|i| i.priority.rank()).collect();
        let mut sorted = ranks.clone();
        sorted.sort_unstable();
        assert_eq!(ranks, sorted);

        // E1-6 mandatory → critical; G1-3 partial core → high; S2-1 missing
        // off-core → high; E2-4 partial conditional non-core → moderate.
        assert_eq!(items[0].topic_id.as_str(), "E1-6");
        assert_eq!(items[0].priority, Priority::Critical);
        assert_eq!(items.last().unwrap().topic_id.as_str(), "E2-4");
        assert_eq!(items.last().unwrap().priority, Priority::Moderate);
    }

    #[test]
    fn equal_priorities_keep_obligation_order() {
        let obligations = vec![
            obligation("E2-4", "E2", MandateBasis::MandatoryIfMaterial),
            obligation("E3-4", "E3", MandateBasis::MandatoryIfMaterial),
            obligation("S2-1", "S2", MandateBasis::MandatoryIfMaterial),
        ];
        let statuses = statuses(&[
            ("E2-4", ComplianceStatus::Missing),
            ("E3-4", ComplianceStatus::Missing),
            ("S2-1", ComplianceStatus::Missing),
        ]);

        let items = prioritize(&snapshot(), &obligations, &statuses);
        let order: Vec<&str> = items.iter().map(|i| i.topic_id.as_str()).collect();
        assert_eq!(order, vec!["E2-4", "E3-4", "S2-1"]);
    }

    #[test]
    fn non_compliant_ranks_like_missing() {
        let obligations = vec![obligation("G1-3", "G1", MandateBasis::MandatoryIfMaterial)];
        let missing = prioritize(
            &snapshot(),
            &obligations,
            &statuses(&[("G1-3", ComplianceStatus::Missing)]),
        );
        let vetoed = prioritize(
            &snapshot(),
            &obligations,
            &statuses(&[("G1-3", ComplianceStatus::NonCompliant)]),
        );
        assert_eq!(missing[0].priority, vetoed[0].priority);
        assert_eq!(missing[0].priority, Priority::Critical);
    }

    #[test]
    fn absent_status_counts_as_missing() {
        let obligations = vec![obligation("E4-5", "E4", MandateBasis::MandatoryIfMaterial)];
        let items = prioritize(&snapshot(), &obligations, &BTreeMap::new());
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].priority, Priority::High);
    }

    #[test]
    fn citation_comes_from_the_parent_document() {
        let obligations = vec![obligation("E1-6", "E1", MandateBasis::Mandatory)];
        let items = prioritize(
            &snapshot(),
            &obligations,
            &statuses(&[("E1-6", ComplianceStatus::Missing)]),
        );
        assert!(items[0].citation.contains("ESRS E1"));
    }

    #[test]
    fn item_ids_are_stable_across_runs() {
        let obligations = vec![obligation("S1-6", "S1", MandateBasis::Mandatory)];
        let statuses = statuses(&[("S1-6", ComplianceStatus::Partial)]);
        let first = prioritize(&snapshot(), &obligations, &statuses);
        let second = prioritize(&snapshot(), &obligations, &statuses);
        assert_eq!(first[0].id, second[0].id);
    }
}
