//! # Enrichment Acceptance and Fallback Integration Tests
//!
//! The enrichment layer may only ever improve a report, never replace its
//! shape: an accepted response swaps the deterministic ledger for the
//! service's narrative entries, and every rejection or transport failure
//! falls back to a report bit-identical to the deterministic run.
//!
//! - Accepted enrichment replaces ledger entries and downstream statuses
//! - Offline enricher falls back bit-identically
//! - Count, topic-coverage, and duplicate-topic mismatches are rejected
//! - HTTP adapter construction from endpoint config

use std::collections::BTreeMap;
use std::sync::Arc;

use csrd_core::{
    CompanyProfile, ComplianceStatus, CostEstimate, DeterminationInput, DisclosureClaim,
    FinancialContext, LedgerEntryId, MaterialityLevel, TopicId,
};
use csrd_engine::DeterminationEngine;
use csrd_enrich::{
    EnrichedLedgerEntry, Enricher, EnrichmentConfig, HttpEnricher, OfflineEnricher, StaticEnricher,
};
use csrd_knowledge::KnowledgeSnapshot;

fn snapshot() -> Arc<KnowledgeSnapshot> {
    Arc::new(KnowledgeSnapshot::builtin().unwrap())
}

fn intake() -> DeterminationInput {
    let mut claims = BTreeMap::new();
    claims.insert(
        TopicId::from("E1-6"),
        DisclosureClaim::new("Scopes 1, 2 and 3 reported with intensity metric", 0.9),
    );
    DeterminationInput {
        company: CompanyProfile::new(620, 95_000_000.0, 41_000_000.0, 2026),
        claims,
        financial_context: Some(FinancialContext {
            capex_total: Some(10_000_000.0),
            capex_green: Some(3_500_000.0),
            revenue: Some(50_000_000.0),
            ..FinancialContext::default()
        }),
    }
}

fn enriched(topic: &str, status: ComplianceStatus) -> EnrichedLedgerEntry {
    EnrichedLedgerEntry {
        topic_id: TopicId::from(topic),
        label: format!("{topic} narrative"),
        impact_materiality: MaterialityLevel::High,
        financial_materiality: MaterialityLevel::Medium,
        status,
        provenance: Some("annual-report-p41".to_string()),
        evidence: Some("Narrative evidence drafted by the service".to_string()),
    }
}

/// The three scored topics, in ledger order.
const SCORED_TOPICS: [&str; 3] = ["E1-1", "E1-5", "E1-6"];

// ---------------------------------------------------------------------------
// 1. Accepted enrichment
// ---------------------------------------------------------------------------

#[test]
fn accepted_enrichment_replaces_the_deterministic_ledger() {
    let entries: Vec<EnrichedLedgerEntry> = SCORED_TOPICS
        .iter()
        .map(|topic| enriched(topic, ComplianceStatus::Disclosed))
        .collect();
    let engine = DeterminationEngine::new(snapshot())
        .with_enricher(Box::new(StaticEnricher::new(entries)));

    let report = engine.determine(&intake());

    assert_eq!(report.ledger.len(), 3);
    for entry in &report.ledger {
        assert_eq!(entry.status, ComplianceStatus::Disclosed);
        assert_eq!(
            entry.evidence.as_deref(),
            Some("Narrative evidence drafted by the service")
        );
        // Ids are always derived locally, never taken from the service.
        assert_eq!(entry.id, LedgerEntryId::from_topic(&entry.topic_id));
    }

    let deterministic = DeterminationEngine::new(snapshot()).determine(&intake());
    assert_ne!(report.ledger, deterministic.ledger);
}

#[test]
fn accepted_enrichment_drives_cost_and_recommendations() {
    let entries: Vec<EnrichedLedgerEntry> = SCORED_TOPICS
        .iter()
        .map(|topic| enriched(topic, ComplianceStatus::Disclosed))
        .collect();
    let engine = DeterminationEngine::new(snapshot())
        .with_enricher(Box::new(StaticEnricher::new(entries)));

    let report = engine.determine(&intake());

    // No breach in the accepted ledger, so the projected fine is zero.
    match &report.cost_estimate {
        CostEstimate::Point {
            projected_fine,
            basis,
        } => {
            assert_eq!(*projected_fine, 0.0);
            assert!(basis.contains("0 of 3"));
        }
        CostEstimate::Range { .. } => panic!("audited revenue gives a point estimate"),
    }

    // Scored topics read disclosed now, so they drop out of remediation.
    assert!(!report.recommendations.is_empty());
    for topic in SCORED_TOPICS {
        assert!(report
            .recommendations
            .iter()
            .all(|item| item.topic_id.as_str() != topic));
    }
}

// ---------------------------------------------------------------------------
// 2. Transport failure
// ---------------------------------------------------------------------------

#[test]
fn offline_enricher_falls_back_bit_identically() {
    let plain = DeterminationEngine::new(snapshot());
    let offline =
        DeterminationEngine::new(snapshot()).with_enricher(Box::new(OfflineEnricher::default()));

    let expected = plain.determine(&intake()).to_json().unwrap();
    let actual = offline.determine(&intake()).to_json().unwrap();
    assert_eq!(actual, expected);
}

// ---------------------------------------------------------------------------
// 3. Rejected responses
// ---------------------------------------------------------------------------

#[test]
fn short_response_is_rejected() {
    let entries = vec![
        enriched("E1-1", ComplianceStatus::Disclosed),
        enriched("E1-5", ComplianceStatus::Disclosed),
    ];
    assert_falls_back(entries);
}

#[test]
fn wrong_topic_set_is_rejected() {
    let entries = vec![
        enriched("E1-1", ComplianceStatus::Disclosed),
        enriched("E1-5", ComplianceStatus::Disclosed),
        enriched("E9-9", ComplianceStatus::Disclosed),
    ];
    assert_falls_back(entries);
}

#[test]
fn duplicate_topics_are_rejected() {
    // Right count, but E1-6 twice and E1-1 never.
    let entries = vec![
        enriched("E1-5", ComplianceStatus::Disclosed),
        enriched("E1-6", ComplianceStatus::Disclosed),
        enriched("E1-6", ComplianceStatus::Partial),
    ];
    assert_falls_back(entries);
}

fn assert_falls_back(entries: Vec<EnrichedLedgerEntry>) {
    let plain = DeterminationEngine::new(snapshot());
    let rejected =
        DeterminationEngine::new(snapshot()).with_enricher(Box::new(StaticEnricher::new(entries)));

    let expected = plain.determine(&intake()).to_json().unwrap();
    let actual = rejected.determine(&intake()).to_json().unwrap();
    assert_eq!(actual, expected);
}

// ---------------------------------------------------------------------------
// 4. HTTP adapter construction
// ---------------------------------------------------------------------------

#[test]
fn http_enricher_builds_from_endpoint_config() {
    let config = EnrichmentConfig::new("https://enrich.example.com/v1/")
        .unwrap()
        .with_token("test-token");
    let enricher = HttpEnricher::new(&config).unwrap();
    assert_eq!(enricher.name(), "http");
}

#[test]
fn invalid_endpoint_is_rejected_at_config_time() {
    assert!(EnrichmentConfig::new("not a url").is_err());
}
