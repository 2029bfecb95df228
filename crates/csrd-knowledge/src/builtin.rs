//! # Builtin ESRS Reference Document Set
//!
//! The builtin knowledge set covering the European Sustainability Reporting
//! Standards:
//!
//! | Document | Title | Mandate |
//! |----------|-------|---------|
//! | **ESRS2** | General Disclosures (reference, procedural) | mandatory |
//! | **E1** | Climate Change | mandatory |
//! | **E2** | Pollution | mandatory if material |
//! | **E3** | Water and Marine Resources | mandatory if material |
//! | **E4** | Biodiversity and Ecosystems | mandatory if material |
//! | **E5** | Resource Use and Circular Economy | mandatory if material |
//! | **S1** | Own Workforce | mandatory if material |
//! | **S2** | Workers in the Value Chain | mandatory if material |
//! | **S3** | Affected Communities | mandatory if material |
//! | **S4** | Consumers and End-Users | mandatory if material |
//! | **G1** | Business Conduct | mandatory if material |
//!
//! ESRS2 is the reference document: it carries the canonical phase
//! thresholds read by the phase classifier and the first-collection-year
//! gates checked by the requirement resolver. It has no itemized
//! disclosures, so it never produces obligations itself.
//!
//! Every topical document substitutes a simplified KPI list for wave-3
//! (listed SME) reporters.

use std::collections::BTreeMap;

use csrd_core::{ReportingPhase, TopicId};

use crate::document::{
    MandateBasis, PhaseApplicability, PhaseDirective, RegulatoryDocument, SimplifiedKpi,
};

// ---------------------------------------------------------------------------
// Phase thresholds
// ---------------------------------------------------------------------------

/// First financial year each roll-out wave must collect data for.
fn first_collection_year(phase: ReportingPhase) -> i32 {
    match phase {
        ReportingPhase::LargePie => 2024,
        ReportingPhase::LargeUndertaking => 2025,
        ReportingPhase::ListedSme => 2026,
    }
}

/// The reference size thresholds for a phase, paired with a directive.
fn phase_entry(phase: ReportingPhase, directive: PhaseDirective) -> PhaseApplicability {
    match phase {
        ReportingPhase::LargePie => PhaseApplicability {
            min_employees: 500,
            min_revenue: 40_000_000.0,
            min_assets: 20_000_000.0,
            max_employees: None,
            criteria_required: 2,
            directive,
        },
        ReportingPhase::LargeUndertaking => PhaseApplicability {
            min_employees: 250,
            min_revenue: 50_000_000.0,
            min_assets: 25_000_000.0,
            max_employees: None,
            criteria_required: 2,
            directive,
        },
        ReportingPhase::ListedSme => PhaseApplicability {
            min_employees: 10,
            min_revenue: 900_000.0,
            min_assets: 450_000.0,
            max_employees: Some(250),
            criteria_required: 2,
            directive,
        },
    }
}

/// Applicability map for a topical standard: full disclosure for the large
/// waves, a simplified KPI list for listed SMEs.
fn topical_applicability(
    kpis: Vec<SimplifiedKpi>,
) -> BTreeMap<ReportingPhase, PhaseApplicability> {
    let mut map = BTreeMap::new();
    for phase in [ReportingPhase::LargePie, ReportingPhase::LargeUndertaking] {
        map.insert(
            phase,
            phase_entry(
                phase,
                PhaseDirective::FullDisclosure {
                    first_collection_year: first_collection_year(phase),
                },
            ),
        );
    }
    map.insert(
        ReportingPhase::ListedSme,
        phase_entry(ReportingPhase::ListedSme, PhaseDirective::Simplified { kpis }),
    );
    map
}

/// Applicability map for the reference document: full disclosure with the
/// wave's collection year at every phase.
fn reference_applicability() -> BTreeMap<ReportingPhase, PhaseApplicability> {
    ReportingPhase::all()
        .iter()
        .map(|phase| {
            (
                *phase,
                phase_entry(
                    *phase,
                    PhaseDirective::FullDisclosure {
                        first_collection_year: first_collection_year(*phase),
                    },
                ),
            )
        })
        .collect()
}

// ── ESRS 2 — General Disclosures (reference) ──────────────────────────────

/// The cross-cutting reference document.
///
/// Procedural: carries the phase thresholds and collection-year gates but
/// no itemized disclosures of its own.
pub fn general_disclosures() -> RegulatoryDocument {
    RegulatoryDocument {
        id: TopicId::from("ESRS2"),
        title: "General Disclosures".to_string(),
        standards: vec!["ESRS 2".to_string()],
        mandate: MandateBasis::Mandatory,
        disclosures: Vec::new(),
        applicability: reference_applicability(),
        reference: true,
    }
}

// ── E1 — Climate Change ───────────────────────────────────────────────────

/// Climate change: the only unconditionally mandatory topical standard.
pub fn climate_change() -> RegulatoryDocument {
    RegulatoryDocument {
        id: TopicId::from("E1"),
        title: "Climate Change".to_string(),
        standards: vec!["ESRS E1".to_string()],
        mandate: MandateBasis::Mandatory,
        disclosures: vec![
            "E1-1 Transition plan for climate change mitigation".to_string(),
            "E1-2 Policies related to climate change mitigation and adaptation".to_string(),
            "E1-3 Actions and resources in relation to climate change policies".to_string(),
            "E1-4 Targets related to climate change mitigation and adaptation".to_string(),
            "E1-5 Energy consumption and mix".to_string(),
            "E1-6 Gross Scopes 1, 2, 3 and Total GHG emissions".to_string(),
            "E1-7 GHG removals and GHG mitigation projects financed through carbon credits"
                .to_string(),
            "E1-8 Internal carbon pricing".to_string(),
            "E1-9 Anticipated financial effects from material physical and transition risks"
                .to_string(),
        ],
        applicability: topical_applicability(vec![
            SimplifiedKpi::new("E1-5", "Total energy consumption"),
            SimplifiedKpi::new("E1-6", "Gross Scope 1 and 2 GHG emissions"),
        ]),
        reference: false,
    }
}

// ── E2 — Pollution ────────────────────────────────────────────────────────

/// Pollution of air, water and soil.
pub fn pollution() -> RegulatoryDocument {
    RegulatoryDocument {
        id: TopicId::from("E2"),
        title: "Pollution".to_string(),
        standards: vec!["ESRS E2".to_string()],
        mandate: MandateBasis::MandatoryIfMaterial,
        disclosures: vec![
            "E2-1 Policies related to pollution".to_string(),
            "E2-2 Actions and resources related to pollution".to_string(),
            "E2-3 Targets related to pollution".to_string(),
            "E2-4 Pollution of air, water and soil".to_string(),
            "E2-5 Substances of concern and substances of very high concern".to_string(),
            "E2-6 Anticipated financial effects from pollution-related impacts, risks and opportunities"
                .to_string(),
        ],
        applicability: topical_applicability(vec![SimplifiedKpi::new(
            "E2-4",
            "Emissions of pollutants to air and water",
        )]),
        reference: false,
    }
}

// ── E3 — Water and Marine Resources ───────────────────────────────────────

/// Water and marine resources.
pub fn water_and_marine_resources() -> RegulatoryDocument {
    RegulatoryDocument {
        id: TopicId::from("E3"),
        title: "Water and Marine Resources".to_string(),
        standards: vec!["ESRS E3".to_string()],
        mandate: MandateBasis::MandatoryIfMaterial,
        disclosures: vec![
            "E3-1 Policies related to water and marine resources".to_string(),
            "E3-2 Actions and resources related to water and marine resources".to_string(),
            "E3-3 Targets related to water and marine resources".to_string(),
            "E3-4 Water consumption".to_string(),
            "E3-5 Anticipated financial effects from water and marine resources-related impacts, risks and opportunities"
                .to_string(),
        ],
        applicability: topical_applicability(vec![SimplifiedKpi::new(
            "E3-4",
            "Total water consumption",
        )]),
        reference: false,
    }
}

// ── E4 — Biodiversity and Ecosystems ──────────────────────────────────────

/// Biodiversity and ecosystems.
pub fn biodiversity_and_ecosystems() -> RegulatoryDocument {
    RegulatoryDocument {
        id: TopicId::from("E4"),
        title: "Biodiversity and Ecosystems".to_string(),
        standards: vec!["ESRS E4".to_string()],
        mandate: MandateBasis::MandatoryIfMaterial,
        disclosures: vec![
            "E4-1 Transition plan and consideration of biodiversity and ecosystems in strategy and business model"
                .to_string(),
            "E4-2 Policies related to biodiversity and ecosystems".to_string(),
            "E4-3 Actions and resources related to biodiversity and ecosystems".to_string(),
            "E4-4 Targets related to biodiversity and ecosystems".to_string(),
            "E4-5 Impact metrics related to biodiversity and ecosystems change".to_string(),
            "E4-6 Anticipated financial effects from biodiversity and ecosystem-related risks and opportunities"
                .to_string(),
        ],
        applicability: topical_applicability(vec![SimplifiedKpi::new(
            "E4-5",
            "Sites located in or near biodiversity-sensitive areas",
        )]),
        reference: false,
    }
}

// ── E5 — Resource Use and Circular Economy ────────────────────────────────

/// Resource use and circular economy.
pub fn resource_use_and_circular_economy() -> RegulatoryDocument {
    RegulatoryDocument {
        id: TopicId::from("E5"),
        title: "Resource Use and Circular Economy".to_string(),
        standards: vec!["ESRS E5".to_string()],
        mandate: MandateBasis::MandatoryIfMaterial,
        disclosures: vec![
            "E5-1 Policies related to resource use and circular economy".to_string(),
            "E5-2 Actions and resources related to resource use and circular economy".to_string(),
            "E5-3 Targets related to resource use and circular economy".to_string(),
            "E5-4 Resource inflows".to_string(),
            "E5-5 Resource outflows".to_string(),
            "E5-6 Anticipated financial effects from resource use and circular economy-related impacts, risks and opportunities"
                .to_string(),
        ],
        applicability: topical_applicability(vec![SimplifiedKpi::new(
            "E5-5",
            "Total waste generation and recycling rate",
        )]),
        reference: false,
    }
}

// ── S1 — Own Workforce ────────────────────────────────────────────────────

/// Own workforce.
pub fn own_workforce() -> RegulatoryDocument {
    RegulatoryDocument {
        id: TopicId::from("S1"),
        title: "Own Workforce".to_string(),
        standards: vec!["ESRS S1".to_string()],
        mandate: MandateBasis::MandatoryIfMaterial,
        disclosures: vec![
            "S1-1 Policies related to own workforce".to_string(),
            "S1-2 Processes for engaging with own workers and workers' representatives about impacts"
                .to_string(),
            "S1-3 Processes to remediate negative impacts and channels for own workers to raise concerns"
                .to_string(),
            "S1-4 Taking action on material impacts on own workforce".to_string(),
            "S1-5 Targets related to managing material negative impacts and advancing positive impacts"
                .to_string(),
            "S1-6 Characteristics of the undertaking's employees".to_string(),
            "S1-7 Characteristics of non-employee workers in the undertaking's own workforce"
                .to_string(),
            "S1-8 Collective bargaining coverage and social dialogue".to_string(),
            "S1-9 Diversity metrics".to_string(),
            "S1-10 Adequate wages".to_string(),
            "S1-11 Social protection".to_string(),
            "S1-12 Persons with disabilities".to_string(),
            "S1-13 Training and skills development metrics".to_string(),
            "S1-14 Health and safety metrics".to_string(),
            "S1-15 Work-life balance metrics".to_string(),
            "S1-16 Remuneration metrics (pay gap and total remuneration)".to_string(),
            "S1-17 Incidents, complaints and severe human rights impacts".to_string(),
        ],
        applicability: topical_applicability(vec![
            SimplifiedKpi::new("S1-6", "Workforce headcount by contract type"),
            SimplifiedKpi::new("S1-14", "Work-related accidents and injuries"),
            SimplifiedKpi::new("S1-16", "Gender pay gap"),
        ]),
        reference: false,
    }
}

// ── S2 — Workers in the Value Chain ───────────────────────────────────────

/// Workers in the value chain.
pub fn value_chain_workers() -> RegulatoryDocument {
    RegulatoryDocument {
        id: TopicId::from("S2"),
        title: "Workers in the Value Chain".to_string(),
        standards: vec!["ESRS S2".to_string()],
        mandate: MandateBasis::MandatoryIfMaterial,
        disclosures: vec![
            "S2-1 Policies related to value chain workers".to_string(),
            "S2-2 Processes for engaging with value chain workers about impacts".to_string(),
            "S2-3 Processes to remediate negative impacts and channels for value chain workers to raise concerns"
                .to_string(),
            "S2-4 Taking action on material impacts on value chain workers".to_string(),
            "S2-5 Targets related to managing material negative impacts and advancing positive impacts"
                .to_string(),
        ],
        applicability: topical_applicability(vec![SimplifiedKpi::new(
            "S2-1",
            "Value chain workers policy statement",
        )]),
        reference: false,
    }
}

// ── S3 — Affected Communities ─────────────────────────────────────────────

/// Affected communities.
pub fn affected_communities() -> RegulatoryDocument {
    RegulatoryDocument {
        id: TopicId::from("S3"),
        title: "Affected Communities".to_string(),
        standards: vec!["ESRS S3".to_string()],
        mandate: MandateBasis::MandatoryIfMaterial,
        disclosures: vec![
            "S3-1 Policies related to affected communities".to_string(),
            "S3-2 Processes for engaging with affected communities about impacts".to_string(),
            "S3-3 Processes to remediate negative impacts and channels for affected communities to raise concerns"
                .to_string(),
            "S3-4 Taking action on material impacts on affected communities".to_string(),
            "S3-5 Targets related to managing material negative impacts and advancing positive impacts"
                .to_string(),
        ],
        applicability: topical_applicability(vec![SimplifiedKpi::new(
            "S3-1",
            "Affected communities policy statement",
        )]),
        reference: false,
    }
}

// ── S4 — Consumers and End-Users ──────────────────────────────────────────

/// Consumers and end-users.
pub fn consumers_and_end_users() -> RegulatoryDocument {
    RegulatoryDocument {
        id: TopicId::from("S4"),
        title: "Consumers and End-Users".to_string(),
        standards: vec!["ESRS S4".to_string()],
        mandate: MandateBasis::MandatoryIfMaterial,
        disclosures: vec![
            "S4-1 Policies related to consumers and end-users".to_string(),
            "S4-2 Processes for engaging with consumers and end-users about impacts".to_string(),
            "S4-3 Processes to remediate negative impacts and channels for consumers and end-users to raise concerns"
                .to_string(),
            "S4-4 Taking action on material impacts on consumers and end-users".to_string(),
            "S4-5 Targets related to managing material negative impacts and advancing positive impacts"
                .to_string(),
        ],
        applicability: topical_applicability(vec![SimplifiedKpi::new(
            "S4-1",
            "Consumer safety policy statement",
        )]),
        reference: false,
    }
}

// ── G1 — Business Conduct ─────────────────────────────────────────────────

/// Business conduct.
pub fn business_conduct() -> RegulatoryDocument {
    RegulatoryDocument {
        id: TopicId::from("G1"),
        title: "Business Conduct".to_string(),
        standards: vec!["ESRS G1".to_string()],
        mandate: MandateBasis::MandatoryIfMaterial,
        disclosures: vec![
            "G1-1 Business conduct policies and corporate culture".to_string(),
            "G1-2 Management of relationships with suppliers".to_string(),
            "G1-3 Prevention and detection of corruption and bribery".to_string(),
            "G1-4 Incidents of corruption or bribery".to_string(),
            "G1-5 Political influence and lobbying activities".to_string(),
            "G1-6 Payment practices".to_string(),
        ],
        applicability: topical_applicability(vec![
            SimplifiedKpi::new("G1-3", "Anti-corruption and anti-bribery measures"),
            SimplifiedKpi::new("G1-6", "Average payment period to suppliers"),
        ]),
        reference: false,
    }
}

// ---------------------------------------------------------------------------
// Complete set
// ---------------------------------------------------------------------------

/// The complete builtin ESRS document set.
pub fn esrs_documents() -> Vec<RegulatoryDocument> {
    vec![
        general_disclosures(),
        climate_change(),
        pollution(),
        water_and_marine_resources(),
        biodiversity_and_ecosystems(),
        resource_use_and_circular_economy(),
        own_workforce(),
        value_chain_workers(),
        affected_communities(),
        consumers_and_end_users(),
        business_conduct(),
    ]
}
