//! # Impact Materiality Rubrics
//!
//! Keyword rubrics that grade the disclosed text behind a topic. Each rubric
//! is a declarative table of `{condition, points}` terms over a base score,
//! evaluated by one generic scorer; changing what a topic rewards means
//! editing its table, not the scorer.
//!
//! ## Scoring Model
//!
//! | Step | Rule |
//! |---|---|
//! | Null claim | exactly 0, no terms consulted |
//! | Base | rubric-specific starting score |
//! | Terms | each condition that holds adds its (possibly negative) points |
//! | Clamp | final score clamped to `[0, 100]` |
//!
//! The rubrics are openly heuristic — keyword presence, not semantics. The
//! enrichment layer exists to do better; these tables are the deterministic
//! floor every run can fall back to.

use csrd_core::identity::TopicId;
use csrd_core::inputs::DisclosureClaim;

// ---------------------------------------------------------------------------
// Conditions
// ---------------------------------------------------------------------------

/// A predicate over one claim's lowercased text and metadata.
#[derive(Debug, Clone, Copy)]
pub enum Condition {
    /// Any of the needles appears in the text.
    ContainsAny(&'static [&'static str]),
    /// Every needle appears in the text.
    ContainsAll(&'static [&'static str]),
    /// A four-digit calendar year appears in the text.
    MentionsYear,
    /// A monetary amount appears in the text.
    MentionsMoney,
    /// The text carries a numeric quantity and the claim names a unit.
    QuantifiedWithUnit,
    /// The claim names a measurement unit.
    HasUnit,
    /// Every listed GHG scope is covered by the text.
    CoversScopes(&'static [u8]),
    /// Claim confidence is strictly below the bound.
    ConfidenceBelow(f64),
    /// The inner condition does not hold.
    Not(&'static Condition),
}

impl Condition {
    /// Evaluate against the claim. `text` is the lowercased disclosed value.
    fn holds(&self, text: &str, claim: &DisclosureClaim) -> bool {
        match self {
            Self::ContainsAny(needles) => needles.iter().any(|n| text.contains(n)),
            Self::ContainsAll(needles) => needles.iter().all(|n| text.contains(n)),
            Self::MentionsYear => mentions_year(text),
            Self::MentionsMoney => mentions_money(text),
            Self::QuantifiedWithUnit => has_number(text) && has_unit(claim),
            Self::HasUnit => has_unit(claim),
            Self::CoversScopes(scopes) => scopes.iter().all(|n| mentions_scope(text, *n)),
            Self::ConfidenceBelow(bound) => claim.effective_confidence() < *bound,
            Self::Not(inner) => !inner.holds(text, claim),
        }
    }
}

fn has_unit(claim: &DisclosureClaim) -> bool {
    claim
        .unit
        .as_deref()
        .is_some_and(|unit| !unit.trim().is_empty())
}

fn has_number(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_digit())
}

/// A standalone four-digit year starting `19` or `20`.
fn mentions_year(text: &str) -> bool {
    let bytes = text.as_bytes();
    (0..bytes.len().saturating_sub(3)).any(|i| {
        let window = &bytes[i..i + 4];
        window.iter().all(|b| b.is_ascii_digit())
            && (window.starts_with(b"19") || window.starts_with(b"20"))
            && (i == 0 || !bytes[i - 1].is_ascii_digit())
            && (i + 4 == bytes.len() || !bytes[i + 4].is_ascii_digit())
    })
}

/// A currency marker alongside at least one digit.
fn mentions_money(text: &str) -> bool {
    const CURRENCY: &[&str] = &["€", "$", "eur", "usd", "million", "billion"];
    has_number(text) && CURRENCY.iter().any(|c| text.contains(c))
}

/// Whether the text covers GHG scope `n`, tolerating enumerated forms like
/// "Scopes 1, 2 and 3" as well as the singular "Scope 3".
fn mentions_scope(text: &str, n: u8) -> bool {
    let target = char::from(b'0' + n);
    let mut rest = text;
    while let Some(pos) = rest.find("scope") {
        let tail = &rest[pos + "scope".len()..];
        let tail = tail.strip_prefix('s').unwrap_or(tail);
        let enumeration: String = tail
            .chars()
            .take_while(|c| {
                c.is_ascii_digit() || matches!(c, ' ' | ',' | '+' | '&' | '/' | 'a' | 'n' | 'd')
            })
            .collect();
        if enumeration.contains(target) {
            return true;
        }
        rest = tail;
    }
    false
}

// ---------------------------------------------------------------------------
// Rubric tables
// ---------------------------------------------------------------------------

/// One scoring term: points applied when the condition holds.
#[derive(Debug, Clone, Copy)]
pub struct RubricTerm {
    /// Points added (negative terms penalize).
    pub points: i32,
    /// When the term fires.
    pub condition: Condition,
    /// Short wording used in ledger evidence text.
    pub note: &'static str,
}

/// The scoring table for one topic.
#[derive(Debug, Clone, Copy)]
pub struct Rubric {
    /// Machine id of the topic this rubric grades.
    pub topic: &'static str,
    /// Ledger label for the topic.
    pub label: &'static str,
    /// Starting score before any term applies.
    pub base: i32,
    /// Scoring terms, applied in order.
    pub terms: &'static [RubricTerm],
}

/// Result of scoring one claim against one rubric.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RubricOutcome {
    /// Impact score, clamped to `[0, 100]`.
    pub score: u8,
    /// Notes of the terms that fired, in table order.
    pub fired: Vec<&'static str>,
}

impl Rubric {
    /// Score one claim. A null claim scores exactly 0.
    pub fn score(&self, claim: &DisclosureClaim) -> RubricOutcome {
        if !claim.has_value() {
            return RubricOutcome::default();
        }
        let text = claim
            .disclosed_value
            .as_deref()
            .unwrap_or_default()
            .to_lowercase();

        let mut total = self.base;
        let mut fired = Vec::new();
        for term in self.terms {
            if term.condition.holds(&text, claim) {
                total += term.points;
                fired.push(term.note);
            }
        }
        RubricOutcome {
            score: total.clamp(0, 100) as u8,
            fired,
        }
    }
}

/// Transition plan for climate change mitigation.
pub const TRANSITION_PLAN_RUBRIC: Rubric = Rubric {
    topic: "E1-1",
    label: "Transition plan for climate change mitigation",
    base: 40,
    terms: &[
        RubricTerm {
            points: 25,
            condition: Condition::MentionsYear,
            note: "target year stated",
        },
        RubricTerm {
            points: 20,
            condition: Condition::MentionsMoney,
            note: "quantified monetary commitment",
        },
        RubricTerm {
            points: 15,
            condition: Condition::ContainsAny(&[
                "1.5",
                "paris",
                "net zero",
                "net-zero",
                "science-based",
            ]),
            note: "pathway alignment language",
        },
        RubricTerm {
            points: -15,
            condition: Condition::ConfidenceBelow(0.5),
            note: "low extraction confidence",
        },
        RubricTerm {
            points: -10,
            condition: Condition::Not(&Condition::MentionsYear),
            note: "no target year",
        },
    ],
};

/// Energy consumption and mix.
pub const ENERGY_RUBRIC: Rubric = Rubric {
    topic: "E1-5",
    label: "Energy consumption and mix",
    base: 40,
    terms: &[
        RubricTerm {
            points: 25,
            condition: Condition::QuantifiedWithUnit,
            note: "quantified with unit",
        },
        RubricTerm {
            points: 20,
            condition: Condition::ContainsAll(&["renewable", "%"]),
            note: "renewable share stated",
        },
        RubricTerm {
            points: 15,
            condition: Condition::ContainsAny(&["reduce", "increase", "target", "improve"]),
            note: "trend statement",
        },
        RubricTerm {
            points: -15,
            condition: Condition::ContainsAny(&["estimate", "approximate", "partial", "excludes"]),
            note: "hedged or estimated figures",
        },
        RubricTerm {
            points: -10,
            condition: Condition::Not(&Condition::HasUnit),
            note: "no measurement unit",
        },
    ],
};

/// Gross GHG emissions across scopes.
pub const EMISSIONS_RUBRIC: Rubric = Rubric {
    topic: "E1-6",
    label: "Gross Scopes 1, 2, 3 and Total GHG emissions",
    base: 40,
    terms: &[
        RubricTerm {
            points: 25,
            condition: Condition::CoversScopes(&[1, 2]),
            note: "scope 1 and 2 covered",
        },
        RubricTerm {
            points: 20,
            condition: Condition::CoversScopes(&[3]),
            note: "scope 3 covered",
        },
        RubricTerm {
            points: 15,
            condition: Condition::ContainsAny(&["intensity"]),
            note: "intensity metric stated",
        },
        RubricTerm {
            points: -20,
            condition: Condition::Not(&Condition::CoversScopes(&[3])),
            note: "scope 3 not covered",
        },
        RubricTerm {
            points: -10,
            condition: Condition::Not(&Condition::ContainsAny(&[
                "ghg protocol",
                "iso 14064",
                "methodology",
            ])),
            note: "no methodology disclosure",
        },
    ],
};

/// Every impact rubric, in topic order. The materiality ledger carries one
/// entry per rubric here.
pub const IMPACT_RUBRICS: &[&Rubric] = &[
    &TRANSITION_PLAN_RUBRIC,
    &ENERGY_RUBRIC,
    &EMISSIONS_RUBRIC,
];

/// Look up the rubric grading `topic`, if one exists.
pub fn rubric_for(topic: &TopicId) -> Option<&'static Rubric> {
    IMPACT_RUBRICS
        .iter()
        .copied()
        .find(|rubric| rubric.topic == topic.as_str())
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// The score is clamped to [0, 100] for arbitrary text and confidence.
        #[test]
        fn score_is_always_clamped(
            text in "[a-zA-Z0-9 €$%.,-]{0,120}",
            confidence in 0.0f64..=1.0,
        ) {
            for rubric in IMPACT_RUBRICS {
                let outcome = rubric.score(&DisclosureClaim::new(text.clone(), confidence));
                prop_assert!(outcome.score <= 100);
            }
        }

        /// Scoring is deterministic: identical claims always grade identically.
        #[test]
        fn scoring_is_deterministic(
            text in "[a-zA-Z0-9 €$%.,-]{0,120}",
            confidence in 0.0f64..=1.0,
        ) {
            let claim = DisclosureClaim::new(text, confidence);
            for rubric in IMPACT_RUBRICS {
                prop_assert_eq!(rubric.score(&claim), rubric.score(&claim));
            }
        }
    }
}
