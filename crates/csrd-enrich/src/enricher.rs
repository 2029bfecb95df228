//! Enricher trait and offline adapters.
//!
//! The engine treats enrichment as a pluggable seam: anything implementing
//! [`Enricher`] can refine ledger wording. The adapters here cover the two
//! offline cases: a service that is never reachable, and a canned response
//! for exercising the acceptance path without a network.

use crate::contract::{EnrichedLedgerEntry, EnrichmentRequest};
use crate::error::{EnrichmentError, EnrichmentResult};

/// A service that rewrites ledger entries with richer narrative.
///
/// Implementations must be cheap to call repeatedly and must never mutate
/// shared state: the engine may retry or discard results. Scores and
/// statuses returned here are advisory; the engine re-validates everything
/// before accepting a response.
pub trait Enricher: Send + Sync + std::fmt::Debug {
    /// Submit the request and return one entry per claim.
    fn enrich(&self, request: &EnrichmentRequest) -> EnrichmentResult<Vec<EnrichedLedgerEntry>>;

    /// Short adapter name for log lines.
    fn name(&self) -> &str;
}

/// Enricher that always reports the service as unreachable.
///
/// Useful for exercising the fallback path deterministically.
#[derive(Debug, Default)]
pub struct OfflineEnricher;

impl Enricher for OfflineEnricher {
    fn enrich(&self, _request: &EnrichmentRequest) -> EnrichmentResult<Vec<EnrichedLedgerEntry>> {
        Err(EnrichmentError::Transport {
            reason: "enrichment service offline".to_string(),
        })
    }

    fn name(&self) -> &str {
        "offline"
    }
}

/// Enricher that returns a fixed response regardless of the request.
#[derive(Debug)]
pub struct StaticEnricher {
    entries: Vec<EnrichedLedgerEntry>,
}

impl StaticEnricher {
    /// Build an enricher that always answers with `entries`.
    pub fn new(entries: Vec<EnrichedLedgerEntry>) -> Self {
        Self { entries }
    }
}

impl Enricher for StaticEnricher {
    fn enrich(&self, _request: &EnrichmentRequest) -> EnrichmentResult<Vec<EnrichedLedgerEntry>> {
        Ok(self.entries.clone())
    }

    fn name(&self) -> &str {
        "static"
    }
}
