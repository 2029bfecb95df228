//! HTTP adapter for a remote enrichment service.

use std::time::Duration;

use tracing::debug;

use crate::config::EnrichmentConfig;
use crate::contract::{EnrichedLedgerEntry, EnrichmentRequest};
use crate::enricher::Enricher;
use crate::error::{EnrichmentError, EnrichmentResult};

/// Enricher backed by an HTTP service speaking the JSON contract in
/// [`crate::contract`].
///
/// The request is POSTed to the configured endpoint; the response body must
/// be a bare JSON array of entries. Anything else (transport failure,
/// non-2xx status, malformed JSON, or a well-formed body with the wrong
/// shape) maps to the corresponding [`EnrichmentError`] variant and the
/// caller falls back to its deterministic ledger.
#[derive(Debug)]
pub struct HttpEnricher {
    client: reqwest::blocking::Client,
    endpoint: String,
}

impl HttpEnricher {
    /// Create an HTTP enricher from configuration.
    pub fn new(config: &EnrichmentConfig) -> EnrichmentResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers({
                let mut headers = reqwest::header::HeaderMap::new();
                if let Some(token) = &config.token {
                    let mut value =
                        reqwest::header::HeaderValue::from_str(&format!("Bearer {token}"))
                            .map_err(|_| EnrichmentError::NotConfigured {
                                reason: "invalid bearer token characters".into(),
                            })?;
                    value.set_sensitive(true);
                    headers.insert(reqwest::header::AUTHORIZATION, value);
                }
                headers.insert(
                    reqwest::header::CONTENT_TYPE,
                    reqwest::header::HeaderValue::from_static("application/json"),
                );
                headers
            })
            .build()
            .map_err(|e| EnrichmentError::NotConfigured {
                reason: format!("failed to build HTTP client: {e}"),
            })?;

        let endpoint = config.endpoint.as_str().trim_end_matches('/').to_string();
        Ok(Self { client, endpoint })
    }
}

impl Enricher for HttpEnricher {
    fn enrich(&self, request: &EnrichmentRequest) -> EnrichmentResult<Vec<EnrichedLedgerEntry>> {
        debug!(
            endpoint = %self.endpoint,
            claims = request.claims.len(),
            "submitting enrichment request"
        );

        let resp = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .map_err(|e| {
                if e.is_timeout() {
                    EnrichmentError::Transport {
                        reason: "request timed out".into(),
                    }
                } else {
                    EnrichmentError::Transport {
                        reason: format!("enrich: {e}"),
                    }
                }
            })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            return Err(EnrichmentError::Transport {
                reason: format!("enrich: HTTP {status} {body}"),
            });
        }

        let body = resp.text().map_err(|e| EnrichmentError::Transport {
            reason: format!("reading response body: {e}"),
        })?;

        // Malformed JSON and well-formed-but-wrong-shape payloads report
        // differently, so parse in two steps.
        let value: serde_json::Value =
            serde_json::from_str(&body).map_err(|e| EnrichmentError::Parse {
                reason: format!("response is not valid JSON: {e}"),
            })?;
        let entries: Vec<EnrichedLedgerEntry> =
            serde_json::from_value(value).map_err(|e| EnrichmentError::SchemaMismatch {
                reason: format!("response shape does not match the entry contract: {e}"),
            })?;

        debug!(entries = entries.len(), "enrichment response parsed");
        Ok(entries)
    }

    fn name(&self) -> &str {
        "http"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_trailing_slash_is_trimmed() {
        let config = EnrichmentConfig::new("https://enrich.example.com/v1/ledger/").unwrap();
        let enricher = HttpEnricher::new(&config).unwrap();
        assert_eq!(enricher.endpoint, "https://enrich.example.com/v1/ledger");
    }

    #[test]
    fn token_with_control_characters_is_rejected() {
        let config = EnrichmentConfig::new("https://enrich.example.com/v1/ledger")
            .unwrap()
            .with_token("bad\ntoken");
        let err = HttpEnricher::new(&config).unwrap_err();
        assert!(matches!(err, EnrichmentError::NotConfigured { .. }));
    }
}
