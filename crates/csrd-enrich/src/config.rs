//! Enrichment service configuration.

use url::Url;

use crate::error::{EnrichmentError, EnrichmentResult};

/// Environment variable naming the enrichment endpoint URL.
pub const ENV_ENDPOINT: &str = "CSRD_ENRICH_URL";
/// Environment variable carrying the bearer token, if the service needs one.
pub const ENV_TOKEN: &str = "CSRD_ENRICH_TOKEN";
/// Environment variable overriding the request timeout in seconds.
pub const ENV_TIMEOUT_SECS: &str = "CSRD_ENRICH_TIMEOUT_SECS";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the HTTP enricher.
#[derive(Clone)]
pub struct EnrichmentConfig {
    /// Endpoint the enrichment request is POSTed to.
    pub endpoint: Url,
    /// Optional bearer token.
    pub token: Option<String>,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl EnrichmentConfig {
    /// Build a configuration from an endpoint string, validating the URL.
    pub fn new(endpoint: &str) -> EnrichmentResult<Self> {
        let endpoint = Url::parse(endpoint).map_err(|e| EnrichmentError::NotConfigured {
            reason: format!("invalid endpoint URL {endpoint:?}: {e}"),
        })?;
        Ok(Self {
            endpoint,
            token: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        })
    }

    /// Attach a bearer token.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Override the request timeout.
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Read the configuration from the environment.
    ///
    /// Returns `Ok(None)` when [`ENV_ENDPOINT`] is unset: enrichment is
    /// optional, and an absent endpoint simply means the deterministic path
    /// runs alone. A present but invalid endpoint is an error.
    pub fn from_env() -> EnrichmentResult<Option<Self>> {
        let endpoint = match std::env::var(ENV_ENDPOINT) {
            Ok(value) if !value.trim().is_empty() => value,
            _ => return Ok(None),
        };
        let mut config = Self::new(&endpoint)?;
        if let Ok(token) = std::env::var(ENV_TOKEN) {
            if !token.is_empty() {
                config = config.with_token(token);
            }
        }
        if let Ok(raw) = std::env::var(ENV_TIMEOUT_SECS) {
            let secs = raw.parse::<u64>().map_err(|_| EnrichmentError::NotConfigured {
                reason: format!("{ENV_TIMEOUT_SECS} must be an integer, got {raw:?}"),
            })?;
            config = config.with_timeout_secs(secs);
        }
        Ok(Some(config))
    }
}

// Manual Debug so a bearer token never reaches a log line.
impl std::fmt::Debug for EnrichmentConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnrichmentConfig")
            .field("endpoint", &self.endpoint.as_str())
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
