//! HTTP evidence client.
//!
//! Fetches search-snippet text for a symbol name from a configured
//! endpoint. Blocking by design — the walker is synchronous and each
//! lookup gates a single node. Any failure maps to
//! `EvidenceSourceExhausted`, which the walker treats as terminal for the
//! run (fail-open to offline classification).

use std::time::Duration;

use provenance_core::config::ClassifyConfig;
use provenance_core::errors::ClassifyError;
use provenance_core::traits::EvidenceSource;
use tracing::debug;

/// Evidence source backed by a plain GET endpoint (`?q=<name>` returning a
/// text snippet).
pub struct WebEvidenceSource {
    endpoint: String,
    client: reqwest::blocking::Client,
}

impl WebEvidenceSource {
    pub fn new(endpoint: impl Into<String>, timeout_secs: u64) -> Result<Self, ClassifyError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|_| ClassifyError::EvidenceSourceExhausted)?;
        Ok(Self {
            endpoint: endpoint.into(),
            client,
        })
    }

    /// Build from config; `None` when no endpoint is configured (the
    /// engine then runs offline from the start).
    pub fn from_config(config: &ClassifyConfig) -> Option<Self> {
        let endpoint = config.evidence_endpoint.clone()?;
        Self::new(endpoint, config.effective_evidence_timeout_secs()).ok()
    }
}

impl EvidenceSource for WebEvidenceSource {
    fn lookup(&mut self, name: &str) -> Result<String, ClassifyError> {
        debug!(%name, "evidence lookup");
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("q", name)])
            .send()
            .map_err(|_| ClassifyError::EvidenceSourceExhausted)?;

        if !response.status().is_success() {
            return Err(ClassifyError::EvidenceSourceExhausted);
        }
        response
            .text()
            .map_err(|_| ClassifyError::EvidenceSourceExhausted)
    }
}
