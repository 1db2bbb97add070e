//! Transport shim — remote-or-local insight execution.
//!
//! In `Remote` mode the provider POSTs the query to a peer insight endpoint
//! with a bounded timeout. Any failure on that path (connect error, timeout,
//! non-2xx, unparseable body) is logged and silently recovered by computing
//! the same result locally; transport errors never reach the caller.
//! `Local` mode skips the network entirely.

use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::{ExecutionMode, InsightConfig};
use crate::error::InsightError;
use crate::headline;
use crate::rng::ThreadRandom;
use crate::synth::{self, BusinessInsight, BusinessQuery};

pub struct InsightProvider {
    config: Arc<InsightConfig>,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct HeadlineResponse {
    headline: String,
}

impl InsightProvider {
    pub fn new(config: Arc<InsightConfig>) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    fn remote_timeout(&self) -> Duration {
        Duration::from_secs(self.config.remote_timeout_secs)
    }

    /// Remote base URL, when remote mode is actually usable.
    fn remote_base(&self) -> Option<&str> {
        match self.config.mode {
            ExecutionMode::Remote => self.config.remote_base_url.as_deref(),
            ExecutionMode::Local => None,
        }
    }

    /// Produce a full insight for the query.
    ///
    /// Errors only on invalid input; every transport problem falls back to
    /// local synthesis.
    pub async fn fetch_insight(&self, query: &BusinessQuery) -> Result<BusinessInsight, InsightError> {
        if !query.is_valid() {
            return Err(InsightError::missing_fields());
        }

        if let Some(base) = self.remote_base() {
            match self.call_remote_insight(base, query).await {
                Ok(insight) => {
                    debug!(base, "insight fetched from remote endpoint");
                    return Ok(insight);
                }
                Err(e) => {
                    warn!(base, err = %e, "remote synthesis failed — falling back to local");
                }
            }
        }

        self.simulate_latency().await;
        Ok(synth::synthesize(query, &mut ThreadRandom))
    }

    /// Produce a fresh headline for the pair.
    ///
    /// Non-idempotent by design: repeated calls draw new templates.
    pub async fn regenerate_headline(
        &self,
        name: &str,
        location: &str,
    ) -> Result<String, InsightError> {
        let query = BusinessQuery::new(name, location);
        if !query.is_valid() {
            return Err(InsightError::missing_fields());
        }

        if let Some(base) = self.remote_base() {
            match self.call_remote_headline(base, name, location).await {
                Ok(h) => return Ok(h),
                Err(e) => {
                    warn!(base, err = %e, "remote headline failed — falling back to local");
                }
            }
        }

        self.simulate_latency().await;
        Ok(headline::generate_headline(name, location, &mut ThreadRandom))
    }

    async fn call_remote_insight(
        &self,
        base: &str,
        query: &BusinessQuery,
    ) -> Result<BusinessInsight, reqwest::Error> {
        let url = format!("{base}/business-data");
        let resp = self
            .client
            .post(&url)
            .timeout(self.remote_timeout())
            .json(query)
            .send()
            .await?
            .error_for_status()?;
        resp.json().await
    }

    async fn call_remote_headline(
        &self,
        base: &str,
        name: &str,
        location: &str,
    ) -> Result<String, reqwest::Error> {
        let url = format!("{base}/regenerate-headline");
        let resp = self
            .client
            .get(&url)
            .query(&[("name", name), ("location", location)])
            .timeout(self.remote_timeout())
            .send()
            .await?
            .error_for_status()?;
        let body: HeadlineResponse = resp.json().await?;
        Ok(body.headline)
    }

    /// Cosmetic latency before returning locally computed data. Off by
    /// default; never affects the result.
    async fn simulate_latency(&self) {
        if self.config.mock_delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.config.mock_delay_ms)).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_for_mode(mode: &str) -> Arc<InsightConfig> {
        let dir = tempfile::TempDir::new().unwrap();
        Arc::new(InsightConfig::new(
            Some(0),
            Some(dir.path().to_path_buf()),
            Some("error".to_string()),
            None,
            Some(mode.to_string()),
            None,
        ))
    }

    #[tokio::test]
    async fn local_mode_synthesizes_in_process() {
        let provider = InsightProvider::new(config_for_mode("local"));
        let insight = provider
            .fetch_insight(&BusinessQuery::new("Chai Point Cafe", "Pune"))
            .await
            .unwrap();
        assert_eq!(insight.category, "coffee");
        assert!(insight.rating >= 3.0 && insight.rating <= 5.0);
        assert!(!insight.headline.contains("[BUSINESS]"));
    }

    #[tokio::test]
    async fn blank_fields_are_rejected_before_synthesis() {
        let provider = InsightProvider::new(config_for_mode("local"));
        let err = provider
            .fetch_insight(&BusinessQuery::new("  ", "Pune"))
            .await
            .unwrap_err();
        assert!(matches!(err, InsightError::Validation(_)));

        let err = provider.regenerate_headline("Acme", "").await.unwrap_err();
        assert!(matches!(err, InsightError::Validation(_)));
    }

    #[tokio::test]
    async fn remote_mode_without_url_degrades_to_local() {
        let provider = InsightProvider::new(config_for_mode("remote"));
        let headline = provider.regenerate_headline("Acme", "Pune").await.unwrap();
        assert!(headline.contains("Acme"));
        assert!(headline.contains("Pune"));
    }
}
