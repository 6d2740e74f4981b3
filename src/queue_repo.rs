// Upstream telemetry API client. One GET per fetch, decoded as a whole batch of samples.

use std::time::Duration;

use tracing::instrument;

use crate::config::UpstreamConfig;
use crate::error::FetchError;
use crate::models::{Sample, TimeRange};

pub struct QueueRepo {
    client: reqwest::Client,
    base_url: String,
}

impl QueueRepo {
    pub fn new(config: &UpstreamConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// `GET {base}/queue?server=<id>&hours=<n>`; `hours` is omitted for lifetime.
    #[instrument(skip(self, range), fields(repo = "queue", operation = "fetch_samples", range = %range))]
    pub async fn fetch_samples(
        &self,
        server_id: &str,
        range: TimeRange,
    ) -> Result<Vec<Sample>, FetchError> {
        let mut query: Vec<(&str, String)> = vec![("server", server_id.to_string())];
        if let Some(hours) = range.lookback_hours() {
            query.push(("hours", hours.to_string()));
        }
        let response = self
            .client
            .get(format!("{}/queue", self.base_url))
            .query(&query)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }
        let body = response.bytes().await?;
        let samples = decode_samples(&body)?;
        tracing::debug!(samples_count = samples.len(), "samples fetched");
        Ok(samples)
    }
}

/// Decode a JSON array of samples; any malformed element rejects the whole batch.
pub fn decode_samples(body: &[u8]) -> Result<Vec<Sample>, FetchError> {
    Ok(serde_json::from_slice(body)?)
}
