// HTTP data source implementation
use crate::application::temperature_source::{FetchError, TemperatureSource};
use crate::domain::temperature::{RawReading, TimeRange};
use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};

#[derive(Debug, Clone)]
pub struct HttpTemperatureSource {
    client: reqwest::Client,
    endpoint_url: String,
}

impl HttpTemperatureSource {
    pub fn new(endpoint_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint_url,
        }
    }

    fn build_request_url(&self, range: &TimeRange) -> String {
        format!(
            "{}?from={}&to={}",
            self.endpoint_url,
            urlencoding::encode(&iso_utc(range.start)),
            urlencoding::encode(&iso_utc(range.end))
        )
    }
}

fn iso_utc(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[async_trait]
impl TemperatureSource for HttpTemperatureSource {
    async fn read_range(&self, range: &TimeRange) -> Result<Vec<RawReading>, FetchError> {
        let url = self.build_request_url(range);
        tracing::debug!("Requesting {}", url);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status { status, body });
        }

        let text = response
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        serde_json::from_str(&text).map_err(|e| {
            tracing::debug!(
                error = %e,
                body_preview = %text.chars().take(500).collect::<String>(),
                "Failed to parse temperature response"
            );
            FetchError::Payload(e.to_string())
        })
    }
}
