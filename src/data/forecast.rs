use anyhow::{Context, Result};
use reqwest::Client;
use tracing::debug;

const FORECAST_URL: &str = "https://api.openweathermap.org/data/2.5/forecast/daily";

/// Thin transport client. Returns the raw response body; all interpretation
/// of the payload, including in-body error statuses, belongs to the decoder.
#[derive(Debug, Clone)]
pub struct ForecastClient {
    client: Client,
    base_url: String,
}

impl Default for ForecastClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ForecastClient {
    pub fn new() -> Self {
        Self::with_base_url(FORECAST_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(10))
                .build()
                .expect("reqwest client"),
            base_url: base_url.into(),
        }
    }

    /// Requests a daily forecast for a "<postal-or-city>,<country>" query.
    pub async fn fetch(&self, location: &str, days: u8, api_key: Option<&str>) -> Result<String> {
        debug!(location, days, "requesting forecast");
        let days = days.to_string();
        let mut request = self.client.get(&self.base_url).query(&[
            ("q", location),
            ("mode", "json"),
            ("units", "metric"),
            ("cnt", days.as_str()),
        ]);
        if let Some(key) = api_key {
            request = request.query(&[("APPID", key)]);
        }

        let response = request.send().await.context("forecast request failed")?;
        response
            .text()
            .await
            .context("failed to read forecast response body")
    }
}
