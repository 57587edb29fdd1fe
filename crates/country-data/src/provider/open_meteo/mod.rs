//! Open-Meteo provider for averaged weather data.
//!
//! Requests the default hourly forecast horizon for temperature and
//! precipitation and reduces each series to its arithmetic mean. No caching
//! layer wraps this provider - every dashboard read recomputes live.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::errors::CountryDataError;
use crate::models::MeteoData;
use crate::provider::WeatherProvider;

/// Provider ID constant
const PROVIDER_ID: &str = "OPEN_METEO";

/// Default API base URL
const DEFAULT_BASE_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Probe timeout, kept short so status checks stay cheap
const PROBE_TIMEOUT: Duration = Duration::from_secs(3);

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    hourly: HourlySeries,
}

#[derive(Debug, Deserialize)]
struct HourlySeries {
    #[serde(rename = "temperature_2m", default)]
    temperature: Vec<f64>,
    #[serde(default)]
    precipitation: Vec<f64>,
}

pub struct OpenMeteoProvider {
    client: Client,
    base_url: String,
}

impl Default for OpenMeteoProvider {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL.to_string())
    }
}

impl OpenMeteoProvider {
    pub fn new(base_url: String) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client, base_url }
    }
}

/// Arithmetic mean of a series, 0.0 when the series is empty.
fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

#[async_trait]
impl WeatherProvider for OpenMeteoProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn fetch_averages(&self, lat: f64, lon: f64) -> Result<MeteoData, CountryDataError> {
        let url = format!(
            "{}?latitude={:.4}&longitude={:.4}&hourly=temperature_2m,precipitation",
            self.base_url, lat, lon
        );

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CountryDataError::UnexpectedStatus {
                provider: PROVIDER_ID.to_string(),
                status: status.as_u16(),
            });
        }

        let parsed: ForecastResponse =
            response
                .json()
                .await
                .map_err(|e| CountryDataError::ProviderError {
                    provider: PROVIDER_ID.to_string(),
                    message: e.to_string(),
                })?;

        Ok(MeteoData {
            average_temp: mean(&parsed.hourly.temperature),
            average_precipitation: mean(&parsed.hourly.precipitation),
        })
    }

    async fn probe(&self) -> Result<(), CountryDataError> {
        let url = format!(
            "{}?latitude=10&longitude=10&hourly=temperature_2m",
            self.base_url
        );
        let response = self
            .client
            .get(&url)
            .timeout(PROBE_TIMEOUT)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CountryDataError::UnexpectedStatus {
                provider: PROVIDER_ID.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(())
    }
}
