//! Exchange-rate provider for currency conversion tables.
//!
//! Fetches the full rate table relative to a base currency. The API wraps
//! its payload in an envelope whose `result` field must read "success";
//! anything else is treated as a provider failure even on HTTP 200.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::errors::CountryDataError;
use crate::models::CurrencyRates;
use crate::provider::CurrencyRatesProvider;

/// Provider ID constant
const PROVIDER_ID: &str = "EXCHANGE_RATE_API";

/// Default API base URL
const DEFAULT_BASE_URL: &str = "https://open.er-api.com/v6/latest";

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Probe timeout, kept short so status checks stay cheap
const PROBE_TIMEOUT: Duration = Duration::from_secs(3);

#[derive(Debug, Deserialize)]
struct RatesResponse {
    result: String,
    #[serde(default)]
    rates: CurrencyRates,
}

pub struct ExchangeRateApiProvider {
    client: Client,
    base_url: String,
}

impl Default for ExchangeRateApiProvider {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL.to_string())
    }
}

impl ExchangeRateApiProvider {
    pub fn new(base_url: String) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client, base_url }
    }
}

#[async_trait]
impl CurrencyRatesProvider for ExchangeRateApiProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn fetch_rates(&self, base: &str) -> Result<CurrencyRates, CountryDataError> {
        let url = format!("{}/{}", self.base_url, base.to_uppercase());

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CountryDataError::UnexpectedStatus {
                provider: PROVIDER_ID.to_string(),
                status: status.as_u16(),
            });
        }

        let parsed: RatesResponse =
            response
                .json()
                .await
                .map_err(|e| CountryDataError::ProviderError {
                    provider: PROVIDER_ID.to_string(),
                    message: e.to_string(),
                })?;

        if parsed.result != "success" {
            return Err(CountryDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("result={} (not success)", parsed.result),
            });
        }

        Ok(parsed.rates)
    }

    async fn probe(&self) -> Result<(), CountryDataError> {
        let url = format!("{}/NOK", self.base_url);
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
