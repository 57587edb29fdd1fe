//! REST Countries provider for country identity data.
//!
//! Resolves a country name or ISO code into name, capital, population, area,
//! coordinates and base currency via a single lookup requesting a fixed field
//! set. When the API returns multiple matches, the first entry is used.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::errors::CountryDataError;
use crate::models::{Coordinates, CountryInfo};
use crate::provider::CountryInfoProvider;

/// Provider ID constant
const PROVIDER_ID: &str = "REST_COUNTRIES";

/// Default API base URL
const DEFAULT_BASE_URL: &str = "https://restcountries.com/v3.1";

/// Field projection requested from the API
const FIELDS: &str = "name,capital,population,area,latlng,currencies";

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Probe timeout, kept short so status checks stay cheap
const PROBE_TIMEOUT: Duration = Duration::from_secs(3);

/// A single country record as returned by REST Countries.
#[derive(Debug, Deserialize)]
struct RestCountry {
    name: RestCountryName,
    #[serde(default)]
    capital: Vec<String>,
    #[serde(default)]
    population: i64,
    #[serde(default)]
    area: f64,
    #[serde(default)]
    latlng: Vec<f64>,
    #[serde(default)]
    currencies: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
struct RestCountryName {
    common: String,
}

pub struct RestCountriesProvider {
    client: Client,
    base_url: String,
}

impl Default for RestCountriesProvider {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL.to_string())
    }
}

impl RestCountriesProvider {
    pub fn new(base_url: String) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client, base_url }
    }

    /// Collapse a parsed record into the domain value.
    ///
    /// The first capital entry and the first currency key win; both fall back
    /// to an empty string. Coordinates require exactly a 2-element pair.
    fn into_country_info(record: RestCountry) -> CountryInfo {
        let mut info = CountryInfo {
            name: record.name.common,
            population: record.population,
            area: record.area,
            ..Default::default()
        };

        if let Some(capital) = record.capital.first() {
            info.capital = capital.clone();
        }
        if record.latlng.len() == 2 {
            info.coordinates = Coordinates {
                latitude: record.latlng[0],
                longitude: record.latlng[1],
            };
        }
        if let Some(code) = record.currencies.keys().next() {
            info.base_currency = code.clone();
        }

        info
    }
}

#[async_trait]
impl CountryInfoProvider for RestCountriesProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn fetch_country(&self, name_or_iso: &str) -> Result<CountryInfo, CountryDataError> {
        let url = format!("{}/name/{}?fields={}", self.base_url, name_or_iso, FIELDS);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CountryDataError::UnexpectedStatus {
                provider: PROVIDER_ID.to_string(),
                status: status.as_u16(),
            });
        }

        let parsed: Vec<RestCountry> =
            response
                .json()
                .await
                .map_err(|e| CountryDataError::ProviderError {
                    provider: PROVIDER_ID.to_string(),
                    message: e.to_string(),
                })?;

        let first = parsed
            .into_iter()
            .next()
            .ok_or_else(|| CountryDataError::CountryNotFound(name_or_iso.to_string()))?;

        Ok(Self::into_country_info(first))
    }

    async fn probe(&self) -> Result<(), CountryDataError> {
        let url = format!("{}/alpha/NO?fields=name", self.base_url);
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
