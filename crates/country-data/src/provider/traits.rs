//! Provider trait definitions.
//!
//! One trait per external concern. All three expose a cheap `probe` used by
//! the status aggregator: a minimal request with a short timeout where any
//! 2xx answer counts as healthy.

use async_trait::async_trait;

use crate::errors::CountryDataError;
use crate::models::{CountryInfo, CurrencyRates, MeteoData};

/// Resolves a country name or ISO code to its identity data.
#[async_trait]
pub trait CountryInfoProvider: Send + Sync {
    /// Unique identifier for this provider, used in logs and errors.
    fn id(&self) -> &'static str;

    /// Look up a country by common name or ISO code.
    ///
    /// When the upstream returns multiple matches the first one wins.
    async fn fetch_country(&self, name_or_iso: &str) -> Result<CountryInfo, CountryDataError>;

    /// Minimal reachability check with a short timeout.
    async fn probe(&self) -> Result<(), CountryDataError>;
}

/// Fetches averaged weather data for a coordinate pair.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    fn id(&self) -> &'static str;

    /// Fetch the hourly forecast for `(lat, lon)` and return the arithmetic
    /// mean of the temperature and precipitation series. An empty series
    /// averages to 0.0.
    async fn fetch_averages(&self, lat: f64, lon: f64) -> Result<MeteoData, CountryDataError>;

    async fn probe(&self) -> Result<(), CountryDataError>;
}

/// Fetches the full exchange-rate table for a base currency.
#[async_trait]
pub trait CurrencyRatesProvider: Send + Sync {
    fn id(&self) -> &'static str;

    /// Fetch all rates relative to `base`. The caller projects the table
    /// down to the codes it actually wants.
    async fn fetch_rates(&self, base: &str) -> Result<CurrencyRates, CountryDataError>;

    async fn probe(&self) -> Result<(), CountryDataError>;
}
