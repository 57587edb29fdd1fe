//! Value objects returned by the provider adapters.
//!
//! These are ephemeral: nothing here is persisted directly. `CountryInfo` is
//! the one exception in spirit - the resolver serializes it to JSON bytes
//! inside a cache entry, so it must round-trip losslessly.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Geographic coordinates of a country's reference point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Country identity data as resolved from REST Countries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryInfo {
    /// Common name of the country.
    pub name: String,
    /// First listed capital city, empty when the provider lists none.
    pub capital: String,
    pub population: i64,
    pub area: f64,
    /// First-iterated currency code, empty when the provider lists none.
    pub base_currency: String,
    pub coordinates: Coordinates,
}

/// Averaged weather data from Open-Meteo's hourly forecast series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeteoData {
    pub average_temp: f64,
    pub average_precipitation: f64,
}

/// Exchange rates relative to some base currency, keyed by currency code.
pub type CurrencyRates = HashMap<String, f64>;
