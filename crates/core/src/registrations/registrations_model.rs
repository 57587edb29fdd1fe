//! Registration domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Boolean opt-ins for the data categories a dashboard should surface, plus
/// the list of currency codes to resolve against the country's base currency.
///
/// The default value requests nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Features {
    pub temperature: bool,
    pub precipitation: bool,
    pub capital: bool,
    pub coordinates: bool,
    pub population: bool,
    pub area: bool,
    pub target_currencies: Vec<String>,
}

impl Features {
    /// Whether any requested feature depends on resolved country info.
    pub fn needs_country_info(&self) -> bool {
        self.capital || self.population || self.area || self.coordinates
    }

    /// Whether any requested feature depends on weather data.
    pub fn needs_weather(&self) -> bool {
        self.temperature || self.precipitation
    }
}

/// A saved dashboard configuration for one country.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub id: String,
    /// Country name. May be empty when `iso_code` identifies the country.
    #[serde(default)]
    pub country: String,
    /// ISO country code, the fallback identity key.
    #[serde(default)]
    pub iso_code: String,
    pub features: Features,
    /// Refreshed on every mutating operation that changes the record.
    pub last_change: DateTime<Utc>,
}

impl Registration {
    /// The identity key used for lookups and webhook filtering:
    /// `country` when non-empty, otherwise `iso_code`.
    pub fn country_key(&self) -> &str {
        if self.country.is_empty() {
            &self.iso_code
        } else {
            &self.country
        }
    }

    /// Apply a partial update, returning whether anything changed.
    ///
    /// Merge rules: non-empty string fields overwrite; feature flags
    /// overwrite when they differ from the current value; the target
    /// currency list replaces wholesale when non-empty. `last_change` is
    /// left untouched here so a no-op patch performs no write at all.
    pub fn apply_patch(&mut self, patch: &RegistrationPatch) -> bool {
        let mut changed = false;

        if let Some(country) = &patch.country {
            if !country.is_empty() && *country != self.country {
                self.country = country.clone();
                changed = true;
            }
        }
        if let Some(iso_code) = &patch.iso_code {
            if !iso_code.is_empty() && *iso_code != self.iso_code {
                self.iso_code = iso_code.clone();
                changed = true;
            }
        }

        if let Some(features) = &patch.features {
            if features.temperature != self.features.temperature {
                self.features.temperature = features.temperature;
                changed = true;
            }
            if features.precipitation != self.features.precipitation {
                self.features.precipitation = features.precipitation;
                changed = true;
            }
            if features.capital != self.features.capital {
                self.features.capital = features.capital;
                changed = true;
            }
            if features.coordinates != self.features.coordinates {
                self.features.coordinates = features.coordinates;
                changed = true;
            }
            if features.population != self.features.population {
                self.features.population = features.population;
                changed = true;
            }
            if features.area != self.features.area {
                self.features.area = features.area;
                changed = true;
            }
            if !features.target_currencies.is_empty()
                && features.target_currencies != self.features.target_currencies
            {
                self.features.target_currencies = features.target_currencies.clone();
                changed = true;
            }
        }

        changed
    }
}

/// Input model for creating or fully replacing a registration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewRegistration {
    pub country: String,
    pub iso_code: String,
    pub features: Features,
}

/// Input model for a partial registration update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistrationPatch {
    pub country: Option<String>,
    pub iso_code: Option<String>,
    pub features: Option<Features>,
}

/// Response body for a successful registration creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationCreated {
    pub id: String,
    /// Creation timestamp in the compact `%Y%m%d %H:%M` format.
    pub last_change: String,
}
