//! Dashboard assembly: conditional provider fan-out with partial-failure
//! tolerance.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use log::warn;

use atlasboard_country_data::{CountryInfo, CurrencyRatesProvider, WeatherProvider};

use super::dashboards_model::{Dashboard, DashboardFeatures};
use super::dashboards_traits::DashboardServiceTrait;
use crate::country::CountryResolverTrait;
use crate::errors::Result;
use crate::registrations::{Registration, RegistrationRepositoryTrait};

/// Assembles dashboards from a registration and the external providers.
///
/// Feature flags act as a sparse query projection: a provider is called only
/// when at least one requested feature depends on its output, and no single
/// provider failure blocks the features that do not depend on it.
pub struct DashboardService {
    registrations: Arc<dyn RegistrationRepositoryTrait>,
    resolver: Arc<dyn CountryResolverTrait>,
    weather: Arc<dyn WeatherProvider>,
    currency: Arc<dyn CurrencyRatesProvider>,
}

impl DashboardService {
    pub fn new(
        registrations: Arc<dyn RegistrationRepositoryTrait>,
        resolver: Arc<dyn CountryResolverTrait>,
        weather: Arc<dyn WeatherProvider>,
        currency: Arc<dyn CurrencyRatesProvider>,
    ) -> Self {
        Self {
            registrations,
            resolver,
            weather,
            currency,
        }
    }

    /// Resolve country info when a country-dependent feature asks for it.
    /// Resolution failure is non-fatal: everything depending on it is simply
    /// omitted from the result.
    async fn resolve_country(&self, registration: &Registration) -> Option<CountryInfo> {
        if !registration.features.needs_country_info() {
            return None;
        }

        let key = registration.country_key();
        match self.resolver.resolve(key).await {
            Ok(info) => Some(info),
            Err(e) => {
                warn!("Could not resolve country info for '{}': {}", key, e);
                None
            }
        }
    }

    async fn fill_weather(&self, info: &CountryInfo, registration: &Registration, features: &mut DashboardFeatures) {
        let lat = info.coordinates.latitude;
        let lon = info.coordinates.longitude;
        match self.weather.fetch_averages(lat, lon).await {
            Ok(meteo) => {
                if registration.features.temperature {
                    features.temperature = Some(meteo.average_temp);
                }
                if registration.features.precipitation {
                    features.precipitation = Some(meteo.average_precipitation);
                }
            }
            Err(e) => {
                warn!("Could not fetch weather for lat={:.2} lon={:.2}: {}", lat, lon, e);
            }
        }
    }

    async fn fill_currencies(&self, info: &CountryInfo, registration: &Registration, features: &mut DashboardFeatures) {
        match self.currency.fetch_rates(&info.base_currency).await {
            Ok(rates) => {
                // Project the full table down to the requested codes; codes
                // the provider does not know are silently dropped.
                let mut projected = HashMap::new();
                for code in &registration.features.target_currencies {
                    if let Some(rate) = rates.get(code) {
                        projected.insert(code.clone(), *rate);
                    }
                }
                features.target_currencies = Some(projected);
            }
            Err(e) => {
                warn!(
                    "Could not fetch currency rates for base={}: {}",
                    info.base_currency, e
                );
            }
        }
    }
}

#[async_trait]
impl DashboardServiceTrait for DashboardService {
    async fn build_dashboard(&self, registration_id: &str) -> Result<Dashboard> {
        // The registration lookup is the only fatal step.
        let registration = self.registrations.get_by_id(registration_id).await?;

        let mut features = DashboardFeatures::default();

        let country_info = self.resolve_country(&registration).await;

        if let Some(info) = &country_info {
            if registration.features.capital {
                features.capital = Some(info.capital.clone());
            }
            if registration.features.coordinates {
                features.coordinates = Some(info.coordinates);
            }
            if registration.features.population {
                features.population = Some(info.population);
            }
            if registration.features.area {
                features.area = Some(info.area);
            }

            if registration.features.needs_weather() {
                self.fill_weather(info, &registration, &mut features).await;
            }

            if !registration.features.target_currencies.is_empty() && !info.base_currency.is_empty()
            {
                self.fill_currencies(info, &registration, &mut features).await;
            }
        }

        Ok(Dashboard {
            country: registration.country,
            iso_code: registration.iso_code,
            features,
            last_retrieval: Utc::now(),
        })
    }
}
