//! Live dependency probing for the status endpoint.

use std::sync::Arc;
use std::time::Instant;

use log::warn;

use atlasboard_country_data::{
    CountryDataError, CountryInfoProvider, CurrencyRatesProvider, WeatherProvider,
};

use super::status_model::StatusReport;
use crate::constants::SERVICE_VERSION;
use crate::notifications::NotificationRepositoryTrait;

/// Probes every external dependency on each call; nothing is cached.
pub struct StatusService {
    country_provider: Arc<dyn CountryInfoProvider>,
    weather_provider: Arc<dyn WeatherProvider>,
    currency_provider: Arc<dyn CurrencyRatesProvider>,
    notifications: Arc<dyn NotificationRepositoryTrait>,
    started_at: Instant,
}

impl StatusService {
    pub fn new(
        country_provider: Arc<dyn CountryInfoProvider>,
        weather_provider: Arc<dyn WeatherProvider>,
        currency_provider: Arc<dyn CurrencyRatesProvider>,
        notifications: Arc<dyn NotificationRepositoryTrait>,
        started_at: Instant,
    ) -> Self {
        Self {
            country_provider,
            weather_provider,
            currency_provider,
            notifications,
            started_at,
        }
    }

    fn probe_code(provider_id: &str, result: Result<(), CountryDataError>) -> u16 {
        match result {
            Ok(()) => 200,
            Err(e) => {
                warn!("Status probe for {} failed: {}", provider_id, e);
                503
            }
        }
    }

    pub async fn get_status(&self) -> StatusReport {
        let countries_api = Self::probe_code(
            self.country_provider.id(),
            self.country_provider.probe().await,
        );
        let meteo_api = Self::probe_code(
            self.weather_provider.id(),
            self.weather_provider.probe().await,
        );
        let currency_api = Self::probe_code(
            self.currency_provider.id(),
            self.currency_provider.probe().await,
        );

        let (notification_db, webhooks) = match self.notifications.list().await {
            Ok(notifications) => (200, notifications.len()),
            Err(e) => {
                warn!("Status probe for notification store failed: {}", e);
                (503, 0)
            }
        };

        StatusReport {
            countries_api,
            meteo_api,
            currency_api,
            notification_db,
            webhooks,
            version: SERVICE_VERSION.to_string(),
            uptime: self.started_at.elapsed().as_secs(),
        }
    }
}
