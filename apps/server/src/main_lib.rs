use std::sync::Arc;
use std::time::Instant;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use atlasboard_core::cache::CacheRepositoryTrait;
use atlasboard_core::country::CountryResolver;
use atlasboard_core::dashboards::{DashboardService, DashboardServiceTrait};
use atlasboard_core::notifications::NotificationService;
use atlasboard_core::registrations::RegistrationService;
use atlasboard_core::status::StatusService;
use atlasboard_core::webhooks::{WebhookDispatcher, WebhookDispatcherTrait};
use atlasboard_country_data::{
    CountryInfoProvider, CurrencyRatesProvider, ExchangeRateApiProvider, OpenMeteoProvider,
    RestCountriesProvider, WeatherProvider,
};
use atlasboard_storage_memory::{
    InMemoryCacheRepository, InMemoryNotificationRepository, InMemoryRegistrationRepository,
};

pub struct AppState {
    pub registration_service: Arc<RegistrationService>,
    pub notification_service: Arc<NotificationService>,
    pub dashboard_service: Arc<dyn DashboardServiceTrait + Send + Sync>,
    pub status_service: Arc<StatusService>,
    pub webhook_dispatcher: Arc<dyn WebhookDispatcherTrait + Send + Sync>,
    pub cache_repository: Arc<dyn CacheRepositoryTrait>,
}

pub fn init_tracing() {
    let log_format = std::env::var("AB_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

/// Build the application state against the real external providers.
pub fn build_state() -> Arc<AppState> {
    build_state_with_providers(
        Arc::new(RestCountriesProvider::default()),
        Arc::new(OpenMeteoProvider::default()),
        Arc::new(ExchangeRateApiProvider::default()),
    )
}

/// Build the application state with injected providers. Tests use this to
/// substitute stubs for the external APIs.
pub fn build_state_with_providers(
    country_provider: Arc<dyn CountryInfoProvider>,
    weather_provider: Arc<dyn WeatherProvider>,
    currency_provider: Arc<dyn CurrencyRatesProvider>,
) -> Arc<AppState> {
    let registration_repo = Arc::new(InMemoryRegistrationRepository::new());
    let notification_repo = Arc::new(InMemoryNotificationRepository::new());
    let cache_repo: Arc<dyn CacheRepositoryTrait> = Arc::new(InMemoryCacheRepository::new());

    let registration_service = Arc::new(RegistrationService::new(registration_repo.clone()));
    let notification_service = Arc::new(NotificationService::new(notification_repo.clone()));

    let resolver = Arc::new(CountryResolver::new(
        cache_repo.clone(),
        country_provider.clone(),
    ));
    let dashboard_service: Arc<dyn DashboardServiceTrait + Send + Sync> =
        Arc::new(DashboardService::new(
            registration_repo,
            resolver,
            weather_provider.clone(),
            currency_provider.clone(),
        ));

    let webhook_dispatcher: Arc<dyn WebhookDispatcherTrait + Send + Sync> =
        Arc::new(WebhookDispatcher::new(notification_repo.clone()));

    let status_service = Arc::new(StatusService::new(
        country_provider,
        weather_provider,
        currency_provider,
        notification_repo,
        Instant::now(),
    ));

    Arc::new(AppState {
        registration_service,
        notification_service,
        dashboard_service,
        status_service,
        webhook_dispatcher,
        cache_repository: cache_repo,
    })
}
